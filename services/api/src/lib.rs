mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use ai_audit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
