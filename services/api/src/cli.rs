use crate::commands::{run_catalog, run_evaluate, run_export, EvaluateArgs, ExportArgs};
use crate::server;
use ai_audit::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AI Readiness Audit",
    about = "Score AI readiness audits and export client reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an audit and print the report with a summary draft
    Evaluate(EvaluateArgs),
    /// Score an audit and write JSON, CSV, and text reports
    Export(ExportArgs),
    /// List audit categories, research questions, and the use case catalog
    Catalog,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Export(args) => run_export(args),
        Command::Catalog => {
            run_catalog();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_audit::audit::ExportFormat;

    #[test]
    fn export_accepts_repeated_scores_and_formats() {
        let cli = Cli::try_parse_from([
            "ai-audit",
            "export",
            "--business-name",
            "Acme",
            "--score",
            "strategy=4",
            "--score",
            "data=2",
            "--use-case",
            "Internal knowledge search",
            "--format",
            "csv",
            "--format",
            "txt",
        ])
        .expect("arguments parse");

        let Some(Command::Export(args)) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.formats, [ExportFormat::Csv, ExportFormat::Text]);
        assert_eq!(args.input.scores.len(), 2);
        assert_eq!(args.input.use_cases, ["Internal knowledge search"]);
    }

    #[test]
    fn rejects_out_of_range_score() {
        let result = Cli::try_parse_from(["ai-audit", "evaluate", "--score", "strategy=9"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["ai-audit"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
