use super::{AuditExport, ExportError};
use crate::audit::catalog::RESEARCH_QUESTIONS;

enum Cell<'a> {
    Text(&'a str),
    Number(String),
}

impl Cell<'_> {
    /// Text is always quoted with embedded quotes doubled; numbers stay bare.
    fn encode(&self) -> String {
        match self {
            Cell::Text(value) => format!("\"{}\"", value.replace('"', "\"\"")),
            Cell::Number(value) => value.clone(),
        }
    }
}

pub(super) fn render(export: &AuditExport) -> Result<String, ExportError> {
    let AuditExport { payload, result } = export;
    let use_cases = payload.selected_use_cases.join("; ");

    let metadata = vec![
        vec![Cell::Text("Field"), Cell::Text("Value")],
        vec![Cell::Text("Business"), Cell::Text(&payload.business_name)],
        vec![Cell::Text("Industry"), Cell::Text(&payload.industry)],
        vec![Cell::Text("Contact"), Cell::Text(&payload.contact)],
        vec![Cell::Text("Audit Date"), Cell::Text(&payload.audit_date)],
        vec![Cell::Text("Maturity Level"), Cell::Text(result.level.label())],
        vec![
            Cell::Text("Average Score"),
            Cell::Number(format!("{:.2}", result.average)),
        ],
        vec![Cell::Text("Total Score"), Cell::Number(result.total.to_string())],
        vec![Cell::Text("Use Cases"), Cell::Text(&use_cases)],
    ];

    let mut scores = vec![vec![
        Cell::Text("Key"),
        Cell::Text("Category"),
        Cell::Text("Score"),
    ]];
    scores.extend(payload.scores.iter().map(|item| {
        vec![
            Cell::Text(&item.key),
            Cell::Text(&item.label),
            Cell::Number(item.score.to_string()),
        ]
    }));

    let mut research = vec![vec![
        Cell::Text("Key"),
        Cell::Text("Question"),
        Cell::Text("Answer"),
    ]];
    research.extend(RESEARCH_QUESTIONS.iter().map(|question| {
        let answer = payload
            .research_answers
            .get(question.key)
            .map(String::as_str)
            .unwrap_or_default();
        vec![
            Cell::Text(question.key),
            Cell::Text(question.label),
            Cell::Text(answer),
        ]
    }));

    let mut output = Vec::new();
    for (index, section) in [metadata, scores, research].iter().enumerate() {
        if index > 0 {
            output.push(b'\n');
        }
        output.extend(write_section(section)?);
    }

    Ok(String::from_utf8(output)?)
}

/// Cells arrive already encoded, so the writer runs with `QuoteStyle::Never`.
fn write_section(rows: &[Vec<Cell<'_>>]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row.iter().map(Cell::encode))?;
    }

    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}
