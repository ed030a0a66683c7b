use super::AuditExport;
use crate::audit::catalog::RESEARCH_QUESTIONS;
use std::fmt::{self, Write as _};

pub(super) fn render(export: &AuditExport) -> Result<String, fmt::Error> {
    let AuditExport { payload, result } = export;
    let mut out = String::new();

    writeln!(out, "AI Readiness Audit Report")?;
    writeln!(out, "=========================")?;
    writeln!(out, "Business: {}", payload.business_name)?;
    writeln!(out, "Industry: {}", payload.industry)?;
    writeln!(out, "Contact: {}", payload.contact)?;
    writeln!(out, "Audit date: {}", payload.audit_date)?;

    heading(&mut out, "Maturity Summary")?;
    writeln!(out, "Overall AI maturity: {}", result.level)?;
    writeln!(out, "Average score: {:.2}/5", result.average)?;
    writeln!(
        out,
        "Total score: {}/{}",
        result.total,
        payload.scores.len() * 5
    )?;

    heading(&mut out, "Category Scores")?;
    for item in &payload.scores {
        writeln!(out, "- {}: {}/5", item.label, item.score)?;
    }

    heading(&mut out, "Research Answers")?;
    for question in RESEARCH_QUESTIONS {
        let answer = payload
            .research_answers
            .get(question.key)
            .map(String::as_str)
            .unwrap_or_default();
        writeln!(out, "- {}: {}", question.label, answer)?;
    }

    heading(&mut out, "Selected Use Cases")?;
    if payload.selected_use_cases.is_empty() {
        writeln!(out, "None selected")?;
    } else {
        for use_case in &payload.selected_use_cases {
            writeln!(out, "- {use_case}")?;
        }
    }

    heading(&mut out, "Recommendations")?;
    for (index, item) in result.guidance.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, item)?;
    }

    writeln!(out)?;
    writeln!(out, "Prepared for: {}", payload.contact)?;

    Ok(out)
}

fn heading(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::export::tests::sample_export;

    #[test]
    fn text_report_lists_sections_in_order() {
        let rendered = render(&sample_export()).expect("text renders");

        let order = [
            "Business: Acme & Co.",
            "Overall AI maturity: Developing",
            "Average score: 3.50/5",
            "Total score: 21/30",
            "- AI Strategy & Leadership: 4/5",
            "- Operational Pain Points: Manual invoicing",
            "- Internal knowledge search",
            "1. Formalize governance committees",
            "Prepared for: ops@acme.example",
        ];
        let mut cursor = 0;
        for needle in order {
            let found = rendered[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
            cursor += found + needle.len();
        }
    }

    #[test]
    fn text_report_marks_empty_use_cases() {
        let mut export = sample_export();
        export.payload.selected_use_cases.clear();

        let rendered = render(&export).expect("text renders");
        assert!(rendered.lines().any(|line| line == "None selected"));
    }
}
