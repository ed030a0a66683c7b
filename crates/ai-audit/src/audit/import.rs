use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ScoreSheetError {
    #[error("failed to read score sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid score sheet data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    key: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    score: Option<u32>,
}

/// Reads a `key,score` CSV into a score map. Blank scores are left out so
/// the payload builder treats them as unanswered.
pub fn import_scores<R: Read>(reader: R) -> Result<HashMap<String, u32>, ScoreSheetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut scores = HashMap::new();

    for record in csv_reader.deserialize::<ScoreRow>() {
        let row = record?;
        if let Some(score) = row.score {
            scores.insert(row.key, score);
        }
    }

    Ok(scores)
}

pub fn import_scores_from_path(
    path: impl AsRef<Path>,
) -> Result<HashMap<String, u32>, ScoreSheetError> {
    let file = File::open(path)?;
    import_scores(file)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_scores_and_skips_blanks() {
        let sheet = "key,score\nstrategy, 4\ngovernance,\n data ,2\n";
        let scores = import_scores(Cursor::new(sheet)).expect("sheet parses");

        assert_eq!(scores.get("strategy"), Some(&4));
        assert_eq!(scores.get("data"), Some(&2));
        assert!(!scores.contains_key("governance"));
    }

    #[test]
    fn rejects_non_numeric_scores() {
        let sheet = "key,score\nstrategy,high\n";
        let err = import_scores(Cursor::new(sheet)).expect_err("non-numeric score fails");
        assert!(matches!(err, ScoreSheetError::Csv(_)));
    }
}
