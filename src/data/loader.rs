use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{FieldValue, Record, SurveyDataset};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a survey dataset from a CSV file.
///
/// Expected layout: a header row naming each question column, one row per
/// response. Cells are type-guessed (integer, float, text); empty cells
/// load as `Null`.
pub fn load_csv(path: &Path) -> Result<SurveyDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<BTreeMap<String, String>>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let record: Record = raw
            .into_iter()
            .map(|(col, cell)| (col, guess_field_value(&cell)))
            .collect();
        records.push(record);
    }

    Ok(SurveyDataset::new(columns, records))
}

fn guess_field_value(s: &str) -> FieldValue {
    let s = s.trim();
    if s.is_empty() {
        return FieldValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return FieldValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return FieldValue::Float(f);
    }
    FieldValue::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn loads_columns_and_typed_cells() {
        let file = write_csv("faculty,rating\nEngineering,7\nScience,\n");
        let dataset = load_csv(file.path()).expect("load");

        assert_eq!(dataset.columns, vec!["faculty", "rating"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.records[0]["faculty"],
            FieldValue::String("Engineering".into())
        );
        assert_eq!(dataset.records[0]["rating"], FieldValue::Integer(7));
        assert_eq!(dataset.records[1]["rating"], FieldValue::Null);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_csv(Path::new("does_not_exist.csv")).is_err());
    }

    #[test]
    fn guesses_floats_and_text() {
        assert_eq!(guess_field_value("3.5"), FieldValue::Float(3.5));
        assert_eq!(guess_field_value(" Yes "), FieldValue::String("Yes".into()));
        assert_eq!(guess_field_value(""), FieldValue::Null);
    }
}
