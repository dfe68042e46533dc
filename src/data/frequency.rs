use std::collections::BTreeMap;

use thiserror::Error;

use super::model::{FieldValue, SurveyDataset};

// ---------------------------------------------------------------------------
// Frequency tables: which values occur in a column, and how often
// ---------------------------------------------------------------------------

/// Occurrence count per distinct value, ordered by `FieldValue`'s natural
/// order (numerics ascending, then text).
pub type FrequencyTable = BTreeMap<FieldValue, usize>;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),
}

/// Count occurrences of each distinct value in a column.
///
/// `Null` cells are not counted. A column absent from the header is an
/// error rather than an empty table.
pub fn value_counts(dataset: &SurveyDataset, column: &str) -> Result<FrequencyTable, DatasetError> {
    if !dataset.has_column(column) {
        return Err(DatasetError::MissingColumn(column.to_string()));
    }

    let mut table = FrequencyTable::new();
    for record in &dataset.records {
        if let Some(value) = record.get(column) {
            if !value.is_null() {
                *table.entry(value.clone()).or_insert(0) += 1;
            }
        }
    }
    Ok(table)
}

/// Flatten a frequency table into (label, count) pairs ordered by descending
/// count, ties broken by value order. This matches the ordering bar and pie
/// charts present categories in.
pub fn sorted_by_count(table: &FrequencyTable) -> Vec<(String, usize)> {
    let mut entries: Vec<(&FieldValue, usize)> =
        table.iter().map(|(value, count)| (value, *count)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

const MAX_BINS: usize = 10;

/// Binned counts for a histogram, as (bin label, count) pairs in axis order.
///
/// Fully numeric columns get equal-width bins: one bin per integer when the
/// values are integers spanning fewer than `MAX_BINS` units, otherwise the
/// square-root rule capped at `MAX_BINS`. Zero-count gaps are included so the
/// histogram keeps its shape. Columns with any non-numeric value fall back to
/// distinct values in ascending order.
pub fn binned_counts(
    dataset: &SurveyDataset,
    column: &str,
) -> Result<Vec<(String, usize)>, DatasetError> {
    let table = value_counts(dataset, column)?;

    let numeric: Option<Vec<(f64, usize)>> = table
        .iter()
        .map(|(value, count)| value.as_f64().map(|v| (v, *count)))
        .collect();

    match numeric {
        Some(values) if !values.is_empty() => Ok(numeric_bins(&values)),
        _ => Ok(table
            .iter()
            .map(|(value, count)| (value.to_string(), *count))
            .collect()),
    }
}

/// `values` is ascending by value (inherited from the table's ordering).
fn numeric_bins(values: &[(f64, usize)]) -> Vec<(String, usize)> {
    let min = values[0].0;
    let max = values[values.len() - 1].0;
    let total: usize = values.iter().map(|(_, count)| count).sum();

    if (max - min).abs() < f64::EPSILON {
        return vec![(values[0].0.to_string(), total)];
    }

    let all_integers = values.iter().all(|(v, _)| v.fract() == 0.0);
    if all_integers && max - min < MAX_BINS as f64 {
        // Discrete histogram: one bin per integer, gaps at zero.
        return (min as i64..=max as i64)
            .map(|i| {
                let count = values
                    .iter()
                    .filter(|(v, _)| *v == i as f64)
                    .map(|(_, c)| c)
                    .sum();
                (i.to_string(), count)
            })
            .collect();
    }

    let bins = ((total as f64).sqrt().ceil() as usize).clamp(1, MAX_BINS);
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for (value, count) in values {
        let idx = (((value - min) / width) as usize).min(bins - 1);
        counts[idx] += count;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, count)| {
            let lo = min + i as f64 * width;
            (format!("{:.1}-{:.1}", lo, lo + width), *count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset_of(column: &str, cells: &[&str]) -> SurveyDataset {
        let records: Vec<Record> = cells
            .iter()
            .map(|cell| {
                let mut record = Record::new();
                let value = if cell.is_empty() {
                    FieldValue::Null
                } else if let Ok(i) = cell.parse::<i64>() {
                    FieldValue::Integer(i)
                } else {
                    FieldValue::String(cell.to_string())
                };
                record.insert(column.to_string(), value);
                record
            })
            .collect();
        SurveyDataset::new(vec![column.to_string()], records)
    }

    #[test]
    fn counts_known_distribution_exactly() {
        let dataset = dataset_of("faculty", &["Eng", "Eng", "Sci", "Sci", "Sci"]);
        let table = value_counts(&dataset, "faculty").expect("counts");

        assert_eq!(table.len(), 2);
        assert_eq!(table[&FieldValue::String("Eng".into())], 2);
        assert_eq!(table[&FieldValue::String("Sci".into())], 3);
    }

    #[test]
    fn missing_column_is_fatal() {
        let dataset = dataset_of("faculty", &["Eng"]);
        let err = value_counts(&dataset, "rating").unwrap_err();
        assert!(err.to_string().contains("rating"));
    }

    #[test]
    fn single_valued_column_counts_every_row() {
        let dataset = dataset_of("year", &["Year 1"; 4]);
        let table = value_counts(&dataset, "year").expect("counts");

        assert_eq!(table.len(), 1);
        assert_eq!(table[&FieldValue::String("Year 1".into())], 4);
    }

    #[test]
    fn null_cells_are_dropped() {
        let dataset = dataset_of("year", &["Year 1", "", "Year 2"]);
        let table = value_counts(&dataset, "year").expect("counts");
        assert_eq!(table.values().sum::<usize>(), 2);
    }

    #[test]
    fn sorting_is_by_descending_count_then_value() {
        let dataset = dataset_of("opinion", &["No", "Yes", "Yes", "Maybe"]);
        let table = value_counts(&dataset, "opinion").expect("counts");
        let sorted = sorted_by_count(&table);

        assert_eq!(
            sorted,
            vec![
                ("Yes".to_string(), 2),
                ("Maybe".to_string(), 1),
                ("No".to_string(), 1),
            ]
        );
    }

    #[test]
    fn small_integer_range_bins_per_integer_with_gaps() {
        let dataset = dataset_of("rating", &["1", "1", "3", "5", "5", "5"]);
        let bins = binned_counts(&dataset, "rating").expect("bins");

        assert_eq!(
            bins,
            vec![
                ("1".to_string(), 2),
                ("2".to_string(), 0),
                ("3".to_string(), 1),
                ("4".to_string(), 0),
                ("5".to_string(), 3),
            ]
        );
    }

    #[test]
    fn categorical_column_bins_ascending() {
        let dataset = dataset_of("gpa_range", &["3.0 - 3.5", "2.5 - 3.0", "3.0 - 3.5"]);
        let bins = binned_counts(&dataset, "gpa_range").expect("bins");

        assert_eq!(
            bins,
            vec![
                ("2.5 - 3.0".to_string(), 1),
                ("3.0 - 3.5".to_string(), 2),
            ]
        );
    }

    #[test]
    fn wide_numeric_range_covers_every_value() {
        let cells: Vec<String> = (0..100).map(|i| (i % 37).to_string()).collect();
        let refs: Vec<&str> = cells.iter().map(|s| s.as_str()).collect();
        let dataset = dataset_of("score", &refs);
        let bins = binned_counts(&dataset, "score").expect("bins");

        assert!(bins.len() <= 10);
        assert_eq!(bins.iter().map(|(_, c)| c).sum::<usize>(), 100);
    }
}
