/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///     survey.csv
///         │
///         ▼
///   ┌──────────┐
///   │  loader   │  parse file → SurveyDataset
///   └──────────┘
///         │
///         ▼
///   ┌──────────────┐
///   │ SurveyDataset │  Vec<Record>, header order
///   └──────────────┘
///         │
///         ▼
///   ┌───────────┐
///   │ frequency  │  value counts / binned counts per column
///   └───────────┘
/// ```

pub mod frequency;
pub mod loader;
pub mod model;
