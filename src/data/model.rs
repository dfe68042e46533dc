use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// FieldValue – a single cell in a survey column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common survey answer shapes.
/// Frequency tables key on `FieldValue` via `BTreeMap`, so it must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

// -- Manual Eq/Ord so we can key a BTreeMap with FieldValue --

impl Eq for FieldValue {}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use FieldValue::*;
        fn discriminant(v: &FieldValue) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                String(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            // Mixed numeric columns still order by magnitude.
            if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
                return a.total_cmp(&b);
            }
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for FieldValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            FieldValue::String(s) => s.hash(state),
            FieldValue::Integer(i) => i.hash(state),
            FieldValue::Float(f) => f.to_bits().hash(state),
            FieldValue::Null => {}
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{s}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Null => write!(f, "<null>"),
        }
    }
}

impl FieldValue {
    /// Try to interpret the value as an `f64` for histogram binning.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

// ---------------------------------------------------------------------------
// SurveyDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// One survey response: column name → typed cell value.
pub type Record = BTreeMap<String, FieldValue>;

/// The full parsed dataset. Read-only after loading.
#[derive(Debug, Clone)]
pub struct SurveyDataset {
    /// All responses (rows), in file order.
    pub records: Vec<Record>,
    /// Column names in header order.
    pub columns: Vec<String>,
}

impl SurveyDataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        SurveyDataset { records, columns }
    }

    /// Number of responses.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}
