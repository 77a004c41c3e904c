//! Per-row parameter access.

use derive_more::{Deref, From, Into};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resolves node parameters for an input row.
///
/// `None` means the parameter is undefined for the row; an explicit JSON
/// `null` is a defined value.
pub trait ParameterSource: Send + Sync {
    /// Number of input rows.
    fn row_count(&self) -> usize;

    /// Value of parameter `name` for row `row`.
    fn parameter(&self, row: usize, name: &str) -> Option<Value>;
}

/// Rows given as one JSON object of parameter values each.
///
/// Deserializes from either an array of objects or a single object.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(Serialize, Deserialize, Deref, From, Into)]
#[serde(from = "RowsRepr", into = "Vec<Map<String, Value>>")]
pub struct JsonRows(Vec<Map<String, Value>>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RowsRepr {
    Many(Vec<Map<String, Value>>),
    One(Map<String, Value>),
}

impl From<RowsRepr> for JsonRows {
    fn from(repr: RowsRepr) -> Self {
        match repr {
            RowsRepr::Many(rows) => Self(rows),
            RowsRepr::One(row) => Self(vec![row]),
        }
    }
}

impl JsonRows {
    /// Creates an empty row set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn push(&mut self, row: Map<String, Value>) {
        self.0.push(row);
    }
}

impl FromIterator<Map<String, Value>> for JsonRows {
    fn from_iter<I: IntoIterator<Item = Map<String, Value>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl ParameterSource for JsonRows {
    fn row_count(&self) -> usize {
        self.0.len()
    }

    fn parameter(&self, row: usize, name: &str) -> Option<Value> {
        self.0.get(row)?.get(name).cloned()
    }
}
