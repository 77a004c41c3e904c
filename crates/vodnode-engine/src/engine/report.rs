//! Batch results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RowError;

/// Outcome of one input row.
pub type RowOutcome = Result<Vec<Value>, RowError>;

/// Link from an output item back to the input row it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    /// Zero-based index of the input row.
    pub item: usize,
}

/// One item of the output stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputItem {
    /// Item payload.
    pub json: Value,
    /// Input row that produced the item.
    pub paired_item: PairedItem,
}

/// Result of running a batch of rows, one outcome per row in input order.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    outcomes: Vec<RowOutcome>,
}

impl ExecutionReport {
    pub(crate) fn with_capacity(rows: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(rows),
        }
    }

    pub(crate) fn push(&mut self, outcome: RowOutcome) {
        self.outcomes.push(outcome);
    }

    /// Per-row outcomes in input order.
    pub fn outcomes(&self) -> &[RowOutcome] {
        &self.outcomes
    }

    /// Consumes the report, returning the per-row outcomes.
    pub fn into_outcomes(self) -> Vec<RowOutcome> {
        self.outcomes
    }

    /// Output items of all successful rows, paired with their input row.
    pub fn items(&self) -> Vec<OutputItem> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(row, outcome)| Some((row, outcome.as_ref().ok()?)))
            .flat_map(|(row, items)| {
                items.iter().map(move |json| OutputItem {
                    json: json.clone(),
                    paired_item: PairedItem { item: row },
                })
            })
            .collect()
    }

    /// Failures of all failed rows.
    pub fn errors(&self) -> impl Iterator<Item = &RowError> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if no rows were processed.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns true if every row succeeded.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(Result::is_ok)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::{DispatchError, RowStage};

    #[test]
    fn test_items_keep_row_pairing() {
        let mut report = ExecutionReport::default();
        report.push(Ok(vec![json!(1), json!(2)]));
        report.push(Err(RowError {
            row: 1,
            resource: None,
            operation: None,
            stage: RowStage::ResolveOperation,
            source: DispatchError::invalid_parameter("resource", "missing"),
        }));
        report.push(Ok(vec![json!(3)]));

        let items = report.items();
        let rows: Vec<_> = items.iter().map(|item| item.paired_item.item).collect();
        assert_eq!(rows, [0, 0, 2]);
        assert_eq!(report.errors().count(), 1);
        assert!(!report.is_success());
        assert_eq!(report.len(), 3);

        let encoded = serde_json::to_value(&items[2]).unwrap();
        assert_eq!(encoded, json!({"json": 3, "pairedItem": {"item": 2}}));
    }
}
