//! @ai:module:intent Metric types for per-file scores and the n-gram summary
//! @ai:module:layer domain
//! @ai:module:public_api PerFileMetrics, SummaryRow, Summary
//! @ai:module:stateless true

use crate::metrics::classification::ClassificationScores;
use crate::naming::GroupKey;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Scores for a single prediction file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerFileMetrics {
    pub key: GroupKey,
    pub path: PathBuf,
    pub rows: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl PerFileMetrics {
    /// @ai:intent Attach file identity to computed scores
    /// @ai:effects pure
    pub fn new(key: GroupKey, path: PathBuf, rows: usize, scores: ClassificationScores) -> Self {
        Self {
            key,
            path,
            rows,
            accuracy: scores.accuracy,
            precision: scores.precision,
            recall: scores.recall,
            f1_score: scores.f1_score,
        }
    }
}

/// @ai:intent One output row: the mean scores of every file sharing an n-gram key
///
/// Field names are the column headers of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Model")]
    pub model: GroupKey,
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    #[serde(rename = "Precision")]
    pub precision: f64,
    #[serde(rename = "Recall")]
    pub recall: f64,
    #[serde(rename = "F1_score")]
    pub f1_score: f64,
}

/// @ai:intent Complete result of one run, handed to the report writers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Rows in first-encounter order of their key
    pub rows: Vec<SummaryRow>,
    /// Every scored file in discovery order
    pub files: Vec<PerFileMetrics>,
}

impl Summary {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// @ai:intent Find the row for a key
    /// @ai:effects pure
    pub fn row(&self, key: GroupKey) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.model == key)
    }
}
