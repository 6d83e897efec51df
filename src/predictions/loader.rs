//! @ai:module:intent CSV loader for prediction files
//! @ai:module:layer infrastructure
//! @ai:module:public_api PredictionFile, PREDICTED_COLUMN, TRUE_COLUMN
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::predictions::label::{Label, LabelColumn};
use csv::StringRecord;
use std::path::{Path, PathBuf};

pub const PREDICTED_COLUMN: &str = "pred";
pub const TRUE_COLUMN: &str = "true";

/// @ai:intent Row-aligned predicted and true labels read from one file
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionFile {
    pub path: PathBuf,
    pub predicted: Vec<Label>,
    pub truth: Vec<Label>,
}

impl PredictionFile {
    /// @ai:intent Read the `pred` and `true` columns of a CSV file
    /// @ai:pre path points to a CSV file with a header row
    /// @ai:post predicted and truth have the same, non-zero length and the same label kind
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| Error::csv(path, e))?;

        let headers = reader.headers().map_err(|e| Error::csv(path, e))?.clone();
        let pred_idx = column_index(&headers, PREDICTED_COLUMN, path)?;
        let true_idx = column_index(&headers, TRUE_COLUMN, path)?;

        let mut pred_cells = Vec::new();
        let mut true_cells = Vec::new();

        for record in reader.records() {
            let record = record.map_err(|e| Error::csv(path, e))?;
            pred_cells.push(record.get(pred_idx).unwrap_or_default().to_string());
            true_cells.push(record.get(true_idx).unwrap_or_default().to_string());
        }

        if pred_cells.is_empty() {
            return Err(Error::EmptyPredictions(path.to_path_buf()));
        }

        let predicted = LabelColumn::from_cells(pred_cells, path, PREDICTED_COLUMN)?;
        let truth = LabelColumn::from_cells(true_cells, path, TRUE_COLUMN)?;

        if predicted.kind != truth.kind {
            return Err(Error::MixedLabelTypes {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            predicted: predicted.labels,
            truth: truth.labels,
        })
    }

    /// @ai:intent Number of scored rows
    /// @ai:effects pure
    pub fn len(&self) -> usize {
        self.truth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.truth.is_empty()
    }
}

/// @ai:intent Find a column by exact header name, first match wins
/// @ai:effects pure
fn column_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}
