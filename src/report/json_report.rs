//! @ai:module:intent JSON report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, JsonReport
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::metrics::{PerFileMetrics, Summary, SummaryRow};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Generate JSON report from a summary
    fn generate(&self, summary: &Summary, output_path: &Path) -> Result<()>;
}

/// @ai:intent Serialized shape of the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub generated_at: String,
    pub file_count: usize,
    pub summary: Vec<SummaryRow>,
    pub files: Vec<PerFileMetrics>,
}

impl JsonReport {
    /// @ai:intent Snapshot a summary with the current time
    /// @ai:effects clock
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            file_count: summary.file_count(),
            summary: summary.rows.clone(),
            files: summary.files.clone(),
        }
    }
}

/// @ai:intent Generates JSON reports with summary rows and per-file detail
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Generate JSON report to file
    /// @ai:effects fs:write
    fn generate(&self, summary: &Summary, output_path: &Path) -> Result<()> {
        super::ensure_parent_dir(output_path)?;

        let json = serde_json::to_string_pretty(&JsonReport::from_summary(summary))?;
        std::fs::write(output_path, json).map_err(|e| Error::io(output_path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_generate_json_report() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("reports").join("summary.json");

        let summary = Summary {
            rows: vec![SummaryRow {
                model: 2,
                accuracy: 0.5,
                precision: 0.5,
                recall: 0.5,
                f1_score: 0.5,
            }],
            files: vec![PerFileMetrics {
                key: 2,
                path: PathBuf::from("scores/MLP/run--2-gram.csv"),
                rows: 4,
                accuracy: 0.5,
                precision: 0.5,
                recall: 0.5,
                f1_score: 0.5,
            }],
        };

        reporter.generate(&summary, &output).unwrap();
        assert!(output.exists());

        let report: JsonReport =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(report.file_count, 1);
        assert_eq!(report.summary[0].model, 2);
        assert_eq!(report.files[0].rows, 4);
    }

    #[test]
    fn test_summary_rows_use_table_headers() {
        let row = SummaryRow {
            model: 1,
            accuracy: 1.0,
            precision: 1.0,
            recall: 1.0,
            f1_score: 1.0,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("F1_score").is_some());
        assert!(value.get("Model").is_some());
    }
}
