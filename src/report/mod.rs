//! @ai:module:intent Report generation for the n-gram summary
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, CsvReporter, JsonReporter

pub mod csv_report;
pub mod json_report;

pub use csv_report::{CsvReporter, CsvReporterTrait, SUMMARY_HEADER};
pub use json_report::{JsonReport, JsonReporter, JsonReporterTrait};

use crate::config::PathConfig;
use crate::error::{Error, Result};
use crate::metrics::Summary;
use std::path::Path;

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    csv: CsvReporter,
    json: JsonReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            csv: CsvReporter::new(),
            json: JsonReporter::new(),
        }
    }

    /// @ai:intent Write the summary table and, when configured, the JSON report
    /// @ai:effects fs:write
    pub fn generate_all(&self, summary: &Summary, paths: &PathConfig) -> Result<()> {
        self.csv.generate(summary, &paths.summary_file)?;

        if let Some(json_path) = &paths.json_report {
            self.json.generate(summary, json_path)?;
            tracing::info!("JSON report saved to {}", json_path.display());
        }

        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// @ai:intent Create the directory that will hold an output file
/// @ai:effects fs:write
fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))
        }
        _ => Ok(()),
    }
}
