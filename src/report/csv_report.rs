//! @ai:module:intent CSV summary table generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api CsvReporter, SUMMARY_HEADER
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::metrics::Summary;
use std::path::Path;

pub const SUMMARY_HEADER: [&str; 5] = ["Model", "Accuracy", "Precision", "Recall", "F1_score"];

/// @ai:intent Trait for summary table generation
pub trait CsvReporterTrait: Send + Sync {
    /// @ai:intent Write the summary table to a file
    fn generate(&self, summary: &Summary, output_path: &Path) -> Result<()>;
}

/// @ai:intent Writes one CSV row per n-gram group under a fixed header
pub struct CsvReporter;

impl CsvReporter {
    /// @ai:intent Create a new CSV reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the summary table into any writer
    /// @ai:post the header is written even when there are no rows
    /// @ai:effects io:write
    pub fn write<W: std::io::Write>(&self, summary: &Summary, sink: W) -> csv::Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);

        writer.write_record(SUMMARY_HEADER)?;
        for row in &summary.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReporterTrait for CsvReporter {
    /// @ai:intent Create the destination directory if needed and write the table
    /// @ai:post file system failures surface as Error::Io
    /// @ai:effects fs:write
    fn generate(&self, summary: &Summary, output_path: &Path) -> Result<()> {
        super::ensure_parent_dir(output_path)?;

        let mut table = Vec::new();
        self.write(summary, &mut table)
            .map_err(|e| Error::csv(output_path, e))?;
        std::fs::write(output_path, table).map_err(|e| Error::io(output_path, e))?;

        tracing::debug!(
            "Wrote {} summary rows to {}",
            summary.rows.len(),
            output_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SummaryRow;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn summary() -> Summary {
        Summary {
            rows: vec![
                SummaryRow {
                    model: 3,
                    accuracy: 1.0,
                    precision: 1.0,
                    recall: 1.0,
                    f1_score: 1.0,
                },
                SummaryRow {
                    model: 1,
                    accuracy: 0.5,
                    precision: 0.25,
                    recall: 0.5,
                    f1_score: 0.375,
                },
            ],
            files: vec![],
        }
    }

    #[test]
    fn test_render_table() {
        let mut out = Vec::new();
        CsvReporter::new().write(&summary(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Model,Accuracy,Precision,Recall,F1_score\n\
             3,1.0,1.0,1.0,1.0\n\
             1,0.5,0.25,0.5,0.375\n"
        );
    }

    #[test]
    fn test_header_written_without_rows() {
        let mut out = Vec::new();
        CsvReporter::new()
            .write(&Summary::default(), &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Model,Accuracy,Precision,Recall,F1_score\n"
        );
    }

    #[test]
    fn test_generate_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("scores").join("MLP").join("summary_results.csv");

        CsvReporter::new().generate(&summary(), &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Model,Accuracy,Precision,Recall,F1_score\n"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_generate_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("scores");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = CsvReporter::new()
            .generate(&summary(), &blocker.join("summary_results.csv"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_unwritable_destination_is_io_error() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("summary_results.csv");
        std::fs::create_dir(&output).unwrap();

        let err = CsvReporter::new().generate(&summary(), &output).unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if path == &output));
    }
}
