//! @ai:module:intent n-gram summary library: score prediction files and average them per n-gram
//! @ai:module:layer application
//! @ai:module:public_api config, discovery, naming, predictions, metrics, report, pipeline, error
//!
//! # ngram-summary
//!
//! Reads a directory of prediction CSV files (`pred` and `true` columns), scores
//! each file with accuracy and support-weighted precision, recall and F1, then
//! averages the scores of files sharing the n-gram value encoded in their name
//! (`<prefix>--<n>-gram<rest>.csv`).
//!
//! ```rust,no_run
//! use ngram_summary::{SummaryConfig, SummaryPipeline};
//!
//! let summary = SummaryPipeline::new(SummaryConfig::default()).run().unwrap();
//! for row in &summary.rows {
//!     println!("{}-gram: accuracy {:.4}", row.model, row.accuracy);
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod metrics;
pub mod naming;
pub mod pipeline;
pub mod predictions;
pub mod report;

pub use config::{NamingConfig, PathConfig, SummaryConfig};
pub use discovery::FileEnumerator;
pub use error::{Error, Result};
pub use metrics::{
    ClassificationScores, MetricGroup, MetricsAggregator, MetricsAggregatorTrait, PerFileMetrics,
    Summary, SummaryRow,
};
pub use naming::{GroupKey, KeyExtractor};
pub use pipeline::SummaryPipeline;
pub use predictions::{Label, PredictionFile};
pub use report::ReportGenerator;
