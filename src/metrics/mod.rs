//! @ai:module:intent Metrics collection and aggregation
//! @ai:module:layer application
//! @ai:module:public_api ClassificationScores, PerFileMetrics, SummaryRow, Summary, MetricGroup, MetricsAggregator

pub mod aggregator;
pub mod classification;
pub mod types;

pub use aggregator::{MetricGroup, MetricsAggregator, MetricsAggregatorTrait};
pub use classification::{ClassCounts, ClassTally, ClassificationScores};
pub use types::{PerFileMetrics, Summary, SummaryRow};
