//! @ai:module:intent Group per-file metrics by n-gram key and average them
//! @ai:module:layer application
//! @ai:module:public_api MetricGroup, MetricsAggregator, MetricsAggregatorTrait
//! @ai:module:stateless true

use crate::metrics::types::{PerFileMetrics, Summary, SummaryRow};
use crate::naming::GroupKey;
use indexmap::IndexMap;

/// @ai:intent Trait for metrics aggregation
pub trait MetricsAggregatorTrait: Send + Sync {
    /// @ai:intent Aggregate per-file metrics into one summary row per key
    fn aggregate(&self, metrics: Vec<PerFileMetrics>) -> Summary;
}

/// @ai:intent Per-file metrics grouped by key, keys kept in first-insertion order
#[derive(Debug, Clone, Default)]
pub struct MetricGroup {
    groups: IndexMap<GroupKey, Vec<PerFileMetrics>>,
}

impl MetricGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Append a file's metrics to its key's group
    /// @ai:effects pure
    pub fn push(&mut self, metrics: PerFileMetrics) {
        self.groups.entry(metrics.key).or_default().push(metrics);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// @ai:intent Files recorded under a key, in insertion order
    /// @ai:effects pure
    pub fn get(&self, key: GroupKey) -> Option<&[PerFileMetrics]> {
        self.groups.get(&key).map(Vec::as_slice)
    }

    /// @ai:intent Unweighted mean of each metric per key
    /// @ai:post one row per key, in first-insertion order
    /// @ai:effects pure
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.groups
            .iter()
            .map(|(key, files)| SummaryRow {
                model: *key,
                accuracy: average(files.iter().map(|m| m.accuracy)),
                precision: average(files.iter().map(|m| m.precision)),
                recall: average(files.iter().map(|m| m.recall)),
                f1_score: average(files.iter().map(|m| m.f1_score)),
            })
            .collect()
    }
}

impl FromIterator<PerFileMetrics> for MetricGroup {
    fn from_iter<I: IntoIterator<Item = PerFileMetrics>>(iter: I) -> Self {
        let mut group = Self::new();
        for metrics in iter {
            group.push(metrics);
        }
        group
    }
}

/// @ai:intent Aggregates per-file metrics into the n-gram summary
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// @ai:intent Create a new metrics aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsAggregatorTrait for MetricsAggregator {
    /// @ai:intent Group by key, average, and keep the per-file detail
    /// @ai:effects pure
    fn aggregate(&self, metrics: Vec<PerFileMetrics>) -> Summary {
        let group: MetricGroup = metrics.iter().cloned().collect();
        let rows = group.summary_rows();

        tracing::info!(
            "Aggregated {} files into {} n-gram groups",
            metrics.len(),
            rows.len()
        );

        Summary {
            rows,
            files: metrics,
        }
    }
}

/// @ai:intent Calculate average of an iterator of f64
/// @ai:effects pure
fn average<I: Iterator<Item = f64>>(iter: I) -> f64 {
    let (sum, count) = iter.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
