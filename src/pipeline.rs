//! @ai:module:intent Wire enumeration, key extraction, scoring, aggregation and output into one run
//! @ai:module:layer application
//! @ai:module:public_api SummaryPipeline
//! @ai:module:depends_on discovery, naming, predictions, metrics, report

use crate::config::SummaryConfig;
use crate::discovery::FileEnumerator;
use crate::error::Result;
use crate::metrics::{
    ClassificationScores, MetricsAggregator, MetricsAggregatorTrait, PerFileMetrics, Summary,
};
use crate::naming::KeyExtractor;
use crate::predictions::PredictionFile;
use crate::report::ReportGenerator;
use std::path::Path;

/// @ai:intent Single-pass batch job turning a results directory into a summary table
pub struct SummaryPipeline {
    config: SummaryConfig,
    enumerator: FileEnumerator,
    extractor: KeyExtractor,
    aggregator: MetricsAggregator,
    reporter: ReportGenerator,
}

impl SummaryPipeline {
    /// @ai:intent Build a pipeline from configuration
    /// @ai:effects pure
    pub fn new(config: SummaryConfig) -> Self {
        let enumerator = FileEnumerator::new(config.naming.suffix.clone())
            .excluding(config.paths.summary_file.clone());
        let extractor = KeyExtractor::from_config(&config.naming);

        Self {
            config,
            enumerator,
            extractor,
            aggregator: MetricsAggregator::new(),
            reporter: ReportGenerator::new(),
        }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// @ai:intent Extract the key of one file and score its predictions
    /// @ai:effects fs:read
    pub fn score_file(&self, path: &Path) -> Result<PerFileMetrics> {
        let key = self.extractor.extract_from_path(path)?;
        let file = PredictionFile::load(path)?;
        let scores = ClassificationScores::from_file(&file);

        tracing::debug!(
            key,
            rows = file.len(),
            accuracy = scores.accuracy,
            f1_score = scores.f1_score,
            "Scored {}",
            path.display()
        );

        Ok(PerFileMetrics::new(key, file.path, file.truth.len(), scores))
    }

    /// @ai:intent Score every prediction file and average per key, without writing anything
    /// @ai:post the first failing file aborts the run
    /// @ai:effects fs:read
    pub fn summarize(&self) -> Result<Summary> {
        let files = self.enumerator.list(&self.config.paths.results_dir)?;

        let metrics = files
            .iter()
            .map(|path| self.score_file(path))
            .collect::<Result<Vec<_>>>()?;

        Ok(self.aggregator.aggregate(metrics))
    }

    /// @ai:intent Summarize and write the reports
    /// @ai:post output files exist only if every input file was scored
    /// @ai:effects fs:read, fs:write
    pub fn run(&self) -> Result<Summary> {
        let summary = self.summarize()?;
        self.reporter.generate_all(&summary, &self.config.paths)?;
        Ok(summary)
    }
}
