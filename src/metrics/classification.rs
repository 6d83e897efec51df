//! @ai:module:intent Weighted multi-class classification scores for one prediction file
//! @ai:module:layer domain
//! @ai:module:public_api ClassificationScores, ClassCounts, ClassTally
//! @ai:module:stateless true
//!
//! Precision, recall and F1 are computed per class over the sorted union of
//! labels seen in either column, then averaged with each class weighted by its
//! support (number of true samples). Classes that only appear among the
//! predictions have zero support and do not contribute.

use crate::predictions::{Label, PredictionFile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-class counts taken from a prediction/truth pairing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    /// Rows where both prediction and truth are this class
    pub true_positives: usize,
    /// Rows predicted as this class
    pub predicted: usize,
    /// Rows whose true label is this class
    pub support: usize,
}

impl ClassCounts {
    /// Precision: TP / predicted. Zero when nothing was predicted as this class.
    pub fn precision(&self) -> f64 {
        divide(self.true_positives, self.predicted)
    }

    /// Recall: TP / support
    pub fn recall(&self) -> f64 {
        divide(self.true_positives, self.support)
    }

    /// F1: 2TP / (support + predicted), the harmonic mean of precision and recall
    pub fn f1_score(&self) -> f64 {
        divide(2 * self.true_positives, self.support + self.predicted)
    }
}

fn divide(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// @ai:intent Class counts keyed by label in sorted label order
#[derive(Debug, Clone, Default)]
pub struct ClassTally<'a> {
    classes: BTreeMap<&'a Label, ClassCounts>,
    rows: usize,
    correct: usize,
}

impl<'a> ClassTally<'a> {
    /// @ai:intent Count predictions against truth row by row
    /// @ai:pre predicted and truth have equal length
    /// @ai:effects pure
    pub fn from_labels(predicted: &'a [Label], truth: &'a [Label]) -> Self {
        let mut tally = Self::default();

        for (pred, actual) in predicted.iter().zip(truth.iter()) {
            tally.rows += 1;
            tally.classes.entry(pred).or_default().predicted += 1;

            let counts = tally.classes.entry(actual).or_default();
            counts.support += 1;
            if pred == actual {
                counts.true_positives += 1;
                tally.correct += 1;
            }
        }

        tally
    }

    /// @ai:intent Iterate classes in label order
    /// @ai:effects pure
    pub fn classes(&self) -> impl Iterator<Item = (&'a Label, &ClassCounts)> + '_ {
        self.classes.iter().map(|(label, counts)| (*label, counts))
    }

    /// @ai:intent Fraction of rows where prediction equals truth
    /// @ai:effects pure
    pub fn accuracy(&self) -> f64 {
        divide(self.correct, self.rows)
    }

    /// @ai:intent Average a per-class score weighted by class support
    /// @ai:effects pure
    pub fn weighted(&self, score: impl Fn(&ClassCounts) -> f64) -> f64 {
        let total_support: usize = self.classes.values().map(|c| c.support).sum();
        if total_support == 0 {
            return 0.0;
        }

        let weighted_sum: f64 = self
            .classes
            .values()
            .map(|c| score(c) * c.support as f64)
            .sum();
        weighted_sum / total_support as f64
    }
}

/// @ai:intent Accuracy and weighted precision, recall and F1 for one file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationScores {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl ClassificationScores {
    /// @ai:intent Score aligned prediction and truth labels
    /// @ai:effects pure
    pub fn from_labels(predicted: &[Label], truth: &[Label]) -> Self {
        Self::from_tally(&ClassTally::from_labels(predicted, truth))
    }

    /// @ai:intent Score a loaded prediction file, warning on ill-defined precision
    /// @ai:effects log
    pub fn from_file(file: &PredictionFile) -> Self {
        let tally = ClassTally::from_labels(&file.predicted, &file.truth);

        for (label, counts) in tally.classes() {
            if counts.support > 0 && counts.predicted == 0 {
                tracing::warn!(
                    "Precision is ill-defined for class {} in {} (no predicted samples), scored as 0.0",
                    label,
                    file.path.display()
                );
            }
        }

        Self::from_tally(&tally)
    }

    fn from_tally(tally: &ClassTally<'_>) -> Self {
        Self {
            accuracy: tally.accuracy(),
            precision: tally.weighted(ClassCounts::precision),
            recall: tally.weighted(ClassCounts::recall),
            f1_score: tally.weighted(ClassCounts::f1_score),
        }
    }
}
