//! @ai:module:intent Extract the n-gram group key from prediction file names
//! @ai:module:layer domain
//! @ai:module:public_api GroupKey, KeyExtractor
//! @ai:module:stateless true

use crate::config::NamingConfig;
use crate::error::{Error, Result};
use std::path::Path;

/// @ai:intent Integer n-gram value used to group prediction files
pub type GroupKey = i64;

/// @ai:intent Parses `<prefix><separator><int><marker><rest>` file names
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    marker: String,
    separator: String,
}

impl KeyExtractor {
    /// @ai:intent Create an extractor for a marker such as "-gram" and a separator such as "--"
    /// @ai:effects pure
    pub fn new(marker: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            separator: separator.into(),
        }
    }

    /// @ai:intent Create an extractor from the naming section of the configuration
    /// @ai:effects pure
    pub fn from_config(naming: &NamingConfig) -> Self {
        Self::new(naming.marker.clone(), naming.separator.clone())
    }

    /// @ai:intent Extract the group key from a bare file name
    /// @ai:post returns the integer between the last separator and the first marker
    /// @ai:effects pure
    pub fn extract(&self, file_name: &str) -> Result<GroupKey> {
        let marker_at = file_name
            .find(&self.marker)
            .ok_or_else(|| Error::KeyExtraction {
                file_name: file_name.to_string(),
                reason: format!("marker {:?} not found", self.marker),
            })?;

        // Left-to-right, non-overlapping: "a---3" splits into ["a", "-3"].
        let prefix = &file_name[..marker_at];
        let digits = prefix.split(self.separator.as_str()).last().unwrap_or(prefix);

        parse_integer(digits).ok_or_else(|| Error::KeyExtraction {
            file_name: file_name.to_string(),
            reason: format!("{:?} is not an integer", digits),
        })
    }

    /// @ai:intent Extract the group key from the file name component of a path
    /// @ai:effects pure
    pub fn extract_from_path(&self, path: &Path) -> Result<GroupKey> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.extract(&file_name)
    }
}

/// @ai:intent Parse an integer allowing surrounding whitespace, a sign, and single `_` between digits
/// @ai:effects pure
fn parse_integer(text: &str) -> Option<GroupKey> {
    let text = text.trim();
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);

    if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }

    text.replace('_', "").parse().ok()
}

impl Default for KeyExtractor {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_key_from_convention() {
        let extractor = KeyExtractor::default();
        assert_eq!(extractor.extract("run--1-gram.csv").unwrap(), 1);
        assert_eq!(extractor.extract("mlp--12-gram.csv").unwrap(), 12);
        assert_eq!(extractor.extract("run--1-gram-b.csv").unwrap(), 1);
    }

    #[test]
    fn test_uses_last_separator_before_marker() {
        let extractor = KeyExtractor::default();
        assert_eq!(
            extractor.extract("MLP--fold--3--5-gram--seed7.csv").unwrap(),
            5
        );
    }

    #[test]
    fn test_uses_first_marker() {
        let extractor = KeyExtractor::default();
        assert_eq!(extractor.extract("a--2-gram--3-gram.csv").unwrap(), 2);
    }

    #[test]
    fn test_separator_split_is_left_to_right() {
        let extractor = KeyExtractor::default();
        assert_eq!(extractor.extract("run---3-gram.csv").unwrap(), -3);
    }

    #[test]
    fn test_prefix_without_separator_is_parsed_whole() {
        let extractor = KeyExtractor::default();
        assert_eq!(extractor.extract("4-gram.csv").unwrap(), 4);
    }

    #[test]
    fn test_missing_marker() {
        let extractor = KeyExtractor::default();
        let err = extractor.extract("summary_results.csv").unwrap_err();
        assert!(matches!(err, Error::KeyExtraction { ref reason, .. } if reason.contains("marker")));
    }

    #[test]
    fn test_non_integer_key() {
        let extractor = KeyExtractor::default();
        let err = extractor.extract("run--two-gram.csv").unwrap_err();
        assert!(matches!(err, Error::KeyExtraction { ref file_name, .. } if file_name == "run--two-gram.csv"));
    }

    #[test]
    fn test_digit_separators_accepted() {
        let extractor = KeyExtractor::default();
        assert_eq!(extractor.extract("run--1_0-gram.csv").unwrap(), 10);
        assert_eq!(extractor.extract("run-- +3 -gram.csv").unwrap(), 3);
    }

    #[test]
    fn test_misplaced_digit_separators_rejected() {
        let extractor = KeyExtractor::default();
        for name in ["run--_10-gram.csv", "run--10_-gram.csv", "run--1__0-gram.csv", "run--+_1-gram.csv"] {
            assert!(
                matches!(extractor.extract(name), Err(Error::KeyExtraction { .. })),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_custom_convention() {
        let extractor = KeyExtractor::new("_w", "__");
        assert_eq!(extractor.extract("cnn__7_w.csv").unwrap(), 7);
    }

    #[test]
    fn test_extract_from_path_uses_file_name() {
        let extractor = KeyExtractor::default();
        let key = extractor
            .extract_from_path(Path::new("scores--9-gram/run--3-gram.csv"))
            .unwrap();
        assert_eq!(key, 3);
    }
}
