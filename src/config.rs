//! @ai:module:intent Configuration structs for the summary pipeline
//! @ai:module:layer infrastructure
//! @ai:module:public_api SummaryConfig, PathConfig, NamingConfig
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Main configuration for the summary pipeline
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub naming: NamingConfig,
}

/// @ai:intent Input directory and output file locations
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    #[serde(default = "default_summary_file")]
    pub summary_file: PathBuf,
    /// Optional JSON report written next to the CSV summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_report: Option<PathBuf>,
}

/// @ai:intent Filename convention used to find prediction files and their n-gram key
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_suffix")]
    pub suffix: String,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            summary_file: default_summary_file(),
            json_report: None,
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            marker: default_marker(),
            separator: default_separator(),
        }
    }
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("./scores/MLP")
}

fn default_summary_file() -> PathBuf {
    PathBuf::from("./scores/MLP/summary_results.csv")
}

fn default_suffix() -> String {
    ".csv".to_string()
}

fn default_marker() -> String {
    "-gram".to_string()
}

fn default_separator() -> String {
    "--".to_string()
}

impl SummaryConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
        Ok(())
    }

    /// @ai:intent Reject naming conventions that cannot match any file
    /// @ai:effects pure
    pub fn validate(&self) -> Result<()> {
        let naming = &self.naming;
        for (field, value) in [
            ("naming.suffix", &naming.suffix),
            ("naming.marker", &naming.marker),
            ("naming.separator", &naming.separator),
        ] {
            if value.is_empty() {
                return Err(Error::Config(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }
}
