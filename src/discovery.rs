//! @ai:module:intent Enumerate prediction files in a results directory
//! @ai:module:layer infrastructure
//! @ai:module:public_api FileEnumerator
//! @ai:module:stateless true

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Lists files directly inside a directory that end with a suffix
pub struct FileEnumerator {
    suffix: String,
    exclude: Option<PathBuf>,
}

impl FileEnumerator {
    /// @ai:intent Create an enumerator matching file names ending with `suffix`
    /// @ai:effects pure
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            exclude: None,
        }
    }

    /// @ai:intent Skip one specific file, typically the summary written into the same directory
    /// @ai:effects pure
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    /// @ai:intent List matching files sorted by file name
    /// @ai:pre dir is an existing directory
    /// @ai:post every returned path is a regular file directly inside dir
    /// @ai:effects fs:read
    pub fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(Error::DirectoryNotFound(dir.to_path_buf()));
        }

        let excluded = self.resolved_exclude();
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            // Broken links only matter when their name would have matched.
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if !e.path().is_some_and(|p| self.matches(p)) => {
                    tracing::debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if !entry.file_type().is_file() || !self.matches(entry.path()) {
                continue;
            }

            if let Some((name, canonical)) = &excluded {
                if entry.file_name() == name.as_os_str()
                    && std::fs::canonicalize(entry.path()).ok().as_ref() == Some(canonical)
                {
                    tracing::debug!("Skipping summary output {}", entry.path().display());
                    continue;
                }
            }

            files.push(entry.into_path());
        }

        tracing::info!(
            "Found {} prediction files in {}",
            files.len(),
            dir.display()
        );
        Ok(files)
    }

    /// @ai:intent Check a path's file name against the suffix
    /// @ai:effects pure
    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.suffix))
    }

    /// @ai:intent Resolve the excluded path, if it exists on disk
    /// @ai:effects fs:read
    fn resolved_exclude(&self) -> Option<(PathBuf, PathBuf)> {
        let path = self.exclude.as_ref()?;
        let name = PathBuf::from(path.file_name()?);
        let canonical = std::fs::canonicalize(path).ok()?;
        Some((name, canonical))
    }
}

impl Default for FileEnumerator {
    fn default() -> Self {
        Self::new(".csv")
    }
}
