// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::error::ScanError;
use glob::{glob_with, MatchOptions};
use std::path::PathBuf;

pub struct SourceDiscovery {
    pattern: String,
}

impl SourceDiscovery {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.source_pattern())
    }

    pub fn discover(&self) -> Result<Vec<PathBuf>, ScanError> {
        log::debug!("Discovering files matching {}", self.pattern);

        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: true,
        };

        let mut files: Vec<PathBuf> = glob_with(&self.pattern, options)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("Skipping unreadable path {}: {}", e.path().display(), e.error());
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();

        files.sort();
        log::debug!("Found {} files", files.len());
        Ok(files)
    }
}
