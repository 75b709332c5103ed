// Fri Oct 16 2026 - Alex

use crate::error::ScanError;
use crate::scanner::SkipList;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: PathBuf,
    pub extension: String,
    pub threads: usize,
    pub parallel: bool,
    pub extra_skip_functions: Vec<String>,
    pub json_output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "lua".to_string(),
            threads: num_cpus::get(),
            parallel: true,
            extra_skip_functions: Vec::new(),
            json_output: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self, ScanError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = root;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_skip_function(mut self, name: impl Into<String>) -> Self {
        self.extra_skip_functions.push(name.into());
        self
    }

    pub fn with_json_output(mut self, path: PathBuf) -> Self {
        self.json_output = Some(path);
        self
    }

    pub fn source_pattern(&self) -> String {
        let root = Pattern::escape(&self.root.to_string_lossy());
        let ext = Pattern::escape(self.extension.trim_start_matches('.'));
        Path::new(&root).join("**").join(format!("*.{}", ext)).to_string_lossy().into_owned()
    }

    pub fn skip_list(&self) -> SkipList {
        SkipList::new().with_extra(self.extra_skip_functions.iter().cloned())
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(ScanError::Config("extension must not be empty".to_string()));
        }
        if self.threads == 0 {
            return Err(ScanError::Config("threads must be greater than 0".to_string()));
        }
        Ok(())
    }
}
