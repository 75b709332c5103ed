// Fri Oct 16 2026 - Alex

pub mod classify;
pub mod registry;
pub mod extract;
pub mod validator;
pub mod body;
pub mod failure;

pub use classify::{LineClassifier, RegistrationLine, BodyLine};
pub use registry::{EventRegistry, RegistryBuilder, Registration, RegistrationState};
pub use extract::{SpellIdUsage, UsageExtractor};
pub use validator::SpellIdValidator;
pub use body::{BodyScanner, CommentState, SkipList, DEFAULT_SKIP_FUNCTIONS};
pub use failure::{FailureKind, ValidationFailure};

use crate::error::ScanError;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    skip: SkipList,
}

impl FileScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_list(mut self, skip: SkipList) -> Self {
        self.skip = skip;
        self
    }

    pub fn scan_source(&self, source: &str) -> Vec<ValidationFailure> {
        let lines: Vec<&str> = source.split('\n').collect();

        let registry = EventRegistry::from_lines(lines.iter().copied());
        log::trace!("Registry holds {} events", registry.len());

        let mut scanner = BodyScanner::new(&registry, &self.skip);
        for (idx, line) in lines.iter().enumerate() {
            scanner.feed(line, idx + 1);
        }
        scanner.finish()
    }

    pub fn scan_file(&self, path: &Path) -> Result<Vec<ValidationFailure>, ScanError> {
        let bytes = std::fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(self.scan_source(&source))
    }
}
