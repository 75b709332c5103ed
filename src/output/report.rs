// Fri Oct 16 2026 - Alex

use crate::scanner::ValidationFailure;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Ok,
    Failed { failures: Vec<ValidationFailure> },
    Unreadable { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileReport {
    pub fn from_failures(path: impl Into<PathBuf>, failures: Vec<ValidationFailure>) -> Self {
        let status = if failures.is_empty() {
            FileStatus::Ok
        } else {
            FileStatus::Failed { failures }
        };
        Self { path: path.into(), status }
    }

    pub fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Unreadable { reason: reason.into() },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.status, FileStatus::Ok)
    }

    pub fn failed(&self) -> bool {
        !self.is_ok()
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        match &self.status {
            FileStatus::Failed { failures } => failures.as_slice(),
            _ => &[],
        }
    }

    pub fn messages(&self) -> Vec<String> {
        match &self.status {
            FileStatus::Ok => Vec::new(),
            FileStatus::Failed { failures } => failures.iter().map(ValidationFailure::message).collect(),
            FileStatus::Unreadable { reason } => vec![reason.clone()],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_checked: usize,
    pub files_failed: usize,
    pub failure_count: usize,
    pub any_failed: bool,
}

impl RunSummary {
    pub fn record(mut self, report: &FileReport) -> Self {
        self.files_checked += 1;
        self.failure_count += report.failures().len();
        if report.failed() {
            self.files_failed += 1;
        }
        self.any_failed |= report.failed();
        self
    }

    pub fn combine(self, other: RunSummary) -> Self {
        Self {
            files_checked: self.files_checked + other.files_checked,
            files_failed: self.files_failed + other.files_failed,
            failure_count: self.failure_count + other.failure_count,
            any_failed: self.any_failed || other.any_failed,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn new(files: Vec<FileReport>, summary: RunSummary) -> Self {
        Self { files, summary }
    }

    pub fn failed(&self) -> bool {
        self.summary.any_failed
    }

    pub fn failed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.failed())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
