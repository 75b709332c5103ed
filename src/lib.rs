// Fri Oct 16 2026 - Alex

pub mod config;
pub mod error;
pub mod scanner;
pub mod orchestrator;
pub mod output;
pub mod utils;

pub use config::Config;
pub use error::ScanError;
pub use scanner::{EventRegistry, FileScanner, ValidationFailure, FailureKind};
pub use orchestrator::CheckCoordinator;
pub use output::{FileReport, RunReport, RunSummary};
