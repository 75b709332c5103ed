// Fri Oct 16 2026 - Alex

pub mod report;
pub mod emitter;

pub use report::{FileReport, FileStatus, RunReport, RunSummary};
pub use emitter::{JsonTarget, ReportEmitter, RUN_FAILED_MESSAGE};
