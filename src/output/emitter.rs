// Fri Oct 16 2026 - Alex

use crate::error::ScanError;
use crate::output::report::{FileReport, RunReport};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const RUN_FAILED_MESSAGE: &str = "One or more SpellID's is not registered.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct ReportEmitter {
    json: Option<JsonTarget>,
    quiet: bool,
}

impl ReportEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, target: JsonTarget) -> Self {
        self.json = Some(target);
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn emit_file(&self, report: &FileReport) {
        if report.is_ok() {
            log::debug!("OK!");
            return;
        }

        log::error!("Processing failed for: {}", report.path().display());
        for message in report.messages() {
            log::error!("{}", message);
        }
    }

    pub fn emit_run(&self, report: &RunReport) -> Result<(), ScanError> {
        for file in &report.files {
            self.emit_file(file);
        }

        log::info!(
            "Checked {} files, {} failed",
            report.summary.files_checked,
            report.summary.files_failed
        );

        if report.failed() {
            log::error!("{}", RUN_FAILED_MESSAGE);
        }

        match &self.json {
            Some(JsonTarget::Stdout) => println!("{}", report.to_json()?),
            Some(JsonTarget::File(path)) => self.write_json(report, path)?,
            None => self.print_summary(report),
        }

        Ok(())
    }

    fn write_json(&self, report: &RunReport, path: &Path) -> Result<(), ScanError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        log::debug!("JSON report written to {}", path.display());
        Ok(())
    }

    fn print_summary(&self, report: &RunReport) {
        if self.quiet {
            return;
        }

        let summary = &report.summary;
        if report.failed() {
            println!(
                "{} {} of {} files failed ({} failures)",
                "[!]".red(),
                summary.files_failed,
                summary.files_checked,
                summary.failure_count
            );
        } else {
            println!("{} {} files checked, all spellIDs registered", "[+]".green(), summary.files_checked);
        }
    }
}
