// Fri Oct 16 2026 - Alex

use crate::output::report::{FileReport, RunReport, RunSummary};

#[derive(Debug, Default)]
pub struct ResultAggregator {
    reports: Vec<FileReport>,
    summary: RunSummary,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, report: FileReport) {
        self.summary = self.summary.record(&report);
        self.reports.push(report);
    }

    pub fn any_failed(&self) -> bool {
        self.summary.any_failed
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn finish(self) -> RunReport {
        RunReport::new(self.reports, self.summary)
    }
}

impl FromIterator<FileReport> for ResultAggregator {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        let mut aggregator = Self::new();
        for report in iter {
            aggregator.add(report);
        }
        aggregator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::ValidationFailure;

    fn failing(path: &str) -> FileReport {
        FileReport::from_failures(path, vec![ValidationFailure::event_not_registered("X", "1", 1)])
    }

    #[test]
    fn test_all_ok() {
        let aggregator: ResultAggregator = vec![
            FileReport::from_failures("a.lua", Vec::new()),
            FileReport::from_failures("b.lua", Vec::new()),
        ]
        .into_iter()
        .collect();
        assert!(!aggregator.any_failed());
        assert_eq!(aggregator.summary().files_checked, 2);
    }

    #[test]
    fn test_one_failure_fails_run() {
        let aggregator: ResultAggregator = vec![
            FileReport::from_failures("a.lua", Vec::new()),
            failing("b.lua"),
        ]
        .into_iter()
        .collect();
        let report = aggregator.finish();
        assert!(report.failed());
        assert_eq!(report.failed_files().count(), 1);
    }

    #[test]
    fn test_summary_is_order_independent() {
        let forward: ResultAggregator = vec![failing("a.lua"), FileReport::from_failures("b.lua", Vec::new())]
            .into_iter()
            .collect();
        let backward: ResultAggregator = vec![FileReport::from_failures("b.lua", Vec::new()), failing("a.lua")]
            .into_iter()
            .collect();
        assert_eq!(forward.summary(), backward.summary());
    }

    #[test]
    fn test_combined_summaries_match_single_fold() {
        let a = RunSummary::default().record(&failing("a.lua"));
        let b = RunSummary::default().record(&FileReport::from_failures("b.lua", Vec::new()));
        let folded = RunSummary::default()
            .record(&failing("a.lua"))
            .record(&FileReport::from_failures("b.lua", Vec::new()));
        assert_eq!(a.combine(b), folded);
    }
}
