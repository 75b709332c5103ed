// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::error::ScanError;
use crate::orchestrator::aggregator::ResultAggregator;
use crate::orchestrator::discovery::SourceDiscovery;
use crate::output::report::{FileReport, RunReport};
use crate::scanner::FileScanner;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct CheckCoordinator {
    scanner: FileScanner,
    threads: usize,
    parallel: bool,
}

impl CheckCoordinator {
    pub fn new(config: &Config) -> Self {
        Self {
            scanner: FileScanner::new().with_skip_list(config.skip_list()),
            threads: config.threads.max(1),
            parallel: config.parallel,
        }
    }

    pub fn run(&self, config: &Config) -> Result<RunReport, ScanError> {
        let files = SourceDiscovery::from_config(config).discover()?;
        self.check_files(&files)
    }

    pub fn check_files(&self, files: &[PathBuf]) -> Result<RunReport, ScanError> {
        let reports = if self.parallel && files.len() > 1 {
            self.check_parallel(files)?
        } else {
            files.iter().map(|path| self.check_file(path)).collect()
        };

        let aggregator: ResultAggregator = reports.into_iter().collect();
        Ok(aggregator.finish())
    }

    fn check_parallel(&self, files: &[PathBuf]) -> Result<Vec<FileReport>, ScanError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()?;

        Ok(pool.install(|| files.par_iter().map(|path| self.check_file(path)).collect()))
    }

    pub fn check_file(&self, path: &Path) -> FileReport {
        log::debug!("Processing: {}", path.display());

        match self.scanner.scan_file(path) {
            Ok(failures) => FileReport::from_failures(path, failures),
            Err(e) => FileReport::unreadable(path, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const GOOD: &str = "mod:RegisterEventsInCombat(\n\"SPELL_CAST_START 1\"\n)\nfunction mod:SPELL_CAST_START(args)\nif args.spellId == 1 then end\nend\n";
    const BAD: &str = "function mod:SPELL_CAST_START(args)\nif args.spellId == 1 then end\nend\n";

    #[test]
    fn test_registries_do_not_leak_between_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.lua");
        let bad = dir.path().join("bad.lua");
        fs::write(&good, GOOD).unwrap();
        fs::write(&bad, BAD).unwrap();

        let coordinator = CheckCoordinator::new(&Config::new().with_parallel(false));
        let report = coordinator.check_files(&[good.clone(), bad.clone()]).unwrap();

        assert!(report.failed());
        assert!(report.files[0].is_ok());
        assert_eq!(
            report.files[1].messages(),
            vec!["Event isn't registered: SPELL_CAST_START\t1".to_string()]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = Vec::new();
        for i in 0..8 {
            let path = dir.path().join(format!("mod{}.lua", i));
            fs::write(&path, if i % 3 == 0 { BAD } else { GOOD }).unwrap();
            files.push(path);
        }

        let sequential = CheckCoordinator::new(&Config::new().with_parallel(false))
            .check_files(&files)
            .unwrap();
        let parallel = CheckCoordinator::new(&Config::new().with_threads(4))
            .check_files(&files)
            .unwrap();

        assert_eq!(sequential.summary, parallel.summary);
        let seq_paths: Vec<_> = sequential.files.iter().map(|f| f.path.clone()).collect();
        let par_paths: Vec<_> = parallel.files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(seq_paths, par_paths);
    }

    #[test]
    fn test_missing_file_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let coordinator = CheckCoordinator::new(&Config::new());
        let report = coordinator.check_files(&[dir.path().join("missing.lua")]).unwrap();
        assert!(report.failed());
        assert_eq!(report.summary.files_checked, 1);

        let messages = report.files[0].messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Failed to read"));
    }
}
