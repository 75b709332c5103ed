// Fri Oct 16 2026 - Alex

use clap::Parser;
use spellid_check::{
    config::Config,
    orchestrator::CheckCoordinator,
    output::{JsonTarget, ReportEmitter},
    utils::LoggingUtils,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "spellid-check")]
#[command(version)]
#[command(about = "Checks that every spellID used in an event handler is registered for that event", long_about = None)]
struct Args {
    /// Files to check. When empty, every file under --root is discovered.
    paths: Vec<PathBuf>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    root: Option<PathBuf>,

    #[arg(short, long)]
    extension: Option<String>,

    #[arg(short, long)]
    threads: Option<usize>,

    #[arg(long)]
    no_parallel: bool,

    /// Extra handler names exempt from checking.
    #[arg(long = "skip", value_name = "FUNCTION")]
    skip: Vec<String>,

    /// Write a JSON report to stdout, or to PATH with `--json=PATH`.
    #[arg(long, value_name = "PATH", num_args = 0..=1, require_equals = true, default_missing_value = "-")]
    json: Option<String>,

    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    quiet: bool,

    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn build_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(root) = &self.root {
            config = config.with_root(root.clone());
        }
        if let Some(ext) = &self.extension {
            config = config.with_extension(ext.as_str());
        }
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }
        if self.no_parallel {
            config = config.with_parallel(false);
        }
        for name in &self.skip {
            config = config.with_skip_function(name.as_str());
        }
        match self.json.as_deref() {
            Some("-") | None => {}
            Some(path) => config = config.with_json_output(PathBuf::from(path)),
        }

        config.validate()?;
        Ok(config)
    }

    fn json_target(&self, config: &Config) -> Option<JsonTarget> {
        match (self.json.as_deref(), &config.json_output) {
            (Some("-"), _) => Some(JsonTarget::Stdout),
            (_, Some(path)) => Some(JsonTarget::File(path.clone())),
            _ => None,
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let config = args.build_config()?;
    log::debug!("Using config: {:?}", config);

    let coordinator = CheckCoordinator::new(&config);
    let report = if args.paths.is_empty() {
        coordinator.run(&config)?
    } else {
        coordinator.check_files(&args.paths)?
    };

    let mut emitter = ReportEmitter::new().with_quiet(args.quiet);
    if let Some(target) = args.json_target(&config) {
        emitter = emitter.with_json(target);
    }
    emitter.emit_run(&report)?;

    Ok(report.failed())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let level = LoggingUtils::level_from_verbosity(args.verbose)
        .unwrap_or_else(|| LoggingUtils::level_from_str(&args.log_level));
    LoggingUtils::init_logger(level);

    match run(&args) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}
