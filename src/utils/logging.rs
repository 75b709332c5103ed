// Fri Oct 16 2026 - Alex

use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    pub fn init_logger(level: LevelFilter) {
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .format_target(false)
            .try_init();
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    pub fn level_from_verbosity(verbosity: u8) -> Option<LevelFilter> {
        match verbosity {
            0 => None,
            1 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(LoggingUtils::level_from_str("DEBUG"), LevelFilter::Debug);
        assert_eq!(LoggingUtils::level_from_str("warning"), LevelFilter::Warn);
        assert_eq!(LoggingUtils::level_from_str("bogus"), LevelFilter::Info);
    }

    #[test]
    fn test_verbosity_overrides() {
        assert_eq!(LoggingUtils::level_from_verbosity(0), None);
        assert_eq!(LoggingUtils::level_from_verbosity(1), Some(LevelFilter::Debug));
        assert_eq!(LoggingUtils::level_from_verbosity(3), Some(LevelFilter::Trace));
    }
}
