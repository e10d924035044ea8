//! Log output on stderr, leveled by `LOG_LEVEL`.

use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Accepted `LOG_LEVEL` values. `FATAL` and `PANIC` both mean "errors only".
pub const LEVEL_NAMES: &[&str] = &["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL", "PANIC"];

pub const DEFAULT_LEVEL: &str = "WARN";

#[derive(Debug, Error)]
#[error("invalid log level {0:?}, choose one of TRACE, DEBUG, INFO, WARN, ERROR, FATAL, PANIC")]
pub struct LogLevelError(String);

/// Parse a level name, case-insensitively.
pub fn parse_level(raw: &str) -> Result<LevelFilter, LogLevelError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Ok(LevelFilter::TRACE),
        "DEBUG" => Ok(LevelFilter::DEBUG),
        "INFO" => Ok(LevelFilter::INFO),
        "WARN" => Ok(LevelFilter::WARN),
        "ERROR" | "FATAL" | "PANIC" => Ok(LevelFilter::ERROR),
        _ => Err(LogLevelError(raw.to_string())),
    }
}

/// Install the global subscriber. Call once, first thing in `main`.
pub fn init(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_parses() {
        for name in LEVEL_NAMES {
            assert!(parse_level(name).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(parse_level(DEFAULT_LEVEL).unwrap(), LevelFilter::WARN);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("Info").unwrap(), LevelFilter::INFO);
    }

    #[test]
    fn fatal_and_panic_mean_error() {
        assert_eq!(parse_level("FATAL").unwrap(), LevelFilter::ERROR);
        assert_eq!(parse_level("PANIC").unwrap(), LevelFilter::ERROR);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = parse_level("LOUD").unwrap_err();
        assert!(err.to_string().contains("LOUD"));
        assert!(err.to_string().contains("TRACE"));
    }
}
