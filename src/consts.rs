//! Project-wide constants.

/// Directory the generator writes samples to, and the reducer writes its result to.
pub const DEFAULT_OUTPUT_DIR: &str = "/simplex/outputs";

/// Directory the reducer reads samples from.
pub const DEFAULT_INPUT_DIR: &str = "/simplex/inputs";

/// Number of samples the generator produces when none is specified.
pub const DEFAULT_NUM_SAMPLES: u64 = 100;

/// Name of the file the reducer writes inside its output directory.
pub const RESULT_FILE_NAME: &str = "result";

pub const ENV_INPUT_DIR: &str = "INPUT_DIR";
pub const ENV_OUTPUT_DIR: &str = "OUTPUT_DIR";
pub const ENV_NUM_SAMPLES: &str = "NUM_SAMPLES";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_absolute_paths() {
        assert!(DEFAULT_OUTPUT_DIR.starts_with('/'));
        assert!(DEFAULT_INPUT_DIR.starts_with('/'));
    }

    #[test]
    fn result_file_has_no_extension() {
        assert!(!RESULT_FILE_NAME.contains('.'));
    }
}
