//! Explicit configuration for the generator and the reducer.
//!
//! The library never looks at the process environment. Entry points resolve
//! flags and environment variables into these structs once, at startup.

use std::path::PathBuf;

use crate::consts::{DEFAULT_INPUT_DIR, DEFAULT_NUM_SAMPLES, DEFAULT_OUTPUT_DIR, RESULT_FILE_NAME};

/// Where and how many samples to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub num_samples: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            num_samples: DEFAULT_NUM_SAMPLES,
        }
    }
}

/// Where to read samples from and where to put the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducerConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl ReducerConfig {
    /// Full path of the result file inside the output directory.
    pub fn result_path(&self) -> PathBuf {
        self.output_dir.join(RESULT_FILE_NAME)
    }
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
