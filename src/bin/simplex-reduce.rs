use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;

use simplex::config::ReducerConfig;
use simplex::consts::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, ENV_INPUT_DIR, ENV_LOG_LEVEL, ENV_OUTPUT_DIR};
use simplex::logging::{self, DEFAULT_LEVEL};
use simplex::reducer::SumCount;
use simplex::runner;

#[derive(Parser)]
#[command(
    name = "simplex-reduce",
    version,
    about = "Sum and count the numeric sample files in a directory, write the tally as JSON."
)]
struct Cli {
    /// Directory holding the sample files
    #[arg(long, env = ENV_INPUT_DIR, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory the `result` file is written into (must already exist)
    #[arg(long, env = ENV_OUTPUT_DIR, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// TRACE, DEBUG, INFO, WARN, ERROR, FATAL or PANIC
    #[arg(long, env = ENV_LOG_LEVEL, default_value = DEFAULT_LEVEL, value_parser = logging::parse_level)]
    log_level: LevelFilter,
}

impl From<Cli> for ReducerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input_dir: cli.input_dir,
            output_dir: cli.output_dir,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let config = ReducerConfig::from(cli);
    let acc = runner::run(&SumCount, &config).await?;
    info!(
        sum = acc.sum,
        count = acc.count,
        errors = acc.errors,
        mean = ?acc.mean(),
        "reduced samples"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_fill_config() {
        let cli = Cli::try_parse_from([
            "simplex-reduce",
            "--input-dir",
            "/data/in",
            "--output-dir",
            "/data/out",
        ])
        .unwrap();
        let config = ReducerConfig::from(cli);
        assert_eq!(config.input_dir, PathBuf::from("/data/in"));
        assert_eq!(config.result_path(), PathBuf::from("/data/out/result"));
    }

    #[test]
    fn takes_no_positional_arguments() {
        assert!(Cli::try_parse_from(["simplex-reduce", "extra"]).is_err());
    }
}
