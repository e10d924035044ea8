use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use simplex::config::GeneratorConfig;
use simplex::consts::{DEFAULT_NUM_SAMPLES, DEFAULT_OUTPUT_DIR, ENV_LOG_LEVEL, ENV_NUM_SAMPLES, ENV_OUTPUT_DIR};
use simplex::generator;
use simplex::logging::{self, DEFAULT_LEVEL};

#[derive(Parser)]
#[command(
    name = "simplex-generate",
    version,
    about = "Write randomly named sample files, one random value in [0, 1) each."
)]
struct Cli {
    /// Directory to write sample files into (must already exist)
    #[arg(long, env = ENV_OUTPUT_DIR, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Number of sample files to write (a plain non-negative integer, no sign or padding)
    #[arg(long, env = ENV_NUM_SAMPLES, default_value_t = DEFAULT_NUM_SAMPLES)]
    num_samples: u64,

    /// TRACE, DEBUG, INFO, WARN, ERROR, FATAL or PANIC
    #[arg(long, env = ENV_LOG_LEVEL, default_value = DEFAULT_LEVEL, value_parser = logging::parse_level)]
    log_level: LevelFilter,
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        Self {
            output_dir: cli.output_dir,
            num_samples: cli.num_samples,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let config = GeneratorConfig::from(cli);
    generator::generate(&config).await?;
    Ok(())
}
