//! Source generator: drops randomly named sample files into a directory.

use std::path::Path;

use anyhow::{Context, Result};
use rand::RngExt;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::GeneratorConfig;
use crate::sample;

/// Fresh, collision-free file name for a sample.
pub fn sample_name() -> String {
    Uuid::new_v4().to_string()
}

/// Write `config.num_samples` files, each holding one value drawn from `[0, 1)`.
///
/// Files are created with create-new semantics, so an existing file is never
/// overwritten. Fails on the first I/O error; files written before it stay.
/// Returns how many files were written.
pub async fn generate(config: &GeneratorConfig) -> Result<u64> {
    let mut written = 0;

    for _ in 0..config.num_samples {
        let value: f64 = rand::rng().random();
        let path = config.output_dir.join(sample_name());
        write_sample(&path, value).await?;
        debug!(path = %path.display(), value, "wrote sample");
        written += 1;
    }

    info!(
        count = written,
        dir = %config.output_dir.display(),
        "generated samples"
    );
    Ok(written)
}

async fn write_sample(path: &Path, value: f64) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .with_context(|| format!("failed to create sample file {}", path.display()))?;
    file.write_all(sample::render(value).as_bytes())
        .await
        .with_context(|| format!("failed to write sample file {}", path.display()))?;
    file.flush().await?;
    Ok(())
}
