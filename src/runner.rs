//! Streaming reducer: folds every regular file in a directory through a
//! [`Reducer`] and writes the final state as JSON.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::future;
use futures::stream::{self, Stream, TryStreamExt};
use serde::Serialize;
use tokio::fs::{self, ReadDir};
use tracing::{debug, debug_span, info, warn};

use crate::config::ReducerConfig;
use crate::reducer::Reducer;

/// One sample file, read in full.
#[derive(Debug)]
pub struct Sample {
    pub path: PathBuf,
    pub contents: String,
}

/// Stream the regular files of `dir` in directory-listing order.
///
/// Anything that isn't a regular file (after following symlinks) is skipped,
/// including symlinks whose target is gone.
/// Contents that aren't valid UTF-8 are decoded lossily.
pub async fn samples(dir: &Path) -> Result<impl Stream<Item = Result<Sample>>> {
    let entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read input directory {}", dir.display()))?;

    Ok(stream::try_unfold(entries, |mut entries| async move {
        let next = next_sample(&mut entries).await?;
        Ok::<_, anyhow::Error>(next.map(|sample| (sample, entries)))
    }))
}

async fn next_sample(entries: &mut ReadDir) -> Result<Option<Sample>> {
    while let Some(entry) = entries
        .next_entry()
        .await
        .context("failed to list input directory")?
    {
        let path = entry.path();
        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "skipping dangling entry");
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to stat {}", path.display()));
            }
        };
        if !metadata.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        let bytes = fs::read(&path)
            .await
            .with_context(|| format!("failed to read sample file {}", path.display()))?;
        let contents = String::from_utf8_lossy(&bytes).into_owned();
        return Ok(Some(Sample { path, contents }));
    }
    Ok(None)
}

/// Fold every sample in `dir`, starting from a fresh state.
///
/// Samples the reducer rejects are logged at WARN with their path.
pub async fn fold_dir<R: Reducer>(reducer: &R, dir: &Path) -> Result<R::State> {
    samples(dir)
        .await?
        .try_fold(R::State::default(), |state, sample| {
            let _span = debug_span!("sample", path = %sample.path.display()).entered();
            match reducer.rejection(&state, &sample.contents) {
                Some(reason) => warn!(path = %sample.path.display(), error = %reason, "rejected sample"),
                None => debug!("folding sample"),
            }
            future::ready(Ok(reducer.step(state, &sample.contents)))
        })
        .await
}

/// Serialize `state` to the result file, replacing whatever was there.
pub async fn write_result<T: Serialize>(path: &Path, state: &T) -> Result<()> {
    let json = serde_json::to_vec(state).context("failed to serialize result")?;
    fs::write(path, json)
        .await
        .with_context(|| format!("failed to write result file {}", path.display()))?;
    Ok(())
}

/// Full reducer run: fold the input directory, then write one result file.
///
/// Nothing is written unless the whole directory folds cleanly.
pub async fn run<R>(reducer: &R, config: &ReducerConfig) -> Result<R::State>
where
    R: Reducer,
    R::State: Serialize,
{
    let state = fold_dir(reducer, &config.input_dir).await?;
    let path = config.result_path();
    write_result(&path, &state).await?;
    info!(path = %path.display(), "wrote result");
    Ok(state)
}
