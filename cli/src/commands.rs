use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

use castlink_core::pipeline::{self, ApiConfig, PlaybackOutcome, ShareOutcome};

pub async fn share(
    file: Option<PathBuf>,
    config: ApiConfig,
    token_only: bool,
    stats_json: bool,
) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;
    let text = read_recording(file.as_deref()).await?;

    let outcome: ShareOutcome = tokio::task::spawn_blocking(move || pipeline::share(&text, &config))
        .await
        .context("share task panicked")?
        .context("could not build share link")?;

    let line = if token_only { outcome.token.clone() } else { outcome.url.to_string() };
    write_stdout(format!("{line}\n").as_bytes()).await?;

    if stats_json {
        eprintln!("{}", serde_json::to_string_pretty(&outcome.snapshot)?);
    } else {
        eprintln!("{}", outcome.snapshot.summary());
    }
    Ok(())
}

pub async fn play(link: String, config: ApiConfig, output: Option<PathBuf>) -> anyhow::Result<()> {
    let outcome: PlaybackOutcome = tokio::task::spawn_blocking(move || pipeline::playback(&link, &config))
        .await
        .context("playback task panicked")?
        .context("could not recover recording from link")?;
    debug!(bytes = outcome.text.len(), "recording recovered");

    match output {
        Some(path) => tokio::fs::write(&path, outcome.text.as_bytes())
            .await
            .with_context(|| format!("failed to write {}", path.display())),
        None => write_stdout(outcome.text.as_bytes()).await,
    }
}

async fn read_recording(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read recording from stdin")?;
            Ok(text)
        }
    }
}

async fn write_stdout(bytes: &[u8]) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(bytes).await.context("failed to write to stdout")?;
    stdout.flush().await.context("failed to flush stdout")?;
    Ok(())
}
