//! Embedmark: stamp a watermark onto a batch of photos and videos.
//!
//! Every setting is asked for interactively; ffmpeg/ffprobe locations and the
//! video encoder come from `EMBEDMARK_*` environment variables (or `.env`).

use anyhow::Context;
use std::path::PathBuf;

use embedmark_cli::{collect_request, init_tracing, Prompter};
use embedmark_core::{display_dir, EmbedConfig};
use embedmark_processing::Embedder;

fn run() -> anyhow::Result<PathBuf> {
    let config = EmbedConfig::from_env().context("Invalid configuration")?;

    let mut prompter = Prompter::stdio();
    let request = collect_request(&mut prompter)?;

    let embedder = Embedder::new(request.spec, request.output_dir, &config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(embedder.embed(&request.content_paths))
}

fn main() {
    init_tracing();

    match run() {
        Ok(output_dir) => println!("output: {}", display_dir(&output_dir)),
        Err(error) => {
            tracing::debug!(error = ?error, "Embedding aborted");
            println!("error: {error:#}");
        }
    }
}
