#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

use embedmark_core::{EmbedConfig, EmbedSpec, HorizontalCorner, Placement, VerticalCorner};
use embedmark_processing::Embedder;

/// Embedder writing into `output_dir` with the default tool configuration
pub fn embedder(
    embed_path: PathBuf,
    placement: (HorizontalCorner, VerticalCorner, u32),
    scale: f64,
    output_dir: PathBuf,
) -> Embedder {
    let (horizontal, vertical, margin) = placement;
    let spec = EmbedSpec::new(
        embed_path,
        Placement::new(horizontal, vertical, margin),
        scale,
    );
    Embedder::new(spec, output_dir, &EmbedConfig::default())
}
