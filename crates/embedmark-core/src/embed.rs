use std::path::PathBuf;

use crate::placement::Placement;

/// Everything needed to stamp the watermark onto a content item
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedSpec {
    pub embed_path: PathBuf,
    pub placement: Placement,
    /// Multiplier applied to the watermark's native size. Always > 0.
    pub scale: f64,
}

impl EmbedSpec {
    pub fn new(embed_path: PathBuf, placement: Placement, scale: f64) -> Self {
        Self {
            embed_path,
            placement,
            scale,
        }
    }

    /// Watermark size after scaling, each side rounded down.
    pub fn scaled_size(&self, (width, height): (u32, u32)) -> (u32, u32) {
        let scale = |side: u32| (f64::from(side) * self.scale).floor() as u32;
        (scale(width), scale(height))
    }
}
