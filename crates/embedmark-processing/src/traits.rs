//! Core traits for media compositing

use async_trait::async_trait;
use std::path::Path;

use embedmark_core::ContentKind;

/// Writes a watermarked copy of one content item
#[async_trait]
pub trait Compositor: Send + Sync {
    /// Kind of content this compositor handles
    fn kind(&self) -> ContentKind;

    /// Composite the watermark onto `content` and write the result to `output`.
    async fn composite(&self, content: &Path, output: &Path) -> Result<(), anyhow::Error>;
}
