//! Batch embedding: one watermarked copy per content item.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use embedmark_core::{ContentKind, EmbedConfig, EmbedSpec};

use crate::error::EmbedError;
use crate::image::ImageCompositor;
use crate::traits::Compositor;
use crate::video::VideoCompositor;

/// Writes watermarked copies of content items into an output directory
pub struct Embedder {
    output_dir: PathBuf,
    image: Box<dyn Compositor>,
    video: Box<dyn Compositor>,
}

impl Embedder {
    pub fn new(spec: EmbedSpec, output_dir: PathBuf, config: &EmbedConfig) -> Self {
        let spec = Arc::new(spec);
        Self::with_compositors(
            output_dir,
            Box::new(ImageCompositor::new(Arc::clone(&spec))),
            Box::new(VideoCompositor::new(spec, config)),
        )
    }

    /// Build an embedder around custom compositors.
    pub fn with_compositors(
        output_dir: PathBuf,
        image: Box<dyn Compositor>,
        video: Box<dyn Compositor>,
    ) -> Self {
        Self {
            output_dir,
            image,
            video,
        }
    }

    /// Output location for a content item: same file name, inside the output directory.
    pub fn output_path(&self, content: &Path) -> Result<PathBuf, EmbedError> {
        let file_name = content
            .file_name()
            .ok_or_else(|| EmbedError::MissingFileName(content.to_path_buf()))?;
        Ok(self.output_dir.join(file_name))
    }

    fn compositor_for(&self, kind: ContentKind) -> &dyn Compositor {
        match kind {
            ContentKind::Image => self.image.as_ref(),
            ContentKind::Video => self.video.as_ref(),
        }
    }

    /// Process every content path in order and return the output directory.
    ///
    /// Stops at the first failure; files written before it are kept.
    pub async fn embed(&self, content_paths: &[PathBuf]) -> Result<PathBuf> {
        tracing::info!(
            count = content_paths.len(),
            output_dir = %self.output_dir.display(),
            "Starting embed batch"
        );

        for content in content_paths {
            let compositor = self.compositor_for(ContentKind::from_path(content));
            let output = self.output_path(content)?;

            tracing::info!(
                content = %content.display(),
                output = %output.display(),
                kind = %compositor.kind(),
                "Embedding watermark"
            );

            compositor
                .composite(content, &output)
                .await
                .with_context(|| format!("Failed to embed into {}", content.display()))?;
        }

        tracing::info!(count = content_paths.len(), "Embed batch completed");
        Ok(self.output_dir.clone())
    }
}
