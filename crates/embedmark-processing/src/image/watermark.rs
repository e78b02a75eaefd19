use anyhow::Context;
use async_trait::async_trait;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImage, GenericImageView, Limits};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use embedmark_core::{ContentKind, EmbedSpec};

use crate::error::EmbedError;
use crate::image::processor::ImageProcessor;
use crate::traits::Compositor;

/// Bytes per pixel of the RGBA buffer a resized embed is budgeted for
const EMBED_BYTES_PER_PIXEL: u64 = 4;

pub struct Watermark;

impl Watermark {
    /// Size of the embed after scaling, rejected when it has no area or
    /// would need more memory than the decoder's default allocation limit.
    pub fn scaled_size(spec: &EmbedSpec, native: (u32, u32)) -> Result<(u32, u32), EmbedError> {
        let (width, height) = spec.scaled_size(native);
        if width == 0 || height == 0 {
            return Err(EmbedError::EmptyEmbed { width, height });
        }

        let max_alloc = Limits::default().max_alloc.unwrap_or(u64::MAX);
        let fits = u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|pixels| pixels.checked_mul(EMBED_BYTES_PER_PIXEL))
            .is_some_and(|bytes| bytes <= max_alloc);
        if !fits {
            return Err(EmbedError::EmbedTooLarge { width, height });
        }

        Ok((width, height))
    }

    /// Resize the embed by the spec's scale factor using Lanczos3.
    pub fn scale(embed: &DynamicImage, spec: &EmbedSpec) -> Result<DynamicImage, EmbedError> {
        let (width, height) = Self::scaled_size(spec, embed.dimensions())?;

        if (width, height) == embed.dimensions() {
            return Ok(embed.clone());
        }

        Ok(embed.resize_exact(width, height, FilterType::Lanczos3))
    }

    /// Paste `embed` onto `content` with its top-left corner at `position`.
    ///
    /// Pixels are replaced, not blended. The embed is converted to the
    /// content's color type, so the result keeps the content's channels and
    /// bit depth; content without an alpha channel stays opaque and the
    /// embed's alpha is dropped. Parts of the embed outside the content are
    /// clipped.
    pub fn paste(content: DynamicImage, embed: &DynamicImage, position: (i64, i64)) -> DynamicImage {
        let (x, y) = position;

        match content {
            DynamicImage::ImageLuma8(base) => {
                DynamicImage::ImageLuma8(replaced(base, &embed.to_luma8(), x, y))
            }
            DynamicImage::ImageLumaA8(base) => {
                DynamicImage::ImageLumaA8(replaced(base, &embed.to_luma_alpha8(), x, y))
            }
            DynamicImage::ImageRgb8(base) => {
                DynamicImage::ImageRgb8(replaced(base, &embed.to_rgb8(), x, y))
            }
            DynamicImage::ImageRgba8(base) => {
                DynamicImage::ImageRgba8(replaced(base, &embed.to_rgba8(), x, y))
            }
            DynamicImage::ImageLuma16(base) => {
                DynamicImage::ImageLuma16(replaced(base, &embed.to_luma16(), x, y))
            }
            DynamicImage::ImageLumaA16(base) => {
                DynamicImage::ImageLumaA16(replaced(base, &embed.to_luma_alpha16(), x, y))
            }
            DynamicImage::ImageRgb16(base) => {
                DynamicImage::ImageRgb16(replaced(base, &embed.to_rgb16(), x, y))
            }
            DynamicImage::ImageRgba16(base) => {
                DynamicImage::ImageRgba16(replaced(base, &embed.to_rgba16(), x, y))
            }
            DynamicImage::ImageRgb32F(base) => {
                DynamicImage::ImageRgb32F(replaced(base, &embed.to_rgb32f(), x, y))
            }
            DynamicImage::ImageRgba32F(base) => {
                DynamicImage::ImageRgba32F(replaced(base, &embed.to_rgba32f(), x, y))
            }
            other if other.color().has_alpha() => {
                DynamicImage::ImageRgba8(replaced(other.into_rgba8(), &embed.to_rgba8(), x, y))
            }
            other => DynamicImage::ImageRgb8(replaced(other.into_rgb8(), &embed.to_rgb8(), x, y)),
        }
    }

    /// Scale the embed, place it according to the spec and paste it.
    pub fn apply(
        content: DynamicImage,
        embed: &DynamicImage,
        spec: &EmbedSpec,
    ) -> Result<DynamicImage, EmbedError> {
        let embed = Self::scale(embed, spec)?;
        let position = spec
            .placement
            .offset(embed.dimensions(), content.dimensions());

        tracing::debug!(
            x = position.0,
            y = position.1,
            embed_width = embed.width(),
            embed_height = embed.height(),
            "Pasting watermark"
        );

        Ok(Self::paste(content, &embed, position))
    }
}

fn replaced<I, J>(mut base: I, top: &J, x: i64, y: i64) -> I
where
    I: GenericImage,
    J: GenericImageView<Pixel = I::Pixel>,
{
    imageops::replace(&mut base, top, x, y);
    base
}

/// Composites the watermark onto still images
pub struct ImageCompositor {
    spec: Arc<EmbedSpec>,
}

impl ImageCompositor {
    pub fn new(spec: Arc<EmbedSpec>) -> Self {
        Self { spec }
    }

    fn composite_blocking(spec: &EmbedSpec, content: &Path, output: &Path) -> anyhow::Result<()> {
        let embed = ImageProcessor::open(&spec.embed_path)?;
        let img = ImageProcessor::open(content)?;

        let result = Watermark::apply(img, &embed, spec)?;

        result
            .save(output)
            .with_context(|| format!("Failed to save image {}", output.display()))?;
        Ok(())
    }
}

#[async_trait]
impl Compositor for ImageCompositor {
    fn kind(&self) -> ContentKind {
        ContentKind::Image
    }

    async fn composite(&self, content: &Path, output: &Path) -> Result<(), anyhow::Error> {
        let spec = Arc::clone(&self.spec);
        let content: PathBuf = content.to_path_buf();
        let output: PathBuf = output.to_path_buf();

        // Decode and encode are CPU-bound
        tokio::task::spawn_blocking(move || Self::composite_blocking(&spec, &content, &output))
            .await
            .context("Image compositing task failed")?
    }
}
