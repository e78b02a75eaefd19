//! Image processor - decoding and metadata reads

use anyhow::Context;
use image::{DynamicImage, ImageReader};
use std::path::Path;

use crate::metadata::ImageMetadata;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Decode an image from disk, detecting the format from its contents.
    pub fn open(path: &Path) -> Result<DynamicImage, anyhow::Error> {
        let img = ImageReader::open(path)
            .with_context(|| format!("Failed to open image {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("Failed to read image {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to decode image {}", path.display()))?;
        Ok(img)
    }

    /// Read only the image header to get its dimensions.
    pub fn read_metadata(path: &Path) -> Result<ImageMetadata, anyhow::Error> {
        let (width, height) = ImageReader::open(path)
            .with_context(|| format!("Failed to open image {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("Failed to read image {}", path.display()))?
            .into_dimensions()
            .with_context(|| format!("Failed to read dimensions of {}", path.display()))?;
        Ok(ImageMetadata { width, height })
    }
}
