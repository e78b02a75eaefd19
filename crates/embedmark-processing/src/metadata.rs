//! Media metadata types

/// Image metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
}

impl ImageMetadata {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Video metadata
///
/// `width` and `height` are the displayed frame size, with the stream's
/// rotation already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    /// Display rotation in degrees, normalized to `0..360`
    pub rotation: u32,
    pub duration: Option<f64>,
    pub codec: String,
}

impl VideoMetadata {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
