//! Embedmark Media Processing Library
//!
//! Stamps a watermark onto images (decoded and re-encoded in process) and
//! videos (composited by an external ffmpeg).

pub mod embedder;
pub mod error;
pub mod image;
pub mod metadata;
pub mod traits;
pub mod video;

// Re-export commonly used types
pub use embedder::Embedder;
pub use error::EmbedError;
pub use crate::image::{ImageCompositor, Watermark};
pub use metadata::{ImageMetadata, VideoMetadata};
pub use traits::Compositor;
pub use video::{VideoCompositor, VideoProcessor};
