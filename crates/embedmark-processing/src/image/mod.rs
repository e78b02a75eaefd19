//! Image compositing
//!
//! - Metadata reads (processor)
//! - Scaling and pasting the watermark (watermark)

pub mod processor;
pub mod watermark;

pub use processor::ImageProcessor;
pub use watermark::{ImageCompositor, Watermark};
