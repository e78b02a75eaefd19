//! Video compositing module

pub mod processor;
pub mod transformer;

pub use processor::VideoProcessor;
pub use transformer::VideoCompositor;
