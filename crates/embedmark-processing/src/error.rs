use std::path::PathBuf;

/// Failures while compositing a single content item
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("Scaled embed has no area: {width}x{height}")]
    EmptyEmbed { width: u32, height: u32 },

    #[error("Scaled embed is too large: {width}x{height}")]
    EmbedTooLarge { width: u32, height: u32 },

    #[error("Content path has no file name: {0}")]
    MissingFileName(PathBuf),

    #[error("ffprobe failed: {0}")]
    Probe(String),

    #[error("FFmpeg failed: {0}")]
    Ffmpeg(String),
}
