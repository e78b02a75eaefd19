//! Embedmark Core Library
//!
//! Domain types, prompt validation and configuration shared by the embedmark
//! crates. Nothing in here touches media data.

pub mod config;
pub mod content;
pub mod embed;
pub mod placement;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigError, EmbedConfig};
pub use content::{display_dir, normalize_path, ContentKind, CONTENT_EXTENSIONS, EMBED_EXTENSIONS};
pub use embed::EmbedSpec;
pub use placement::{HorizontalCorner, Placement, VerticalCorner};
pub use validation::{ValidationError, Validator};
