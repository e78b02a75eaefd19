//! Configuration module
//!
//! Settings for the external media tools. Values come from the process
//! environment (and a `.env` file if present); the interactive prompts never
//! ask for them.

use std::env;

const FFMPEG_PATH: &str = "ffmpeg";
const FFPROBE_PATH: &str = "ffprobe";
const VIDEO_CODEC: &str = "libx264";
const VIDEO_PRESET: &str = "fast";
const AUDIO_CODEC: &str = "aac";

const DANGEROUS_CHARS: [char; 11] = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} contains unsafe characters: {value}")]
    UnsafePath { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Tooling configuration for the embedder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedConfig {
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub video_codec: String,
    /// `None` when the encoder should run without `-preset`
    pub video_preset: Option<String>,
    pub audio_codec: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: FFMPEG_PATH.to_string(),
            ffprobe_path: FFPROBE_PATH.to_string(),
            video_codec: VIDEO_CODEC.to_string(),
            video_preset: Some(VIDEO_PRESET.to_string()),
            audio_codec: AUDIO_CODEC.to_string(),
        }
    }
}

impl EmbedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let ffmpeg_path = executable(&lookup, "EMBEDMARK_FFMPEG_PATH", defaults.ffmpeg_path)?;
        let ffprobe_path = executable(&lookup, "EMBEDMARK_FFPROBE_PATH", defaults.ffprobe_path)?;

        let video_codec = non_empty(&lookup, "EMBEDMARK_VIDEO_CODEC", defaults.video_codec)?;
        let audio_codec = non_empty(&lookup, "EMBEDMARK_AUDIO_CODEC", defaults.audio_codec)?;

        // An explicitly empty preset disables the flag
        let video_preset = match lookup("EMBEDMARK_VIDEO_PRESET") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
            None => defaults.video_preset,
        };

        let config = Self {
            ffmpeg_path,
            ffprobe_path,
            video_codec,
            video_preset,
            audio_codec,
        };
        tracing::debug!(?config, "Loaded embed configuration");

        Ok(config)
    }
}

fn non_empty<F>(lookup: &F, var: &'static str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { var }),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(default),
    }
}

fn executable<F>(lookup: &F, var: &'static str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = non_empty(lookup, var, default)?;
    if value.chars().any(|c| DANGEROUS_CHARS.contains(&c)) {
        return Err(ConfigError::UnsafePath { var, value });
    }
    Ok(value)
}
