//! Video processor - metadata extraction through ffprobe

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tokio::process::Command;

use crate::error::EmbedError;
use crate::metadata::VideoMetadata;

pub struct VideoProcessor {
    ffprobe_path: String,
}

impl VideoProcessor {
    pub fn new(ffprobe_path: String) -> Self {
        Self { ffprobe_path }
    }

    /// Probe the first video stream of a file
    #[tracing::instrument(skip(self), fields(
        process.executable.path = %self.ffprobe_path,
        ffmpeg.operation = "probe"
    ))]
    pub async fn extract_metadata_from_path(&self, video_path: &Path) -> Result<VideoMetadata> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
                "-select_streams",
                "v:0",
            ])
            .arg(video_path)
            .output()
            .await
            .context("Failed to execute ffprobe")?;

        if !output.status.success() {
            return Err(EmbedError::Probe(format!(
                "{} exited with {}: {}",
                video_path.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))
            .into());
        }

        let metadata = parse_probe_output(&output.stdout)
            .with_context(|| format!("Unusable ffprobe output for {}", video_path.display()))?;

        tracing::info!(
            duration_ms = start.elapsed().as_millis(),
            width = metadata.width,
            height = metadata.height,
            rotation = metadata.rotation,
            video_duration = ?metadata.duration,
            codec = %metadata.codec,
            "Video probe completed"
        );

        Ok(metadata)
    }
}

/// Parse `ffprobe -print_format json -show_format -show_streams` output.
pub fn parse_probe_output(stdout: &[u8]) -> Result<VideoMetadata> {
    let probe_data: serde_json::Value =
        serde_json::from_slice(stdout).context("Failed to parse ffprobe output")?;

    let stream = probe_data["streams"]
        .get(0)
        .ok_or_else(|| anyhow!("No video stream found"))?;

    let coded_width = stream["width"]
        .as_u64()
        .and_then(|w| u32::try_from(w).ok())
        .ok_or_else(|| anyhow!("Could not parse width"))?;

    let coded_height = stream["height"]
        .as_u64()
        .and_then(|h| u32::try_from(h).ok())
        .ok_or_else(|| anyhow!("Could not parse height"))?;

    // ffmpeg auto-rotates its input, so quarter turns swap the frame sides
    let rotation = stream_rotation(stream);
    let (width, height) = if rotation % 180 == 90 {
        (coded_height, coded_width)
    } else {
        (coded_width, coded_height)
    };

    let duration = probe_data["format"]["duration"]
        .as_str()
        .and_then(|d| d.parse::<f64>().ok());

    let codec = stream["codec_name"]
        .as_str()
        .unwrap_or("unknown")
        .to_string();

    Ok(VideoMetadata {
        width,
        height,
        rotation,
        duration,
        codec,
    })
}

/// Rotation from the display matrix side data, or the legacy `rotate` tag.
fn stream_rotation(stream: &serde_json::Value) -> u32 {
    let from_side_data = stream["side_data_list"]
        .as_array()
        .and_then(|list| list.iter().find_map(|side_data| side_data["rotation"].as_f64()));
    let from_tag = || {
        stream["tags"]["rotate"]
            .as_str()
            .and_then(|rotate| rotate.trim().parse::<f64>().ok())
    };

    from_side_data
        .or_else(from_tag)
        .filter(|degrees| degrees.is_finite())
        .map(|degrees| (degrees.round() as i64).rem_euclid(360) as u32)
        .unwrap_or(0)
}
