//! Video compositing through ffmpeg's overlay filter

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;

use embedmark_core::{ContentKind, EmbedConfig, EmbedSpec};

use crate::error::EmbedError;
use crate::image::{ImageProcessor, Watermark};
use crate::traits::Compositor;
use crate::video::processor::VideoProcessor;

/// Composites the watermark onto every frame of a video
pub struct VideoCompositor {
    spec: Arc<EmbedSpec>,
    ffmpeg_path: String,
    video_codec: String,
    video_preset: Option<String>,
    audio_codec: String,
    processor: VideoProcessor,
}

impl VideoCompositor {
    pub fn new(spec: Arc<EmbedSpec>, config: &EmbedConfig) -> Self {
        Self {
            spec,
            ffmpeg_path: config.ffmpeg_path.clone(),
            video_codec: config.video_codec.clone(),
            video_preset: config.video_preset.clone(),
            audio_codec: config.audio_codec.clone(),
            processor: VideoProcessor::new(config.ffprobe_path.clone()),
        }
    }

    /// Filter graph that scales the still embed and overlays it for the
    /// whole duration of the video.
    pub fn filter_graph(embed_size: (u32, u32), position: (i64, i64)) -> String {
        let (width, height) = embed_size;
        let (x, y) = position;
        format!(
            "[1:v]scale={width}:{height}:flags=lanczos[wm];\
             [0:v][wm]overlay=x={x}:y={y}:shortest=1[out]"
        )
    }

    /// Full ffmpeg argument list for one content file
    pub fn build_args(
        &self,
        content: &Path,
        output: &Path,
        content_size: (u32, u32),
        embed_size: (u32, u32),
        position: (i64, i64),
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-y".into(),
            "-i".into(),
            content.into(),
            // Loop the still image so it lasts as long as the video
            "-loop".into(),
            "1".into(),
            "-i".into(),
            self.spec.embed_path.as_os_str().into(),
            "-filter_complex".into(),
            Self::filter_graph(embed_size, position).into(),
            "-map".into(),
            "[out]".into(),
            "-map".into(),
            "0:a?".into(),
            "-c:v".into(),
            self.video_codec.as_str().into(),
        ];

        if let Some(preset) = &self.video_preset {
            args.extend([OsString::from("-preset"), OsString::from(preset)]);
        }

        // yuv420p needs even dimensions
        let (width, height) = content_size;
        if self.video_codec == "libx264" && width % 2 == 0 && height % 2 == 0 {
            args.extend([OsString::from("-pix_fmt"), OsString::from("yuv420p")]);
        }

        args.extend([
            OsString::from("-c:a"),
            OsString::from(&self.audio_codec),
            OsString::from(output),
        ]);

        args
    }

    #[tracing::instrument(skip(self, args), fields(
        process.executable.path = %self.ffmpeg_path,
        ffmpeg.operation = "overlay"
    ))]
    async fn run_ffmpeg(&self, args: &[OsString], output: &Path) -> Result<()> {
        let start = std::time::Instant::now();

        let result = Command::new(&self.ffmpeg_path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .context("Failed to execute ffmpeg")?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(EmbedError::Ffmpeg(stderr.trim().to_string()).into());
        }

        tracing::info!(
            duration_ms = start.elapsed().as_millis(),
            "FFmpeg overlay completed"
        );
        Ok(())
    }
}

#[async_trait]
impl Compositor for VideoCompositor {
    fn kind(&self) -> ContentKind {
        ContentKind::Video
    }

    async fn composite(&self, content: &Path, output: &Path) -> Result<(), anyhow::Error> {
        let embed = ImageProcessor::read_metadata(&self.spec.embed_path)?;
        let (width, height) = Watermark::scaled_size(&self.spec, embed.dimensions())?;

        let video = self
            .processor
            .extract_metadata_from_path(content)
            .await
            .context("Failed to probe video")?;

        let position = self
            .spec
            .placement
            .offset((width, height), video.dimensions());
        tracing::debug!(
            x = position.0,
            y = position.1,
            embed_width = width,
            embed_height = height,
            "Overlaying watermark"
        );

        let args = self.build_args(
            content,
            output,
            video.dimensions(),
            (width, height),
            position,
        );
        self.run_ffmpeg(&args, output).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedmark_core::{HorizontalCorner, Placement, VerticalCorner};
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;

    fn compositor(config: &EmbedConfig) -> VideoCompositor {
        let spec = EmbedSpec::new(
            PathBuf::from("marks/logo.png"),
            Placement::new(HorizontalCorner::Right, VerticalCorner::Bottom, 10),
            1.0,
        );
        VideoCompositor::new(Arc::new(spec), config)
    }

    fn as_strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_filter_graph() {
        assert_eq!(
            VideoCompositor::filter_graph((100, 50), (690, 540)),
            "[1:v]scale=100:50:flags=lanczos[wm];[0:v][wm]overlay=x=690:y=540:shortest=1[out]"
        );
    }

    #[test]
    fn test_filter_graph_negative_offset() {
        let graph = VideoCompositor::filter_graph((300, 300), (-120, -220));
        assert!(graph.contains("overlay=x=-120:y=-220"));
    }

    #[test]
    fn test_build_args_default_config() {
        let compositor = compositor(&EmbedConfig::default());
        let args = as_strings(&compositor.build_args(
            Path::new("in/clip.mp4"),
            Path::new("out/clip.mp4"),
            (800, 600),
            (100, 50),
            (690, 540),
        ));

        assert_eq!(&args[..3], &["-y", "-i", "in/clip.mp4"]);
        assert_eq!(&args[3..7], &["-loop", "1", "-i", "marks/logo.png"]);
        assert!(args.windows(2).any(|w| w == ["-c:v", "libx264"]));
        assert!(args.windows(2).any(|w| w == ["-preset", "fast"]));
        assert!(args.windows(2).any(|w| w == ["-c:a", "aac"]));
        assert!(args.windows(2).any(|w| w == ["-map", "0:a?"]));
        assert!(args.windows(2).any(|w| w == ["-pix_fmt", "yuv420p"]));
        assert_eq!(args.last().map(String::as_str), Some("out/clip.mp4"));
    }

    #[test]
    fn test_build_args_without_preset() {
        let config = EmbedConfig {
            video_codec: "libvpx-vp9".to_string(),
            video_preset: None,
            ..EmbedConfig::default()
        };
        let args = as_strings(&compositor(&config).build_args(
            Path::new("clip.mp4"),
            Path::new("out.mp4"),
            (64, 48),
            (10, 10),
            (0, 0),
        ));

        assert!(!args.iter().any(|a| a == "-preset"));
        assert!(!args.iter().any(|a| a == "-pix_fmt"));
        assert!(args.windows(2).any(|w| w == ["-c:v", "libvpx-vp9"]));
    }

    #[test]
    fn test_build_args_odd_dimensions_keep_pixel_format() {
        let compositor = compositor(&EmbedConfig::default());
        let args = as_strings(&compositor.build_args(
            Path::new("clip.mp4"),
            Path::new("out.mp4"),
            (321, 240),
            (10, 10),
            (0, 0),
        ));

        assert!(!args.iter().any(|a| a == "-pix_fmt"));
    }

    #[tokio::test]
    async fn test_huge_scale_is_rejected_before_ffmpeg() {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("logo.png");
        RgbaImage::from_pixel(100, 50, Rgba([0, 0, 0, 255]))
            .save(&logo)
            .unwrap();

        let spec = EmbedSpec::new(
            logo,
            Placement::new(HorizontalCorner::Left, VerticalCorner::Top, 0),
            1e9,
        );
        let config = EmbedConfig {
            ffmpeg_path: "/nonexistent/ffmpeg".to_string(),
            ffprobe_path: "/nonexistent/ffprobe".to_string(),
            ..EmbedConfig::default()
        };
        let compositor = VideoCompositor::new(Arc::new(spec), &config);

        let err = compositor
            .composite(&dir.path().join("clip.mp4"), &dir.path().join("out.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EmbedError>(),
            Some(EmbedError::EmbedTooLarge { .. })
        ));
    }
}
