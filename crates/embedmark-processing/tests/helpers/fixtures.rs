//! On-disk media fixtures generated at test time

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Solid white RGB image saved in the format implied by `name`
pub fn write_white_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
        .save(&path)
        .expect("Failed to write content fixture");
    path
}

/// Solid black, fully opaque PNG watermark
pub fn write_black_logo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]))
        .save_with_format(&path, ImageFormat::Png)
        .expect("Failed to write watermark fixture");
    path
}

/// Whether an executable can be started at all
pub fn tool_available(program: &str) -> bool {
    Command::new(program)
        .arg("-version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// One second of solid white video generated by ffmpeg's lavfi source
pub fn write_white_video(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let source = format!("color=c=white:s={width}x{height}:d=1");
    let status = Command::new("ffmpeg")
        .args([
            "-y",
            "-loglevel",
            "error",
            "-f",
            "lavfi",
            "-i",
            source.as_str(),
            "-pix_fmt",
            "yuv420p",
        ])
        .arg(&path)
        .status()
        .expect("Failed to run ffmpeg");
    assert!(status.success(), "ffmpeg could not create the video fixture");
    path
}

/// Whether the local ffmpeg build ships `encoder`
pub fn ffmpeg_has_encoder(encoder: &str) -> bool {
    Command::new("ffmpeg")
        .args(["-hide_banner", "-encoders"])
        .output()
        .map(|output| {
            String::from_utf8_lossy(&output.stdout)
                .split_whitespace()
                .any(|word| word == encoder)
        })
        .unwrap_or(false)
}
