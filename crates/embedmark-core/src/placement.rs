//! Corner placement of the watermark

use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Horizontal corner the margin is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalCorner {
    Left,
    Right,
}

/// Vertical corner the margin is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalCorner {
    Top,
    Bottom,
}

impl FromStr for HorizontalCorner {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(HorizontalCorner::Left),
            "right" => Ok(HorizontalCorner::Right),
            _ => Err(ValidationError::InvalidHorizontalPosition),
        }
    }
}

impl FromStr for VerticalCorner {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VerticalCorner::Top),
            "bottom" => Ok(VerticalCorner::Bottom),
            _ => Err(ValidationError::InvalidVerticalPosition),
        }
    }
}

impl fmt::Display for HorizontalCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HorizontalCorner::Left => "left",
            HorizontalCorner::Right => "right",
        })
    }
}

impl fmt::Display for VerticalCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerticalCorner::Top => "top",
            VerticalCorner::Bottom => "bottom",
        })
    }
}

/// Where the watermark's top-left corner goes: a corner plus a margin in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub horizontal: HorizontalCorner,
    pub vertical: VerticalCorner,
    pub margin: u32,
}

impl Placement {
    pub fn new(horizontal: HorizontalCorner, vertical: VerticalCorner, margin: u32) -> Self {
        Self {
            horizontal,
            vertical,
            margin,
        }
    }

    /// Pixel offset of the embed's top-left corner inside the content.
    ///
    /// Not clamped: a large margin or an embed bigger than the content yields
    /// negative or out-of-frame offsets.
    pub fn offset(&self, embed_size: (u32, u32), content_size: (u32, u32)) -> (i64, i64) {
        let (embed_w, embed_h) = (i64::from(embed_size.0), i64::from(embed_size.1));
        let (content_w, content_h) = (i64::from(content_size.0), i64::from(content_size.1));
        let margin = i64::from(self.margin);

        let x = match self.horizontal {
            HorizontalCorner::Left => margin,
            HorizontalCorner::Right => content_w - embed_w - margin,
        };
        let y = match self.vertical {
            VerticalCorner::Top => margin,
            VerticalCorner::Bottom => content_h - embed_h - margin,
        };

        (x, y)
    }
}
