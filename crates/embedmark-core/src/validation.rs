//! Prompt input validation
//!
//! Validators check raw prompt text and report a fixed message on failure.
//! Transformers turn accepted text into typed values; a transformer that
//! cannot convert its input reports the same kind of error so the caller can
//! simply ask again.

use std::path::{Path, PathBuf};

use crate::content::{self, CONTENT_EXTENSIONS, EMBED_EXTENSIONS};
use crate::placement::{HorizontalCorner, VerticalCorner};

/// Reasons a prompt answer is rejected. The display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("input must be numeric")]
    NotNumeric,

    #[error("input must be a float")]
    NotFloat,

    #[error("input must be greater than 0")]
    NotGreaterThanZero,

    #[error("input must be a valid directory")]
    NotDirectory,

    #[error("input must be a valid content path")]
    InvalidContentPath,

    #[error("input must be a valid embed file")]
    InvalidEmbedPath,

    #[error("input must be a valid horizontal position")]
    InvalidHorizontalPosition,

    #[error("input must be a valid vertical position")]
    InvalidVerticalPosition,
}

/// A predicate over raw prompt text
pub type Validator = fn(&str) -> Result<(), ValidationError>;

// Validators

pub fn is_numeric(text: &str) -> Result<(), ValidationError> {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::NotNumeric)
    }
}

/// Accepts anything `f64` parses except infinities and NaN. Surrounding
/// whitespace is ignored.
pub fn is_float(text: &str) -> Result<(), ValidationError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(()),
        _ => Err(ValidationError::NotFloat),
    }
}

pub fn is_greater_than_zero(text: &str) -> Result<(), ValidationError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value > 0.0 => Ok(()),
        _ => Err(ValidationError::NotGreaterThanZero),
    }
}

pub fn is_dir(text: &str) -> Result<(), ValidationError> {
    if Path::new(text).is_dir() {
        Ok(())
    } else {
        Err(ValidationError::NotDirectory)
    }
}

/// A content file with an allowed extension, or a directory holding at least
/// one such file.
pub fn is_content_path(text: &str) -> Result<(), ValidationError> {
    let path = Path::new(text);

    let valid = if path.is_file() {
        content::has_extension(path, &CONTENT_EXTENSIONS)
    } else if path.is_dir() {
        content::list_matching_files(&content::normalize_path(path), &CONTENT_EXTENSIONS)
            .map(|files| !files.is_empty())
            .unwrap_or(false)
    } else {
        false
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidContentPath)
    }
}

pub fn is_embed_path(text: &str) -> Result<(), ValidationError> {
    let path = Path::new(text);
    if path.is_file() && content::has_extension(path, &EMBED_EXTENSIONS) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmbedPath)
    }
}

pub fn is_horizontal_position(text: &str) -> Result<(), ValidationError> {
    text.parse::<HorizontalCorner>().map(|_| ())
}

pub fn is_vertical_position(text: &str) -> Result<(), ValidationError> {
    text.parse::<VerticalCorner>().map(|_| ())
}

// Transformers

pub fn text_to_int(text: &str) -> Result<u32, ValidationError> {
    text.parse().map_err(|_| ValidationError::NotNumeric)
}

pub fn text_to_float(text: &str) -> Result<f64, ValidationError> {
    text.trim().parse().map_err(|_| ValidationError::NotFloat)
}

pub fn text_to_file_path(text: &str) -> Result<PathBuf, ValidationError> {
    Ok(content::normalize_path(Path::new(text)))
}

pub fn text_to_dir_path(text: &str) -> Result<PathBuf, ValidationError> {
    Ok(content::normalize_path(Path::new(text)))
}

pub fn text_to_horizontal_corner(text: &str) -> Result<HorizontalCorner, ValidationError> {
    text.parse()
}

pub fn text_to_vertical_corner(text: &str) -> Result<VerticalCorner, ValidationError> {
    text.parse()
}

/// One file, or every matching file directly inside a directory.
pub fn text_to_content_paths(text: &str) -> Result<Vec<PathBuf>, ValidationError> {
    let path = Path::new(text);
    if path.is_file() {
        return Ok(vec![content::normalize_path(path)]);
    }

    let dir = content::normalize_path(path);
    let files = content::list_matching_files(&dir, &CONTENT_EXTENSIONS).map_err(|error| {
        tracing::debug!(%error, dir = %dir.display(), "Failed to list content directory");
        ValidationError::InvalidContentPath
    })?;

    if files.is_empty() {
        return Err(ValidationError::InvalidContentPath);
    }

    Ok(files)
}
