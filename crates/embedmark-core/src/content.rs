//! Content classification and path helpers

use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Extensions accepted for content items, in listing order.
pub const CONTENT_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".mp4"];

/// Extensions accepted for the watermark file.
pub const EMBED_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

const VIDEO_EXTENSION: &str = ".mp4";

/// Kind of a content item, decided by its file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    Video,
}

impl ContentKind {
    /// `.mp4` is a video, everything else is handled as an image.
    pub fn from_path(path: &Path) -> Self {
        if dotted_extension(path).as_deref() == Some(VIDEO_EXTENSION) {
            ContentKind::Video
        } else {
            ContentKind::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::Video => "video",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension of `path` including the leading dot, e.g. `.png`.
///
/// Dot-files such as `.png` have no extension.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| format!(".{ext}"))
}

/// Whether `path` ends in one of `allowed` (case-sensitive).
pub fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    dotted_extension(path).is_some_and(|ext| allowed.contains(&ext.as_str()))
}

/// Lexically normalize a path: drops `.` components, folds `..` into the
/// preceding normal component and collapses repeated separators. The
/// filesystem is never consulted, so symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

/// Render a directory path with exactly one trailing separator.
pub fn display_dir(path: &Path) -> String {
    let mut text = path.display().to_string();
    if !text.ends_with(MAIN_SEPARATOR) {
        text.push(MAIN_SEPARATOR);
    }
    text
}

/// Regular, non-hidden files directly inside `dir` whose extension is in
/// `allowed`. Results are grouped by extension in the order of `allowed` and
/// sorted by file name within a group.
pub fn list_matching_files(dir: &Path, allowed: &[&str]) -> io::Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        if file_name.to_string_lossy().starts_with('.') {
            continue;
        }
        let path = dir.join(&file_name);
        if path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();

    let mut files = Vec::with_capacity(candidates.len());
    for ext in allowed {
        files.extend(
            candidates
                .iter()
                .filter(|path| dotted_extension(path).as_deref() == Some(*ext))
                .cloned(),
        );
    }

    Ok(files)
}
