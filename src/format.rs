//! Image format identification by file extension.
//!
//! The format set is fixed and symmetric: every format the handle can decode
//! it can also encode. Dispatch goes through a lookup table keyed by
//! extension — unknown extensions are rejected explicitly, never passed
//! through to the backend.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raster formats with symmetric read/write support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Jpeg,
    Png,
    Bmp,
    Gif,
}

/// Extension → format table. Matching is ASCII-case-insensitive.
const EXTENSION_TABLE: &[(&str, ImageKind)] = &[
    ("jpg", ImageKind::Jpeg),
    ("jpeg", ImageKind::Jpeg),
    ("png", ImageKind::Png),
    ("bmp", ImageKind::Bmp),
    ("gif", ImageKind::Gif),
];

/// File extensions accepted by [`ImageKind::from_path`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

impl ImageKind {
    /// Resolve a format from a bare file extension (no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        EXTENSION_TABLE
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
            .map(|&(_, kind)| kind)
    }

    /// Resolve a format from a path's extension.
    ///
    /// Returns `None` when the extension is missing, not valid UTF-8, or not
    /// in the supported set.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
            ImageKind::Bmp => "bmp",
            ImageKind::Gif => "gif",
        }
    }

    /// Whether the encoder takes a quality setting (lossy formats only).
    pub fn supports_quality(self) -> bool {
        matches!(self, ImageKind::Jpeg)
    }
}
