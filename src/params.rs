//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`ImageHandle`](crate::ImageHandle) (which decides what
//! to compute) and the [`backend`](crate::backend) (which does the actual
//! pixel work). This separation allows swapping backends (e.g. for testing
//! with a mock) without changing handle logic.
//!
//! ## Types
//!
//! - [`ResizeRequest`] — What a caller asks of a resize: target dimensions, aspect handling, sample offsets.
//! - [`Quality`] — Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`Region`] — A rectangle within a buffer; both ends of a resample are described with it.

use serde::{Deserialize, Serialize};

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// What a resize should produce.
///
/// At least one target dimension must be set; the other is derived from the
/// source aspect ratio when absent. With `keep_aspect` the source is
/// cover-cropped to the target proportions before scaling; without it the
/// source is stretched to fit. Offsets shift the sampled region away from
/// the top-left corner of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeRequest {
    /// Target width in pixels; derived from `height` when `None`.
    pub width: Option<u32>,
    /// Target height in pixels; derived from `width` when `None`.
    pub height: Option<u32>,
    /// Preserve source proportions by cropping instead of stretching.
    pub keep_aspect: bool,
    /// Horizontal offset of the sampled region, in source pixels.
    pub offset_x: u32,
    /// Vertical offset of the sampled region, in source pixels.
    pub offset_y: u32,
}

impl Default for ResizeRequest {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            keep_aspect: true,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

impl ResizeRequest {
    /// Scale to a width, deriving the height from the source aspect.
    pub fn to_width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    /// Scale to a height, deriving the width from the source aspect.
    pub fn to_height(height: u32) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    /// Fill the exact target, cropping the source to match its proportions.
    pub fn cover(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Fill the exact target, stretching the source to fit.
    pub fn stretch(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            keep_aspect: false,
            ..Self::default()
        }
    }

    /// Shift the sampled region away from the top-left corner.
    pub fn with_offsets(mut self, offset_x: u32, offset_y: u32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }
}

/// A rectangle within a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the buffer origin.
    pub fn at_origin(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}
