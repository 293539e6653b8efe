//! The owning image handle: decode, query, resize, encode.
//!
//! [`ImageHandle`] combines the pure geometry in
//! [`calculations`](crate::calculations) with backend execution. It owns
//! exactly one decoded buffer; [`resize`](ImageHandle::resize) builds the
//! replacement buffer first and commits it only after the backend reports
//! success, so the handle never observes a partial mutation.

use crate::backend::{BackendError, ImageBackend};
use crate::calculations::plan_resize;
use crate::format::ImageKind;
use crate::params::{Quality, Region, ResizeRequest};
use crate::rust_backend::RustBackend;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum HandleError {
    /// The path's extension is not one of jpg, jpeg, png, bmp, gif.
    #[error("Unsupported image format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
    /// A resize was requested with neither a width nor a height.
    #[error("Both width and height cannot be absent")]
    MissingTargetDimensions,
    /// The requested offsets leave no pixels to sample.
    #[error(
        "Offsets ({offset_x}, {offset_y}) leave no sample region inside {sample_width}x{sample_height}"
    )]
    OffsetOutOfBounds {
        offset_x: u32,
        offset_y: u32,
        sample_width: u32,
        sample_height: u32,
    },
    /// The backend could not build the resized buffer; the handle still
    /// holds the previous one.
    #[error("Resize failed: {0}")]
    ResizeFailed(#[source] BackendError),
    /// Decode or encode failure propagated from the backend.
    #[error("Image backend error: {0}")]
    Backend(#[from] BackendError),
}

/// One decoded image and the backend that operates on it.
///
/// Dimensions are read from the buffer on every query, so they always
/// reflect the most recent successful [`resize`](Self::resize). The handle
/// is the buffer's only owner; dropping it releases the pixels.
pub struct ImageHandle<B: ImageBackend = RustBackend> {
    backend: B,
    buffer: B::Buffer,
}

/// Shows only the dimensions: `B::Buffer` carries no `Debug` bound, so the
/// buffer (and backend) stay opaque.
impl<B: ImageBackend> fmt::Debug for ImageHandle<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl ImageHandle<RustBackend> {
    /// Decode the image at `path` with the default pure-Rust backend.
    ///
    /// The format is resolved from the file extension; unknown extensions
    /// fail with [`HandleError::UnsupportedFormat`] before any I/O.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HandleError> {
        Self::open_with(RustBackend::new(), path)
    }
}

impl<B: ImageBackend> ImageHandle<B> {
    /// Decode the image at `path` with the given backend.
    pub fn open_with(backend: B, path: impl AsRef<Path>) -> Result<Self, HandleError> {
        let path = path.as_ref();
        let kind = resolve_kind(path)?;
        let buffer = backend.decode(path, kind)?;
        debug!(
            path = %path.display(),
            kind = ?kind,
            width = backend.width(&buffer),
            height = backend.height(&buffer),
            "Decoded image"
        );
        Ok(Self { backend, buffer })
    }

    /// Current width in pixels.
    pub fn width(&self) -> u32 {
        self.backend.width(&self.buffer)
    }

    /// Current height in pixels.
    pub fn height(&self) -> u32 {
        self.backend.height(&self.buffer)
    }

    /// Current (width, height) in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Resize the image in place.
    ///
    /// The target dimensions come from `request`, deriving a missing one
    /// from the current aspect ratio. With `keep_aspect` the source is
    /// cover-cropped to the target proportions before scaling; offsets
    /// shift the sampled region and shrink its span.
    ///
    /// On failure the handle keeps its current buffer.
    pub fn resize(&mut self, request: &ResizeRequest) -> Result<(), HandleError> {
        let (orig_w, orig_h) = self.dimensions();
        let plan = plan_resize(
            (orig_w, orig_h),
            request.width,
            request.height,
            request.keep_aspect,
        )
        .ok_or(HandleError::MissingTargetDimensions)?;

        if request.offset_x >= plan.sample_width || request.offset_y >= plan.sample_height {
            return Err(HandleError::OffsetOutOfBounds {
                offset_x: request.offset_x,
                offset_y: request.offset_y,
                sample_width: plan.sample_width,
                sample_height: plan.sample_height,
            });
        }

        debug!(
            orig_w,
            orig_h,
            target_w = plan.target_width,
            target_h = plan.target_height,
            sample_w = plan.sample_width,
            sample_h = plan.sample_height,
            "Planned resize"
        );

        let src_region = Region::new(
            request.offset_x,
            request.offset_y,
            plan.sample_width - request.offset_x,
            plan.sample_height - request.offset_y,
        );
        let dst_region = Region::at_origin(plan.target_width, plan.target_height);

        // Build the replacement into a local; the old buffer stays in place
        // until the backend reports success.
        let mut next = self
            .backend
            .create_buffer(plan.target_width, plan.target_height)
            .map_err(HandleError::ResizeFailed)?;
        self.backend
            .copy_resampled(&mut next, &self.buffer, dst_region, src_region)
            .map_err(HandleError::ResizeFailed)?;
        self.buffer = next;
        Ok(())
    }

    /// Encode the image to `path` with the encoder's default settings.
    ///
    /// The format is resolved from the destination extension; unknown
    /// extensions fail with [`HandleError::UnsupportedFormat`] before
    /// anything is written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HandleError> {
        self.save_inner(path.as_ref(), None)
    }

    /// Encode the image to `path` with an explicit quality.
    ///
    /// Quality only reaches encoders that take one (JPEG); for lossless
    /// formats it is silently ignored.
    pub fn save_with_quality(
        &self,
        path: impl AsRef<Path>,
        quality: Quality,
    ) -> Result<(), HandleError> {
        self.save_inner(path.as_ref(), Some(quality))
    }

    fn save_inner(&self, path: &Path, quality: Option<Quality>) -> Result<(), HandleError> {
        let kind = resolve_kind(path)?;
        let quality = if kind.supports_quality() { quality } else { None };
        debug!(
            path = %path.display(),
            kind = ?kind,
            quality = quality.map(Quality::value),
            "Encoding image"
        );
        self.backend.encode(&self.buffer, path, kind, quality)?;
        Ok(())
    }

    /// Borrow the decoded buffer.
    pub fn buffer(&self) -> &B::Buffer {
        &self.buffer
    }

    /// Consume the handle, releasing the decoded buffer to the caller.
    pub fn into_buffer(self) -> B::Buffer {
        self.buffer
    }
}

fn resolve_kind(path: &Path) -> Result<ImageKind, HandleError> {
    ImageKind::from_path(path).ok_or_else(|| HandleError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}
