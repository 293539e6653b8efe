//! Image buffer backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the six operations every backend must
//! support: decode, encode, create_buffer, copy_resampled, width, and height.
//! Buffers are an associated type, opaque to the rest of the crate — the
//! handle moves them around and asks questions; only the backend looks
//! inside.
//!
//! The production implementation is
//! [`RustBackend`](crate::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use crate::format::ImageKind;
use crate::params::{Quality, Region};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image buffer backends.
///
/// Every backend must implement all six operations so the rest of the
/// codebase is backend-agnostic. Decode and encode dispatch on an already
/// resolved [`ImageKind`] — extension handling stays outside the backend.
pub trait ImageBackend {
    /// Decoded in-memory image representation.
    type Buffer;

    /// Decode the file at `path` as `kind`.
    fn decode(&self, path: &Path, kind: ImageKind) -> Result<Self::Buffer, BackendError>;

    /// Encode `buffer` to `path` as `kind`.
    ///
    /// `quality` is only passed for kinds whose encoder takes one; `None`
    /// selects the encoder default.
    fn encode(
        &self,
        buffer: &Self::Buffer,
        path: &Path,
        kind: ImageKind,
        quality: Option<Quality>,
    ) -> Result<(), BackendError>;

    /// Allocate a blank buffer of the given dimensions.
    fn create_buffer(&self, width: u32, height: u32) -> Result<Self::Buffer, BackendError>;

    /// Scale the pixels of `src_region` within `src` into `dst_region`
    /// within `dst`.
    fn copy_resampled(
        &self,
        dst: &mut Self::Buffer,
        src: &Self::Buffer,
        dst_region: Region,
        src_region: Region,
    ) -> Result<(), BackendError>;

    /// Current width of `buffer` in pixels.
    fn width(&self, buffer: &Self::Buffer) -> u32;

    /// Current height of `buffer` in pixels.
    fn height(&self, buffer: &Self::Buffer) -> u32;
}

/// A shared reference forwards every operation, so one backend instance can
/// serve several handles.
impl<B: ImageBackend> ImageBackend for &B {
    type Buffer = B::Buffer;

    fn decode(&self, path: &Path, kind: ImageKind) -> Result<Self::Buffer, BackendError> {
        (**self).decode(path, kind)
    }

    fn encode(
        &self,
        buffer: &Self::Buffer,
        path: &Path,
        kind: ImageKind,
        quality: Option<Quality>,
    ) -> Result<(), BackendError> {
        (**self).encode(buffer, path, kind, quality)
    }

    fn create_buffer(&self, width: u32, height: u32) -> Result<Self::Buffer, BackendError> {
        (**self).create_buffer(width, height)
    }

    fn copy_resampled(
        &self,
        dst: &mut Self::Buffer,
        src: &Self::Buffer,
        dst_region: Region,
        src_region: Region,
    ) -> Result<(), BackendError> {
        (**self).copy_resampled(dst, src, dst_region, src_region)
    }

    fn width(&self, buffer: &Self::Buffer) -> u32 {
        (**self).width(buffer)
    }

    fn height(&self, buffer: &Self::Buffer) -> u32 {
        (**self).height(buffer)
    }
}
