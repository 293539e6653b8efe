//! # imgfit
//!
//! Aspect-aware image resizing and format round-trips over a pluggable
//! raster backend.
//!
//! One component does the work: [`ImageHandle`] owns a single decoded image,
//! answers width/height queries, computes resize geometry, and delegates
//! every pixel operation — decode, resample, encode — to an
//! [`ImageBackend`].
//!
//! ```no_run
//! use imgfit::{ImageHandle, ResizeRequest};
//!
//! # fn main() -> Result<(), imgfit::HandleError> {
//! let mut photo = ImageHandle::open("holiday.jpg")?;
//! photo.resize(&ResizeRequest::cover(400, 400))?;
//! photo.save("holiday-square.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | `handle` | [`ImageHandle`] — owns one decoded buffer; open, resize, save |
//! | `calculations` | [`plan_resize`] — pure resize geometry, no pixels, no I/O |
//! | `format` | [`ImageKind`] — the fixed extension-to-format table |
//! | `params` | [`ResizeRequest`], [`Quality`], [`Region`] — value types describing operations |
//! | [`backend`] | The [`ImageBackend`] capability trait every backend implements |
//! | [`rust_backend`] | [`RustBackend`] — the production `image`-crate binding |
//!
//! # Design Decisions
//!
//! ## Geometry Before Pixels
//!
//! The entire decision surface of a resize — deriving a missing dimension
//! from the aspect ratio, choosing between stretching and cover-cropping,
//! sizing the sample rectangle — lives in [`plan_resize`] as arithmetic on
//! plain numbers. The handle turns the resulting [`ResizePlan`] into two
//! backend calls. Dimension behavior is unit-testable without decoding a
//! single pixel.
//!
//! ## One Buffer, One Owner
//!
//! An [`ImageHandle`] owns its decoded buffer outright; dimensions are read
//! from the buffer on every query rather than cached beside it. A resize
//! builds the replacement buffer into a local and commits it only after the
//! backend reports success — a failed resample leaves the handle exactly as
//! it was. Dropping the handle releases the pixels on every exit path.
//!
//! ## Backends Are Swappable
//!
//! [`ImageBackend`] names the six operations the handle needs: decode,
//! encode, create_buffer, copy_resampled, width, height. The production
//! [`RustBackend`] binds them to the `image` crate — pure Rust, statically
//! linked, no system libraries. Tests drive the handle through a scripted
//! mock instead; alternative codec stacks implement the same trait.
//!
//! ## A Fixed, Symmetric Format Set
//!
//! JPEG, PNG, BMP, and GIF — every format the handle decodes it also
//! encodes. Dispatch goes through one extension lookup table in both
//! directions, and unknown extensions are errors before any I/O happens,
//! never a warning with an unusable handle behind it.
//!
//! ## Logging
//!
//! The crate emits sparse [`tracing`] debug events at the decode, plan, and
//! encode steps. It installs no subscriber; that choice belongs to the
//! application.

mod calculations;
mod format;
mod handle;
mod params;

pub mod backend;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{ResizePlan, plan_resize};
pub use format::{ImageKind, SUPPORTED_EXTENSIONS};
pub use handle::{HandleError, ImageHandle};
pub use params::{Quality, Region, ResizeRequest};
pub use rust_backend::RustBackend;
