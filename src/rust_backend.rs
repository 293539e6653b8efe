//! Pure Rust image backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, BMP, GIF) | `image` crate decoders, format forced from the resolved kind |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality-aware, RGB8) |
//! | Encode → PNG, BMP, GIF | `DynamicImage::write_to` |
//! | Resample | `crop_imm` + `resize_exact` (`Lanczos3` down, `CatmullRom` up) + `imageops::replace` |

use crate::backend::{BackendError, ImageBackend};
use crate::format::ImageKind;
use crate::params::{Quality, Region};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::trace;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn image_format(kind: ImageKind) -> ImageFormat {
    match kind {
        ImageKind::Jpeg => ImageFormat::Jpeg,
        ImageKind::Png => ImageFormat::Png,
        ImageKind::Bmp => ImageFormat::Bmp,
        ImageKind::Gif => ImageFormat::Gif,
    }
}

/// Clamp a region to a buffer's bounds. Off-buffer spans collapse to empty.
fn clamp_region(region: Region, width: u32, height: u32) -> Region {
    let x = region.x.min(width);
    let y = region.y.min(height);
    Region::new(x, y, region.width.min(width - x), region.height.min(height - y))
}

impl ImageBackend for RustBackend {
    type Buffer = DynamicImage;

    fn decode(&self, path: &Path, kind: ImageKind) -> Result<DynamicImage, BackendError> {
        let file = File::open(path).map_err(BackendError::Io)?;
        // The kind was resolved from the extension; decode with that format
        // rather than sniffing content.
        ImageReader::with_format(BufReader::new(file), image_format(kind))
            .decode()
            .map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "Failed to decode {}: {}",
                    path.display(),
                    e
                ))
            })
    }

    fn encode(
        &self,
        buffer: &DynamicImage,
        path: &Path,
        kind: ImageKind,
        quality: Option<Quality>,
    ) -> Result<(), BackendError> {
        let file = File::create(path).map_err(BackendError::Io)?;
        let mut writer = BufWriter::new(file);

        let written = match kind {
            ImageKind::Jpeg => {
                // JPEG cannot carry alpha
                let rgb = DynamicImage::from(buffer.to_rgb8());
                let encoder = match quality {
                    Some(q) => JpegEncoder::new_with_quality(&mut writer, q.value() as u8),
                    None => JpegEncoder::new(&mut writer),
                };
                rgb.write_with_encoder(encoder)
            }
            other => buffer.write_to(&mut writer, image_format(other)),
        };

        written.map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
        })
    }

    fn create_buffer(&self, width: u32, height: u32) -> Result<DynamicImage, BackendError> {
        if width == 0 || height == 0 {
            return Err(BackendError::ProcessingFailed(format!(
                "Cannot allocate a {width}x{height} buffer"
            )));
        }
        Ok(DynamicImage::new_rgba8(width, height))
    }

    fn copy_resampled(
        &self,
        dst: &mut DynamicImage,
        src: &DynamicImage,
        dst_region: Region,
        src_region: Region,
    ) -> Result<(), BackendError> {
        let src_region = clamp_region(src_region, src.width(), src.height());
        let dst_region = clamp_region(dst_region, dst.width(), dst.height());
        if src_region.is_empty() || dst_region.is_empty() {
            return Err(BackendError::ProcessingFailed(format!(
                "Cannot resample an empty region (source {}x{}, destination {}x{})",
                src_region.width, src_region.height, dst_region.width, dst_region.height
            )));
        }

        // Lanczos3 preserves detail when downscaling; CatmullRom is smoother
        // when upscaling.
        let filter = if dst_region.width < src_region.width
            || dst_region.height < src_region.height
        {
            FilterType::Lanczos3
        } else {
            FilterType::CatmullRom
        };

        trace!(
            src_x = src_region.x,
            src_y = src_region.y,
            src_w = src_region.width,
            src_h = src_region.height,
            dst_w = dst_region.width,
            dst_h = dst_region.height,
            filter = ?filter,
            "Resampling region"
        );

        let scaled = src
            .crop_imm(src_region.x, src_region.y, src_region.width, src_region.height)
            .resize_exact(dst_region.width, dst_region.height, filter);
        // replace (not overlay) so alpha is copied instead of composited
        imageops::replace(
            dst,
            &scaled,
            i64::from(dst_region.x),
            i64::from(dst_region.y),
        );
        Ok(())
    }

    fn width(&self, buffer: &DynamicImage) -> u32 {
        buffer.width()
    }

    fn height(&self, buffer: &DynamicImage) -> u32 {
        buffer.height()
    }
}
