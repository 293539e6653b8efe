//! Integration tests against the real `image`-backed backend: synthetic
//! sources in, real codecs out.

use image::codecs::jpeg::JpegEncoder;
use image::{ImageEncoder, Rgb, RgbImage};
use imgfit::{BackendError, HandleError, ImageHandle, Quality, ResizeRequest};
use std::path::Path;
use tempfile::TempDir;

/// Create a small valid JPEG file with the given dimensions.
fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a small valid PNG file with the given dimensions.
fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

/// 200x100 PNG in three vertical bands: green (x < 50), red (x < 100),
/// blue (the right half).
fn create_banded_png(path: &Path) {
    let img = RgbImage::from_fn(200, 100, |x, _| {
        if x < 50 {
            Rgb([0, 200, 0])
        } else if x < 100 {
            Rgb([200, 0, 0])
        } else {
            Rgb([0, 0, 200])
        }
    });
    img.save(path).unwrap();
}

#[test]
fn decode_encode_roundtrip_preserves_dimensions() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source.png");
    create_test_png(&source, 200, 150);

    for ext in ["jpg", "jpeg", "png", "bmp", "gif"] {
        let out = tmp.path().join(format!("copy.{ext}"));
        let handle = ImageHandle::open(&source).unwrap();
        handle.save(&out).unwrap();

        let reopened = ImageHandle::open(&out).unwrap();
        assert_eq!(
            reopened.dimensions(),
            (200, 150),
            "{ext} round-trip changed dimensions"
        );
    }
}

#[test]
fn width_only_resize_derives_height_through_real_codecs() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source.jpg");
    create_test_jpeg(&source, 800, 600);

    let mut handle = ImageHandle::open(&source).unwrap();
    handle.resize(&ResizeRequest::to_width(400)).unwrap();
    assert_eq!(handle.dimensions(), (400, 300));

    let out = tmp.path().join("resized.png");
    handle.save(&out).unwrap();
    assert_eq!(ImageHandle::open(&out).unwrap().dimensions(), (400, 300));
}

#[test]
fn height_only_resize_derives_width() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source.jpg");
    create_test_jpeg(&source, 800, 600);

    let mut handle = ImageHandle::open(&source).unwrap();
    handle.resize(&ResizeRequest::to_height(150)).unwrap();
    assert_eq!(handle.dimensions(), (200, 150));
}

#[test]
fn square_cover_fills_the_exact_target() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source.jpg");
    create_test_jpeg(&source, 800, 600);

    let mut handle = ImageHandle::open(&source).unwrap();
    handle.resize(&ResizeRequest::cover(400, 400)).unwrap();
    assert_eq!(handle.dimensions(), (400, 400));
}

#[test]
fn stretch_distorts_to_the_exact_target() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source.jpg");
    create_test_jpeg(&source, 800, 600);

    let mut handle = ImageHandle::open(&source).unwrap();
    handle.resize(&ResizeRequest::stretch(100, 500)).unwrap();
    assert_eq!(handle.dimensions(), (100, 500));
}

#[test]
fn cover_crop_samples_from_the_origin() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("bands.png");
    create_banded_png(&source);

    // 200x100 into a square: the 100x100 sample rect covers the green and
    // red bands; the blue band lies beyond it.
    let mut handle = ImageHandle::open(&source).unwrap();
    handle.resize(&ResizeRequest::cover(50, 50)).unwrap();

    let pixels = handle.buffer().to_rgba8();
    let left = pixels.get_pixel(10, 25).0;
    let right = pixels.get_pixel(40, 25).0;
    assert!(left[1] > 150, "left of the crop should be green: {left:?}");
    assert!(right[0] > 150, "right of the crop should be red: {right:?}");
    assert!(left[2] < 50 && right[2] < 50, "blue band leaked into the crop");
}

#[test]
fn offsets_shift_the_sampled_region() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("bands.png");
    create_banded_png(&source);

    // Offset 50 moves the sampled span entirely into the red band.
    let mut handle = ImageHandle::open(&source).unwrap();
    handle
        .resize(&ResizeRequest::cover(50, 50).with_offsets(50, 0))
        .unwrap();

    let pixels = handle.buffer().to_rgba8();
    let center = pixels.get_pixel(25, 25).0;
    assert!(
        center[0] > 150 && center[1] < 50 && center[2] < 50,
        "offset crop should be pure red: {center:?}"
    );
}

#[test]
fn unsupported_save_extension_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source.jpg");
    create_test_jpeg(&source, 100, 100);

    let handle = ImageHandle::open(&source).unwrap();
    let out = tmp.path().join("photo.tiff");
    let err = handle.save(&out).unwrap_err();
    assert!(matches!(err, HandleError::UnsupportedFormat { .. }));
    assert!(!out.exists());
}

#[test]
fn open_unknown_extension_is_rejected() {
    let err = ImageHandle::open("/photos/scan.tiff").unwrap_err();
    assert!(matches!(err, HandleError::UnsupportedFormat { .. }));
}

#[test]
fn open_missing_file_reports_io_error() {
    let err = ImageHandle::open("/nonexistent/image.jpg").unwrap_err();
    assert!(matches!(err, HandleError::Backend(BackendError::Io(_))));
}

#[test]
fn jpeg_quality_changes_encoded_size() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source.png");
    create_test_png(&source, 200, 150);

    let handle = ImageHandle::open(&source).unwrap();
    let low = tmp.path().join("low.jpg");
    let high = tmp.path().join("high.jpg");
    handle.save_with_quality(&low, Quality::new(10)).unwrap();
    handle.save_with_quality(&high, Quality::new(95)).unwrap();

    let low_size = std::fs::metadata(&low).unwrap().len();
    let high_size = std::fs::metadata(&high).unwrap().len();
    assert!(
        low_size < high_size,
        "quality 10 ({low_size}B) should encode smaller than quality 95 ({high_size}B)"
    );
}

#[test]
fn zero_stretch_target_fails_and_keeps_the_buffer() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source.jpg");
    create_test_jpeg(&source, 100, 100);

    let mut handle = ImageHandle::open(&source).unwrap();
    let err = handle.resize(&ResizeRequest::stretch(0, 100)).unwrap_err();
    assert!(matches!(err, HandleError::ResizeFailed(_)));
    assert_eq!(handle.dimensions(), (100, 100));
}
