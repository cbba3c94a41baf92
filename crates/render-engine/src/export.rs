//! Composite export: lossy raster encoding.

use std::path::{Path, PathBuf};

use bearingcam_common::error::BearingResult;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::frame::CompositeImage;

/// Default JPEG quality for exported composites.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Encode a composite as JPEG bytes. Alpha is flattened; quality loss is
/// acceptable for exported artifacts.
pub fn encode_jpeg(image: &CompositeImage, quality: u8) -> BearingResult<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(image.pixels().clone()).to_rgb8();
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode_image(&rgb)?;
    Ok(buf)
}

/// Encode and write a composite to disk, creating parent directories.
pub fn save_jpeg(image: &CompositeImage, path: &Path, quality: u8) -> BearingResult<PathBuf> {
    let bytes = encode_jpeg(image, quality)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    tracing::info!(
        output = %path.display(),
        bytes = bytes.len(),
        "Composite exported"
    );
    Ok(path.to_path_buf())
}
