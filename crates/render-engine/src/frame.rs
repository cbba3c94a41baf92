//! Frame types: captured input and composited output.

use image::RgbaImage;

/// An immutable raster snapshot of the live video at the moment of capture.
///
/// Dimensions match the video's native resolution. Preview zoom never
/// touches this type: capture always operates on the unscaled frame.
#[derive(Debug, Clone)]
pub struct CaptureFrame {
    pixels: RgbaImage,
}

impl CaptureFrame {
    /// Wrap a decoded RGBA buffer. A zero-dimension buffer is representable
    /// (the video element before its first frame) and is rejected later by
    /// the compositor, not here.
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The shorter of the two dimensions; overlay sizing is relative to it.
    pub fn shorter_dimension(&self) -> u32 {
        self.width().min(self.height())
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// The final rasterized frame with overlays baked in, suitable for export.
///
/// Always the same dimensions as the `CaptureFrame` it was composed from.
#[derive(Debug, Clone)]
pub struct CompositeImage {
    pixels: RgbaImage,
}

impl CompositeImage {
    pub(crate) fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorter_dimension() {
        let frame = CaptureFrame::new(RgbaImage::new(1920, 1080));
        assert_eq!(frame.shorter_dimension(), 1080);

        let portrait = CaptureFrame::new(RgbaImage::new(720, 1280));
        assert_eq!(portrait.shorter_dimension(), 720);
    }

    #[test]
    fn test_zero_dimension_frame_is_representable() {
        let frame = CaptureFrame::new(RgbaImage::new(0, 0));
        assert_eq!(frame.width(), 0);
        assert_eq!(frame.height(), 0);
    }
}
