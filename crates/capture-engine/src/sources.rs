//! Sensor and media source traits, plus synthetic implementations.
//!
//! Real camera/orientation/geolocation plumbing is platform territory and
//! out of scope here; sessions consume these capability traits. The
//! synthetic implementations drive tests and the CLI demo path.

use bearingcam_common::error::{BearingError, BearingResult};
use bearingcam_render::CaptureFrame;
use bearingcam_sensor_model::GeoFix;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

/// Which camera to acquire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Facing {
    /// Rear camera.
    #[default]
    Environment,
    /// Front camera.
    User,
}

impl std::str::FromStr for Facing {
    type Err = BearingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "environment" => Ok(Facing::Environment),
            "user" => Ok(Facing::User),
            other => Err(BearingError::config(format!(
                "Unknown camera facing '{other}' (expected 'environment' or 'user')"
            ))),
        }
    }
}

/// A camera that can hand out live video streams.
pub trait CameraSource {
    /// Acquire a stream. Fails with `PermissionDenied` or a capture error
    /// when no camera is available; the failure is terminal for the
    /// session's video feed.
    fn request_stream(&mut self, facing: Facing) -> BearingResult<Box<dyn VideoStream>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// A live video stream handle.
pub trait VideoStream: Send {
    /// Native frame dimensions. May be (0, 0) before the first frame.
    fn dimensions(&self) -> (u32, u32);

    /// Snapshot the current frame at native resolution.
    fn latest_frame(&mut self) -> BearingResult<CaptureFrame>;

    /// Stop the underlying tracks. Idempotent; the session calls this on
    /// every exit path so the device's camera indicator is not leaked.
    fn release(&mut self);
}

/// A device-orientation sensor, polled for raw heading degrees.
///
/// Readings may be negative or >= 360; normalization happens downstream.
/// The sensor may be entirely absent on a platform, in which case the
/// heading stays unavailable and the arrow renders at its fixed "up".
pub trait OrientationSource: Send {
    /// Poll for the next reading. `None` means no new event yet.
    fn poll(&mut self) -> BearingResult<Option<f64>>;

    /// Source name for logging.
    fn name(&self) -> &str;

    /// Whether the sensor exists on this platform.
    fn is_available(&self) -> bool;
}

/// A one-shot geolocation source.
pub trait LocationSource {
    /// Request a fix. Fails with `PermissionDenied` or a sensor error; the
    /// session maps failure to "no fix", never to a placeholder.
    fn request_fix(&mut self) -> BearingResult<GeoFix>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Deterministic test-pattern camera: a neutral field with corner and
/// center markers, useful for verifying overlay placement.
pub struct SyntheticCamera {
    width: u32,
    height: u32,
}

impl SyntheticCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl CameraSource for SyntheticCamera {
    fn request_stream(&mut self, _facing: Facing) -> BearingResult<Box<dyn VideoStream>> {
        Ok(Box::new(SyntheticStream {
            width: self.width,
            height: self.height,
            released: false,
        }))
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}

struct SyntheticStream {
    width: u32,
    height: u32,
    released: bool,
}

impl VideoStream for SyntheticStream {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn latest_frame(&mut self) -> BearingResult<CaptureFrame> {
        if self.released {
            return Err(BearingError::capture("Stream already released"));
        }
        Ok(CaptureFrame::new(synthetic_pattern(self.width, self.height)))
    }

    fn release(&mut self) {
        self.released = true;
    }
}

/// Test pattern with markers at known positions.
pub fn synthetic_pattern(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([40, 40, 50, 255]));
    if width < 64 || height < 64 {
        return img;
    }

    let radius = 12i32;
    let inset = 20i32;
    let markers = [
        (inset, inset),
        (width as i32 - inset, inset),
        (width as i32 - inset, height as i32 - inset),
        (inset, height as i32 - inset),
    ];
    for (x, y) in markers {
        draw_filled_circle_mut(&mut img, (x, y), radius, Rgba([255, 50, 50, 255]));
    }

    draw_filled_circle_mut(
        &mut img,
        (width as i32 / 2, height as i32 / 2),
        radius,
        Rgba([50, 255, 50, 255]),
    );

    img
}

/// Camera that always refuses the stream, for degraded-mode tests.
pub struct DeniedCamera;

impl CameraSource for DeniedCamera {
    fn request_stream(&mut self, _facing: Facing) -> BearingResult<Box<dyn VideoStream>> {
        Err(BearingError::permission_denied("Camera access denied"))
    }

    fn name(&self) -> &str {
        "denied"
    }
}

/// Orientation source replaying a scripted sequence of raw readings.
pub struct ScriptedOrientation {
    readings: std::vec::IntoIter<f64>,
}

impl ScriptedOrientation {
    pub fn new(readings: Vec<f64>) -> Self {
        Self {
            readings: readings.into_iter(),
        }
    }
}

impl OrientationSource for ScriptedOrientation {
    fn poll(&mut self) -> BearingResult<Option<f64>> {
        Ok(self.readings.next())
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Orientation source that fails every poll, for error-path tests.
pub struct FaultyOrientation {
    polls: std::sync::Arc<std::sync::atomic::AtomicU64>,
}

impl FaultyOrientation {
    pub fn new() -> Self {
        Self {
            polls: std::sync::Arc::new(std::sync::atomic::AtomicU64::new(0)),
        }
    }

    /// Shared poll counter, readable after the source is moved into a tracker.
    pub fn poll_counter(&self) -> std::sync::Arc<std::sync::atomic::AtomicU64> {
        self.polls.clone()
    }
}

impl Default for FaultyOrientation {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationSource for FaultyOrientation {
    fn poll(&mut self) -> BearingResult<Option<f64>> {
        self.polls
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Err(BearingError::sensor("Orientation read failed"))
    }

    fn name(&self) -> &str {
        "faulty"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Orientation source for platforms without the sensor API.
pub struct MissingOrientation;

impl OrientationSource for MissingOrientation {
    fn poll(&mut self) -> BearingResult<Option<f64>> {
        Ok(None)
    }

    fn name(&self) -> &str {
        "missing"
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Location source returning a fixed coordinate, or denying access.
pub enum StaticLocation {
    Fix { latitude: f64, longitude: f64 },
    Denied,
}

impl LocationSource for StaticLocation {
    fn request_fix(&mut self) -> BearingResult<GeoFix> {
        match self {
            StaticLocation::Fix {
                latitude,
                longitude,
            } => Ok(GeoFix::new(*latitude, *longitude)),
            StaticLocation::Denied => {
                Err(BearingError::permission_denied("Location access denied"))
            }
        }
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_parses() {
        assert_eq!("environment".parse::<Facing>().unwrap(), Facing::Environment);
        assert_eq!("user".parse::<Facing>().unwrap(), Facing::User);
        assert!("back".parse::<Facing>().is_err());
    }

    #[test]
    fn test_synthetic_stream_native_dimensions() {
        let mut camera = SyntheticCamera::new(1280, 720);
        let mut stream = camera.request_stream(Facing::Environment).unwrap();
        assert_eq!(stream.dimensions(), (1280, 720));
        let frame = stream.latest_frame().unwrap();
        assert_eq!((frame.width(), frame.height()), (1280, 720));
    }

    #[test]
    fn test_released_stream_yields_no_frames() {
        let mut camera = SyntheticCamera::new(640, 480);
        let mut stream = camera.request_stream(Facing::Environment).unwrap();
        stream.release();
        assert!(stream.latest_frame().is_err());
    }

    #[test]
    fn test_scripted_orientation_drains() {
        let mut source = ScriptedOrientation::new(vec![10.0, -90.0]);
        assert_eq!(source.poll().unwrap(), Some(10.0));
        assert_eq!(source.poll().unwrap(), Some(-90.0));
        assert_eq!(source.poll().unwrap(), None);
    }

    #[test]
    fn test_denied_location() {
        let mut source = StaticLocation::Denied;
        assert!(source.request_fix().is_err());
    }
}
