//! Capture session management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bearingcam_common::error::{BearingError, BearingResult};
use bearingcam_render::{compose_capture, CompositeImage, OverlayAssets, OverlayLayout};
use bearingcam_sensor_model::{
    heading_cell, GeoFix, HeadingReader, HeadingWriter, OrientationOffset, SensorSnapshot,
};

use crate::orientation::OrientationTracker;
use crate::sources::{CameraSource, Facing, LocationSource, OrientationSource, VideoStream};

/// Configuration for starting a new capture session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Camera facing to request.
    pub facing: Facing,

    /// Initial preview zoom factor.
    pub zoom: f64,

    /// Overlay layout used for composition.
    pub layout: OverlayLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            facing: Facing::Environment,
            zoom: 1.0,
            layout: OverlayLayout::default(),
        }
    }
}

/// State of a capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Session created but not started.
    Idle,
    /// Live: sensors running, captures allowed.
    Live,
    /// Stopped: all resources released.
    Stopped,
}

/// Preview zoom bounds. Zoom is cosmetic — a display-scale transform on the
/// live preview only. It never touches capture geometry.
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 5.0;

/// A CSS-style display transform for the live preview element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewTransform {
    pub scale: f64,
}

impl PreviewTransform {
    pub fn css_transform(&self) -> String {
        format!("scale({:.4}, {:.4})", self.scale, self.scale)
    }
}

/// A live session coordinating the camera stream, the orientation tracker,
/// and one-shot location fixes.
pub struct CaptureSession {
    config: SessionConfig,
    state: SessionState,
    assets: OverlayAssets,
    stream: Option<Box<dyn VideoStream>>,
    heading: HeadingReader,
    heading_writer: Option<HeadingWriter>,
    tracker_stop: Option<Arc<AtomicBool>>,
    tracker_task: Option<tokio::task::JoinHandle<BearingResult<u64>>>,
    orientation_offset: OrientationOffset,
    geo: Option<GeoFix>,
    zoom: f64,
}

impl CaptureSession {
    /// Create a session with preloaded overlay assets.
    pub fn new(config: SessionConfig, assets: OverlayAssets) -> Self {
        let (writer, reader) = heading_cell();
        let zoom = config.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        Self {
            config,
            state: SessionState::Idle,
            assets,
            stream: None,
            heading: reader,
            heading_writer: Some(writer),
            tracker_stop: None,
            tracker_task: None,
            orientation_offset: OrientationOffset::Deg0,
            geo: None,
            zoom,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a video stream was acquired (false in degraded mode).
    pub fn has_video(&self) -> bool {
        self.stream.is_some()
    }

    /// Go live: acquire the camera and start the orientation tracker.
    ///
    /// Camera failure is terminal for this session's video feed — it is
    /// logged and the session continues degraded (sensors only, capture
    /// disabled). It is never retried automatically.
    pub fn start(
        &mut self,
        camera: &mut dyn CameraSource,
        orientation: Box<dyn OrientationSource>,
    ) -> BearingResult<()> {
        if self.state != SessionState::Idle {
            return Err(BearingError::capture("Session already started"));
        }

        tracing::info!(camera = %camera.name(), facing = ?self.config.facing, "Starting capture session");

        match camera.request_stream(self.config.facing) {
            Ok(stream) => {
                let (w, h) = stream.dimensions();
                tracing::info!(width = w, height = h, "Video stream acquired");
                self.stream = Some(stream);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Camera unavailable; continuing without video");
            }
        }

        if let Some(writer) = self.heading_writer.take() {
            let mut tracker = OrientationTracker::new(orientation, writer);
            self.tracker_stop = Some(tracker.stop_flag());
            self.tracker_task = Some(tokio::spawn(async move { tracker.run().await }));
        }

        self.state = SessionState::Live;
        Ok(())
    }

    /// Request a one-shot geolocation fix. Failure is logged and leaves the
    /// previous fix (possibly none) in place — a stale fix is valid data.
    pub fn request_location(&mut self, source: &mut dyn LocationSource) {
        match source.request_fix() {
            Ok(fix) => {
                tracing::info!(
                    source = %source.name(),
                    latitude = fix.latitude,
                    longitude = fix.longitude,
                    "Geolocation fix acquired"
                );
                self.geo = Some(fix);
            }
            Err(e) => {
                tracing::warn!(source = %source.name(), error = %e, "Geolocation unavailable");
            }
        }
    }

    /// Update the screen rotation offset (reported by the UI layer).
    pub fn set_orientation_offset(&mut self, offset: OrientationOffset) {
        self.orientation_offset = offset;
    }

    /// Set the preview zoom, clamped into `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The display transform for the live preview element. Capture ignores
    /// this entirely: frames are always grabbed at native resolution.
    pub fn preview_transform(&self) -> PreviewTransform {
        PreviewTransform { scale: self.zoom }
    }

    /// Snapshot the current sensor state.
    pub fn snapshot(&self) -> SensorSnapshot {
        SensorSnapshot {
            heading: self.heading.latest(),
            orientation: self.orientation_offset,
            geo: self.geo.clone(),
        }
    }

    /// Capture: grab the latest native-resolution frame, snapshot the
    /// sensors, and run the compositor to completion synchronously.
    pub fn capture(&mut self) -> BearingResult<CompositeImage> {
        if self.state != SessionState::Live {
            return Err(BearingError::capture("Session not live"));
        }

        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| BearingError::capture("No video stream (degraded mode)"))?;

        let frame = stream.latest_frame()?;
        let snapshot = self.snapshot();
        compose_capture(&frame, &snapshot, &self.config.layout, &self.assets)
    }

    /// Stop the session: halt the tracker and release the stream.
    pub async fn stop(&mut self) -> BearingResult<()> {
        if self.state != SessionState::Live {
            return Err(BearingError::capture("Session not live"));
        }

        tracing::info!("Stopping capture session");

        if let Some(ref stop) = self.tracker_stop {
            stop.store(true, Ordering::SeqCst);
        }
        if let Some(handle) = self.tracker_task.take() {
            match handle.await {
                Ok(Ok(samples)) => tracing::info!(samples, "Orientation tracker flushed"),
                Ok(Err(e)) => tracing::warn!(error = %e, "Orientation tracker exited with error"),
                Err(e) => tracing::warn!(error = %e, "Orientation tracker join failed"),
            }
        }

        if let Some(mut stream) = self.stream.take() {
            stream.release();
            tracing::info!("Video stream released");
        }

        self.state = SessionState::Stopped;
        Ok(())
    }

    fn release_resources(&mut self) {
        if let Some(ref stop) = self.tracker_stop {
            stop.store(true, Ordering::SeqCst);
        }
        if let Some(mut stream) = self.stream.take() {
            stream.release();
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        // Teardown must release the camera on every exit path
        if self.state == SessionState::Live {
            tracing::warn!("Capture session dropped while live; releasing resources");
            self.release_resources();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{synthetic_pattern, DeniedCamera, ScriptedOrientation, SyntheticCamera};
    use bearingcam_render::CaptureFrame;

    fn scripted() -> Box<ScriptedOrientation> {
        Box::new(ScriptedOrientation::new(vec![90.0]))
    }

    /// Camera whose stream records `release()` on a shared flag, so tests
    /// can observe teardown after the session itself is gone.
    struct RecordingCamera {
        released: Arc<AtomicBool>,
    }

    struct RecordingStream {
        released: Arc<AtomicBool>,
    }

    impl CameraSource for RecordingCamera {
        fn request_stream(&mut self, _facing: Facing) -> BearingResult<Box<dyn VideoStream>> {
            Ok(Box::new(RecordingStream {
                released: self.released.clone(),
            }))
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    impl VideoStream for RecordingStream {
        fn dimensions(&self) -> (u32, u32) {
            (64, 64)
        }

        fn latest_frame(&mut self) -> BearingResult<CaptureFrame> {
            Ok(CaptureFrame::new(synthetic_pattern(64, 64)))
        }

        fn release(&mut self) {
            self.released.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_start_capture_stop() {
        let mut session = CaptureSession::new(SessionConfig::default(), OverlayAssets::without_font());
        let mut camera = SyntheticCamera::new(640, 480);
        session.start(&mut camera, scripted()).unwrap();
        assert_eq!(session.state(), SessionState::Live);
        assert!(session.has_video());

        let composite = session.capture().unwrap();
        assert_eq!((composite.width(), composite.height()), (640, 480));

        session.stop().await.unwrap();
        assert_eq!(session.state(), SessionState::Stopped);
        assert!(session.capture().is_err());
    }

    #[tokio::test]
    async fn test_double_start_rejected() {
        let mut session = CaptureSession::new(SessionConfig::default(), OverlayAssets::without_font());
        let mut camera = SyntheticCamera::new(64, 64);
        session.start(&mut camera, scripted()).unwrap();
        assert!(session.start(&mut camera, scripted()).is_err());
        session.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_denied_camera_degrades() {
        let mut session = CaptureSession::new(SessionConfig::default(), OverlayAssets::without_font());
        session.start(&mut DeniedCamera, scripted()).unwrap();
        assert_eq!(session.state(), SessionState::Live);
        assert!(!session.has_video());
        assert!(session.capture().is_err());
        session.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_capture_before_video_ready_is_invalid_frame() {
        let mut session = CaptureSession::new(SessionConfig::default(), OverlayAssets::without_font());
        let mut camera = SyntheticCamera::new(0, 0);
        session.start(&mut camera, scripted()).unwrap();
        let result = session.capture();
        assert!(matches!(result, Err(BearingError::InvalidFrame { .. })));
        session.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_drop_while_live_releases_stream() {
        let released = Arc::new(AtomicBool::new(false));
        let mut camera = RecordingCamera {
            released: released.clone(),
        };
        {
            let mut session =
                CaptureSession::new(SessionConfig::default(), OverlayAssets::without_font());
            session.start(&mut camera, scripted()).unwrap();
            assert!(session.has_video());
            assert!(!released.load(Ordering::SeqCst));
        }
        assert!(released.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_stop_releases_stream() {
        let released = Arc::new(AtomicBool::new(false));
        let mut camera = RecordingCamera {
            released: released.clone(),
        };
        let mut session =
            CaptureSession::new(SessionConfig::default(), OverlayAssets::without_font());
        session.start(&mut camera, scripted()).unwrap();
        session.stop().await.unwrap();
        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn test_zoom_clamped() {
        let mut session = CaptureSession::new(SessionConfig::default(), OverlayAssets::without_font());
        session.set_zoom(0.2);
        assert_eq!(session.zoom(), MIN_ZOOM);
        session.set_zoom(9.0);
        assert_eq!(session.zoom(), MAX_ZOOM);
        session.set_zoom(2.5);
        assert_eq!(session.zoom(), 2.5);
    }

    #[test]
    fn test_preview_transform_string() {
        let mut session = CaptureSession::new(SessionConfig::default(), OverlayAssets::without_font());
        session.set_zoom(2.0);
        assert_eq!(session.preview_transform().css_transform(), "scale(2.0000, 2.0000)");
    }
}
