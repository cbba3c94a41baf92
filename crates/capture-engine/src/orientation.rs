//! Orientation tracking: sensor events into the heading cell.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bearingcam_common::error::BearingResult;
use bearingcam_sensor_model::HeadingWriter;

use crate::sources::OrientationSource;

/// Pumps an orientation source into a last-write-wins heading cell.
///
/// Each reading atomically overwrites the previous one; there is no queue
/// and no backpressure, since only the latest value matters for display
/// and capture.
pub struct OrientationTracker {
    source: Box<dyn OrientationSource>,
    writer: HeadingWriter,
    stop_flag: Arc<AtomicBool>,
    samples_published: u64,
}

impl OrientationTracker {
    pub fn new(source: Box<dyn OrientationSource>, writer: HeadingWriter) -> Self {
        Self {
            source,
            writer,
            stop_flag: Arc::new(AtomicBool::new(false)),
            samples_published: 0,
        }
    }

    /// Run the tracking loop until the stop flag is set.
    ///
    /// An unavailable sensor is non-fatal: the cell is marked unavailable
    /// and the tracker exits cleanly, leaving the arrow at its fixed "up".
    pub async fn run(&mut self) -> BearingResult<u64> {
        if !self.source.is_available() {
            tracing::warn!(
                source = %self.source.name(),
                "Orientation sensor unavailable; heading will not be shown"
            );
            self.writer.mark_unavailable();
            return Ok(0);
        }

        tracing::info!(source = %self.source.name(), "Orientation tracker started");

        while !self.stop_flag.load(Ordering::Relaxed) {
            match self.source.poll() {
                Ok(Some(raw)) => {
                    self.writer.publish_raw(raw);
                    self.samples_published += 1;
                }
                Ok(None) => {
                    // No event available, yield briefly
                    tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Orientation sensor error");
                    // Back off like the no-event case so a persistently
                    // failing sensor cannot spin the task or starve the
                    // runtime.
                    tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
                }
            }
        }

        tracing::info!(
            samples = self.samples_published,
            "Orientation tracker stopped"
        );
        Ok(self.samples_published)
    }

    /// Set the stop flag.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Get the stop flag for external coordination.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Number of samples published so far.
    pub fn samples_published(&self) -> u64 {
        self.samples_published
    }
}
