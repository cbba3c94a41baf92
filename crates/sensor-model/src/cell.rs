//! Latest-value cell for heading samples.
//!
//! Orientation events fire at sensor-driven intervals and only the newest
//! value matters for display and capture. The cell is last-write-wins: no
//! history, no queue, no backpressure. Built on `tokio::sync::watch` so a
//! tracker task can publish while any number of readers snapshot the value.

use tokio::sync::watch;

use crate::heading::HeadingSample;

/// Create a connected writer/reader pair, initially "unavailable".
pub fn heading_cell() -> (HeadingWriter, HeadingReader) {
    let (tx, rx) = watch::channel(None);
    (HeadingWriter { tx }, HeadingReader { rx })
}

/// The single producer side of the cell.
pub struct HeadingWriter {
    tx: watch::Sender<Option<HeadingSample>>,
}

impl HeadingWriter {
    /// Publish a raw sensor reading, overwriting the previous value.
    /// Non-finite readings are dropped (the cell keeps its last value).
    pub fn publish_raw(&self, raw: f64) {
        if !raw.is_finite() {
            return;
        }
        let _ = self.tx.send(Some(HeadingSample::normalize(raw)));
    }

    /// Mark the heading as unavailable (sensor lost or never present).
    pub fn mark_unavailable(&self) {
        let _ = self.tx.send(None);
    }
}

/// A reader handle; cheap to clone.
#[derive(Clone)]
pub struct HeadingReader {
    rx: watch::Receiver<Option<HeadingSample>>,
}

impl HeadingReader {
    /// Snapshot the latest value.
    pub fn latest(&self) -> Option<HeadingSample> {
        *self.rx.borrow()
    }
}
