//! Immutable per-capture sensor snapshots.

use serde::{Deserialize, Serialize};

use crate::geo::GeoFix;
use crate::heading::HeadingSample;
use crate::orientation::OrientationOffset;

/// The sensor state at the moment of a capture.
///
/// Sensor sources mutate their latest-value cells continuously; composition
/// never reads those cells directly. Instead the capture path takes one
/// snapshot and passes it by value, so the compositor stays pure and
/// testable with no ambient state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Latest heading, or `None` when the orientation sensor is unavailable.
    pub heading: Option<HeadingSample>,

    /// Current screen rotation offset.
    pub orientation: OrientationOffset,

    /// Latest geolocation fix, or `None` when no fix was obtained.
    pub geo: Option<GeoFix>,
}

impl SensorSnapshot {
    /// A snapshot with no sensor data at all (fully degraded mode).
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Snapshot with a heading only.
    pub fn with_heading(heading: HeadingSample) -> Self {
        Self {
            heading: Some(heading),
            ..Self::default()
        }
    }

    pub fn orientation(mut self, orientation: OrientationOffset) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn geo(mut self, geo: GeoFix) -> Self {
        self.geo = Some(geo);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_has_no_data() {
        let snapshot = SensorSnapshot::unavailable();
        assert!(snapshot.heading.is_none());
        assert!(snapshot.geo.is_none());
        assert_eq!(snapshot.orientation, OrientationOffset::Deg0);
    }

    #[test]
    fn test_builder_chain() {
        let snapshot = SensorSnapshot::with_heading(HeadingSample::normalize(90.0))
            .orientation(OrientationOffset::Deg90)
            .geo(GeoFix::at(1.0, 2.0, "2026-01-01T00:00:00Z".to_string()));
        assert_eq!(snapshot.heading.unwrap().degrees(), 90.0);
        assert_eq!(snapshot.orientation, OrientationOffset::Deg90);
        assert!(snapshot.geo.is_some());
    }
}
