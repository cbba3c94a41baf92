//! Screen orientation offsets.

use serde::{Deserialize, Serialize};

use crate::heading::HeadingSample;

/// The screen's rotation relative to the device's natural orientation.
///
/// Used to keep overlays visually correct as the device is rotated in hand:
/// the arrow rotation subtracts this offset so the arrow keeps pointing at
/// the true heading regardless of how the device is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrientationOffset {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl OrientationOffset {
    /// The offset in degrees.
    pub fn degrees(&self) -> f64 {
        match self {
            OrientationOffset::Deg0 => 0.0,
            OrientationOffset::Deg90 => 90.0,
            OrientationOffset::Deg180 => 180.0,
            OrientationOffset::Deg270 => 270.0,
        }
    }

    /// Snap an arbitrary reported screen angle to the nearest quarter turn.
    ///
    /// Platforms report the angle as one of {0, 90, 180, 270} (sometimes
    /// -90 for 270); anything else is snapped after normalization.
    pub fn from_degrees(raw: f64) -> Self {
        let wrapped = HeadingSample::normalize(raw).degrees();
        let quarter = ((wrapped / 90.0).round() as u32) % 4;
        match quarter {
            0 => OrientationOffset::Deg0,
            1 => OrientationOffset::Deg90,
            2 => OrientationOffset::Deg180,
            _ => OrientationOffset::Deg270,
        }
    }
}
