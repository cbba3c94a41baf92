//! Compass headings and cardinal directions.
//!
//! All headings are degrees normalized to `[0.0, 360.0)`. Raw sensor
//! readings may be negative or >= 360 and are wrapped on construction;
//! `HeadingSample` cannot be built any other way.

use serde::{Deserialize, Serialize};

/// A normalized compass heading in degrees.
///
/// Invariant: the wrapped value is always in `[0.0, 360.0)`. Zero is the
/// sensor's reference direction (not necessarily true north, depending on
/// calibration). Non-finite readings are a source bug — sources must report
/// "heading unavailable" (`Option::None`) instead of passing NaN/Infinity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadingSample(f64);

impl HeadingSample {
    /// Wrap a raw degree reading into `[0.0, 360.0)`.
    ///
    /// Handles negative input correctly: `-90` becomes `270`.
    pub fn normalize(raw: f64) -> Self {
        let wrapped = raw.rem_euclid(360.0);
        // rem_euclid of a tiny negative can round up to exactly 360.0
        Self(if wrapped >= 360.0 { 0.0 } else { wrapped })
    }

    /// The heading in degrees, `[0.0, 360.0)`.
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// The heading rounded to the nearest whole degree, for display.
    /// `359.6` rounds through `360` back to `0`.
    pub fn rounded_degrees(&self) -> u32 {
        (self.0.round() as u32) % 360
    }

    /// The cardinal sector this heading falls in.
    pub fn cardinal(&self) -> CardinalDirection {
        CardinalDirection::from_heading(*self)
    }
}

/// One of the eight principal compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CardinalDirection {
    const SECTORS: [CardinalDirection; 8] = [
        CardinalDirection::N,
        CardinalDirection::NE,
        CardinalDirection::E,
        CardinalDirection::SE,
        CardinalDirection::S,
        CardinalDirection::SW,
        CardinalDirection::W,
        CardinalDirection::NW,
    ];

    /// Classify a heading into one of eight 45-degree sectors centered on
    /// each compass point (`round(heading / 45) mod 8`). An exact sector
    /// boundary (22.5 + k*45) rounds to the next sector clockwise.
    pub fn from_heading(heading: HeadingSample) -> Self {
        let sector = (heading.degrees() / 45.0).round() as usize % 8;
        Self::SECTORS[sector]
    }

    /// Short label for overlay text ("N", "NE", ...).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            CardinalDirection::N => "N",
            CardinalDirection::NE => "NE",
            CardinalDirection::E => "E",
            CardinalDirection::SE => "SE",
            CardinalDirection::S => "S",
            CardinalDirection::SW => "SW",
            CardinalDirection::W => "W",
            CardinalDirection::NW => "NW",
        }
    }
}

impl std::fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(HeadingSample::normalize(0.0).degrees(), 0.0);
        assert_eq!(HeadingSample::normalize(180.0).degrees(), 180.0);
        assert_eq!(HeadingSample::normalize(359.9).degrees(), 359.9);
    }

    #[test]
    fn test_normalize_wraps_negative() {
        assert_eq!(HeadingSample::normalize(-90.0).degrees(), 270.0);
        assert_eq!(HeadingSample::normalize(-360.0).degrees(), 0.0);
        assert_eq!(HeadingSample::normalize(-720.0).degrees(), 0.0);
    }

    #[test]
    fn test_normalize_wraps_overflow() {
        assert_eq!(HeadingSample::normalize(360.0).degrees(), 0.0);
        assert_eq!(HeadingSample::normalize(450.0).degrees(), 90.0);
        assert_eq!(HeadingSample::normalize(1080.5).degrees(), 0.5);
    }

    #[test]
    fn test_cardinal_fixed_points() {
        assert_eq!(HeadingSample::normalize(0.0).cardinal(), CardinalDirection::N);
        assert_eq!(HeadingSample::normalize(45.0).cardinal(), CardinalDirection::NE);
        assert_eq!(HeadingSample::normalize(90.0).cardinal(), CardinalDirection::E);
        assert_eq!(HeadingSample::normalize(180.0).cardinal(), CardinalDirection::S);
        assert_eq!(HeadingSample::normalize(270.0).cardinal(), CardinalDirection::W);
        assert_eq!(HeadingSample::normalize(359.0).cardinal(), CardinalDirection::N);
    }

    #[test]
    fn test_cardinal_boundary_rounds_clockwise() {
        // Boundaries sit at 22.5 + k*45 and belong to the next sector
        assert_eq!(HeadingSample::normalize(22.5).cardinal(), CardinalDirection::NE);
        assert_eq!(HeadingSample::normalize(67.5).cardinal(), CardinalDirection::E);
        assert_eq!(HeadingSample::normalize(337.5).cardinal(), CardinalDirection::N);
        // Just below a boundary stays in the previous sector
        assert_eq!(HeadingSample::normalize(22.4).cardinal(), CardinalDirection::N);
    }

    #[test]
    fn test_rounded_degrees_wraps_at_360() {
        assert_eq!(HeadingSample::normalize(359.6).rounded_degrees(), 0);
        assert_eq!(HeadingSample::normalize(89.5).rounded_degrees(), 90);
    }

    proptest! {
        #[test]
        fn prop_normalized_in_range(raw in -1e6f64..1e6f64) {
            let h = HeadingSample::normalize(raw).degrees();
            prop_assert!((0.0..360.0).contains(&h));
        }

        #[test]
        fn prop_normalize_is_idempotent(raw in -1e6f64..1e6f64) {
            let once = HeadingSample::normalize(raw);
            let twice = HeadingSample::normalize(once.degrees());
            prop_assert_eq!(once, twice);
        }
    }
}
