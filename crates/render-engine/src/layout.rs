//! Overlay layout configuration and rotation math.

use bearingcam_common::config::OverlayDefaults;
use bearingcam_sensor_model::{HeadingSample, OrientationOffset};
use serde::{Deserialize, Serialize};

/// Where the compass graphic is anchored on the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorMode {
    /// Compass centered on the frame.
    #[default]
    Center,
    /// Compass at the bottom-center, clear of the subject.
    BottomCenter,
}

/// Configuration for the overlay compositor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayLayout {
    /// Compass anchor position.
    pub anchor: AnchorMode,

    /// Compass diameter as a fraction of the shorter frame dimension.
    pub compass_scale: f64,

    /// Fixed rotation (degrees) added to the arrow so the asset's native
    /// "up" direction maps to heading 0. This is a per-asset constant: the
    /// built-in arrow points up and uses 0; art drawn pointing right would
    /// use 90. Never derived at runtime.
    pub arrow_bias_degrees: f64,

    /// Decimal places for latitude/longitude text.
    pub geo_decimal_places: usize,

    /// Text height as a fraction of the shorter frame dimension.
    pub text_scale: f64,

    /// Text fill color (RGBA).
    pub fill_color: [u8; 4],

    /// Text outline color (RGBA), stroked behind the fill for legibility
    /// against arbitrary backgrounds.
    pub outline_color: [u8; 4],
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            anchor: AnchorMode::Center,
            compass_scale: 0.30,
            arrow_bias_degrees: 0.0,
            geo_decimal_places: 5,
            text_scale: 0.045,
            fill_color: [255, 255, 255, 255],
            outline_color: [0, 0, 0, 255],
        }
    }
}

impl OverlayLayout {
    /// Build a layout from the persisted configuration defaults.
    pub fn from_defaults(defaults: &OverlayDefaults) -> Self {
        Self {
            compass_scale: defaults.compass_scale,
            arrow_bias_degrees: defaults.arrow_bias_degrees,
            geo_decimal_places: defaults.geo_decimal_places,
            ..Self::default()
        }
    }

    /// Compass diameter in pixels for a frame with the given shorter
    /// dimension. Clamped to at least 2px so degenerate scales still
    /// produce drawable art.
    pub fn compass_diameter(&self, shorter_dimension: u32) -> u32 {
        ((shorter_dimension as f64 * self.compass_scale).round() as u32).max(2)
    }

    /// Anchor point (center of the compass) in frame pixel coordinates.
    pub fn anchor_point(&self, width: u32, height: u32, diameter: u32) -> (i64, i64) {
        let cx = width as i64 / 2;
        match self.anchor {
            AnchorMode::Center => (cx, height as i64 / 2),
            AnchorMode::BottomCenter => {
                // Sit the compass just above the bottom edge
                let margin = (diameter as i64) / 4;
                (cx, height as i64 - diameter as i64 / 2 - margin)
            }
        }
    }
}

/// The angle (degrees, `[0, 360)`) to rotate the arrow graphic so it points
/// toward the heading regardless of how the device is rotated in hand:
/// `(heading - orientation_offset + bias + 360) % 360`.
pub fn arrow_rotation_degrees(
    heading: HeadingSample,
    orientation: OrientationOffset,
    bias_degrees: f64,
) -> f64 {
    (heading.degrees() - orientation.degrees() + bias_degrees).rem_euclid(360.0)
}
