//! Overlay planning: per-capture composition instructions.
//!
//! `plan_overlay` computes everything about a composite except the pixels:
//! anchor placement, arrow rotation, and which text lines appear. The
//! rasterizer executes the plan verbatim, so properties like "no location
//! line without a geo fix" hold for the exported artifact by construction.

use bearingcam_common::error::{BearingError, BearingResult};
use bearingcam_sensor_model::SensorSnapshot;

use crate::layout::{arrow_rotation_degrees, OverlayLayout};

/// A single capture's composition instructions.
#[derive(Debug, Clone)]
pub struct OverlayPlan {
    /// Frame (and therefore composite) width in pixels.
    pub frame_width: u32,

    /// Frame (and therefore composite) height in pixels.
    pub frame_height: u32,

    /// Center of the compass face in frame coordinates.
    pub compass_center: (i64, i64),

    /// Compass diameter in pixels.
    pub compass_diameter: u32,

    /// Arrow rotation in degrees, `[0, 360)`, clockwise from the asset's
    /// biased "up".
    pub arrow_rotation_degrees: f64,

    /// Text height in pixels.
    pub text_px: u32,

    /// Text lines, top to bottom. Absent sensor data contributes no line —
    /// never a placeholder.
    pub text_lines: Vec<TextLine>,
}

/// One rasterized text line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub role: TextRole,
    pub content: String,
    /// Horizontal center in frame coordinates.
    pub center_x: i32,
    /// Top edge of the glyph box in frame coordinates.
    pub top_y: i32,
}

/// What a text line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Heading,
    Location,
}

/// Compute the composition instructions for one capture.
///
/// Fails with [`BearingError::InvalidFrame`] when either frame dimension is
/// zero (the video element before its first frame); callers must not export
/// in that case.
pub fn plan_overlay(
    frame_width: u32,
    frame_height: u32,
    snapshot: &SensorSnapshot,
    layout: &OverlayLayout,
) -> BearingResult<OverlayPlan> {
    if frame_width == 0 || frame_height == 0 {
        return Err(BearingError::InvalidFrame {
            width: frame_width,
            height: frame_height,
        });
    }

    let shorter = frame_width.min(frame_height);
    let diameter = layout.compass_diameter(shorter);
    let (cx, cy) = layout.anchor_point(frame_width, frame_height, diameter);

    // Heading unavailable: arrow stays at the asset's fixed "up" (bias only)
    let rotation = match snapshot.heading {
        Some(heading) => arrow_rotation_degrees(heading, snapshot.orientation, layout.arrow_bias_degrees),
        None => layout.arrow_bias_degrees.rem_euclid(360.0),
    };

    let text_px = ((shorter as f64 * layout.text_scale).round() as u32).max(8);

    let mut contents = Vec::new();
    if let Some(heading) = snapshot.heading {
        contents.push((
            TextRole::Heading,
            format!(
                "Heading: {}\u{b0} {}",
                heading.rounded_degrees(),
                heading.cardinal()
            ),
        ));
    }
    if let Some(ref geo) = snapshot.geo {
        contents.push((
            TextRole::Location,
            geo.display_line(layout.geo_decimal_places),
        ));
    }

    // Stack lines upward from just above the compass face
    let line_height = (text_px as f64 * 1.35).round() as i64;
    let gap = (text_px / 2) as i64;
    let compass_top = cy - diameter as i64 / 2;
    let block_top = compass_top - gap - line_height * contents.len() as i64;

    let text_lines = contents
        .into_iter()
        .enumerate()
        .map(|(i, (role, content))| TextLine {
            role,
            content,
            center_x: cx as i32,
            top_y: (block_top + line_height * i as i64) as i32,
        })
        .collect();

    Ok(OverlayPlan {
        frame_width,
        frame_height,
        compass_center: (cx, cy),
        compass_diameter: diameter,
        arrow_rotation_degrees: rotation,
        text_px,
        text_lines,
    })
}

impl OverlayPlan {
    /// Whether the plan contains a line with the given role.
    pub fn has_line(&self, role: TextRole) -> bool {
        self.text_lines.iter().any(|line| line.role == role)
    }
}
