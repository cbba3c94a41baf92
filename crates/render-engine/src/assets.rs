//! Overlay asset preload.
//!
//! All overlay art and the label font are loaded eagerly, once, before any
//! capture can happen — composition must never suspend waiting on a decode
//! at the time-sensitive moment of capture. The compass face and arrow are
//! drawn procedurally at a fixed base size and rescaled per frame.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use bearingcam_common::config::OverlayDefaults;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;

/// Base raster size for procedural art; rescaled per frame.
const ART_SIZE: u32 = 512;

/// Font locations probed when no font path is configured.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
];

/// Preloaded overlay assets: compass face, arrow, and label font.
pub struct OverlayAssets {
    compass: RgbaImage,
    arrow: RgbaImage,
    font: Option<FontVec>,
}

impl OverlayAssets {
    /// Rotation bias of the built-in arrow art. The arrow is drawn pointing
    /// up, so its bias is 0; see `OverlayLayout::arrow_bias_degrees`.
    pub const BUILTIN_ARROW_BIAS_DEGREES: f64 = 0.0;

    /// Load assets per the configured defaults. Art is procedural; the font
    /// comes from the configured path or common system locations. A missing
    /// font degrades text rendering (omitted, logged), it does not fail the
    /// load.
    pub fn load(defaults: &OverlayDefaults) -> Self {
        let font = match load_font(defaults.font_path.as_deref()) {
            Some((font, path)) => {
                tracing::info!(font = %path.display(), "Overlay font loaded");
                Some(font)
            }
            None => {
                tracing::warn!("No overlay font found; composited text will be omitted");
                None
            }
        };

        Self {
            compass: draw_compass_face(ART_SIZE),
            arrow: draw_arrow(ART_SIZE),
            font,
        }
    }

    /// Assets with no font, for headless tests.
    pub fn without_font() -> Self {
        Self {
            compass: draw_compass_face(ART_SIZE),
            arrow: draw_arrow(ART_SIZE),
            font: None,
        }
    }

    pub fn compass(&self) -> &RgbaImage {
        &self.compass
    }

    pub fn arrow(&self) -> &RgbaImage {
        &self.arrow
    }

    pub fn font(&self) -> Option<&FontVec> {
        self.font.as_ref()
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }
}

fn load_font(configured: Option<&Path>) -> Option<(FontVec, PathBuf)> {
    let candidates: Vec<PathBuf> = configured
        .map(|p| vec![p.to_path_buf()])
        .unwrap_or_else(|| FONT_CANDIDATES.iter().map(PathBuf::from).collect());

    for path in candidates {
        match std::fs::read(&path) {
            Ok(bytes) => match FontVec::try_from_vec(bytes) {
                Ok(font) => return Some((font, path)),
                Err(e) => {
                    tracing::warn!(font = %path.display(), error = %e, "Invalid font file");
                }
            },
            Err(_) => continue,
        }
    }
    None
}

/// Compass face: translucent dark disc, outer ring, tick marks every 45
/// degrees (longer at the cardinals).
fn draw_compass_face(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let center = (size as i32 / 2, size as i32 / 2);
    let radius = size as i32 / 2 - 2;

    draw_filled_circle_mut(&mut img, center, radius, Rgba([20, 20, 30, 140]));
    for ring in 0..3 {
        draw_hollow_circle_mut(&mut img, center, radius - ring, Rgba([240, 240, 240, 255]));
    }

    let cx = center.0 as f32;
    let cy = center.1 as f32;
    for i in 0..8 {
        let angle = (i as f32) * 45.0f32.to_radians();
        let is_cardinal = i % 2 == 0;
        let inner = if is_cardinal { 0.78 } else { 0.88 } * radius as f32;
        let outer = radius as f32 - 4.0;
        let (sin, cos) = angle.sin_cos();
        draw_line_segment_mut(
            &mut img,
            (cx + sin * inner, cy - cos * inner),
            (cx + sin * outer, cy - cos * outer),
            Rgba([240, 240, 240, 255]),
        );
    }

    // North marker: small triangle at the top of the ring
    let tip = radius as f32 * 0.70;
    let base = radius as f32 * 0.86;
    let half = size as f32 * 0.03;
    draw_polygon_mut(
        &mut img,
        &[
            Point::new(cx as i32, (cy - tip) as i32),
            Point::new((cx - half) as i32, (cy - base) as i32),
            Point::new((cx + half) as i32, (cy - base) as i32),
        ],
        Rgba([220, 60, 50, 255]),
    );

    img
}

/// Direction arrow, drawn pointing up (native "up" = heading 0; bias 0).
fn draw_arrow(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let cx = size as f32 / 2.0;
    let cy = size as f32 / 2.0;
    let head_tip = size as f32 * 0.12;
    let head_base = size as f32 * 0.40;
    let head_half = size as f32 * 0.14;
    let shaft_half = size as f32 * 0.05;
    let tail = size as f32 * 0.80;

    // Head
    draw_polygon_mut(
        &mut img,
        &[
            Point::new(cx as i32, head_tip as i32),
            Point::new((cx - head_half) as i32, head_base as i32),
            Point::new((cx + head_half) as i32, head_base as i32),
        ],
        Rgba([220, 60, 50, 255]),
    );

    // Shaft
    draw_polygon_mut(
        &mut img,
        &[
            Point::new((cx - shaft_half) as i32, head_base as i32),
            Point::new((cx + shaft_half) as i32, head_base as i32),
            Point::new((cx + shaft_half) as i32, tail as i32),
            Point::new((cx - shaft_half) as i32, tail as i32),
        ],
        Rgba([240, 240, 240, 255]),
    );

    // Pivot dot
    draw_filled_circle_mut(
        &mut img,
        (cx as i32, cy as i32),
        (size / 40) as i32,
        Rgba([240, 240, 240, 255]),
    );

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_dimensions() {
        let assets = OverlayAssets::without_font();
        assert_eq!(assets.compass().dimensions(), (ART_SIZE, ART_SIZE));
        assert_eq!(assets.arrow().dimensions(), (ART_SIZE, ART_SIZE));
    }

    #[test]
    fn test_arrow_points_up() {
        // The head tip region is opaque near the top, transparent near the bottom
        let assets = OverlayAssets::without_font();
        let arrow = assets.arrow();
        let top = arrow.get_pixel(ART_SIZE / 2, (ART_SIZE as f32 * 0.15) as u32);
        let bottom = arrow.get_pixel(ART_SIZE / 2, ART_SIZE - 10);
        assert!(top.0[3] > 0);
        assert_eq!(bottom.0[3], 0);
    }

    #[test]
    fn test_compass_face_has_translucent_disc() {
        let assets = OverlayAssets::without_font();
        let center = assets.compass().get_pixel(ART_SIZE / 2, ART_SIZE / 2);
        assert!(center.0[3] > 0 && center.0[3] < 255);
    }

    #[test]
    fn test_corner_of_art_is_transparent() {
        let assets = OverlayAssets::without_font();
        assert_eq!(assets.compass().get_pixel(0, 0).0[3], 0);
        assert_eq!(assets.arrow().get_pixel(0, 0).0[3], 0);
    }
}
