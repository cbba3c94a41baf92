//! Plan execution: rasterizing overlays onto a captured frame.

use ab_glyph::PxScale;
use bearingcam_common::error::BearingResult;
use bearingcam_sensor_model::SensorSnapshot;
use image::imageops::{self, FilterType};
use image::Rgba;
use imageproc::drawing::{draw_text_mut, text_size};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

use crate::assets::OverlayAssets;
use crate::compositor::{plan_overlay, OverlayPlan};
use crate::frame::{CaptureFrame, CompositeImage};
use crate::layout::OverlayLayout;

/// Compose a capture: base frame, compass face, rotated arrow, text lines.
///
/// Pure with respect to its inputs — the frame is not mutated and the
/// output dimensions always equal the frame's native dimensions. Fails with
/// `InvalidFrame` (and produces no output) when the frame has a zero
/// dimension; runs to completion synchronously otherwise, since all assets
/// are preloaded.
pub fn compose_capture(
    frame: &CaptureFrame,
    snapshot: &SensorSnapshot,
    layout: &OverlayLayout,
    assets: &OverlayAssets,
) -> BearingResult<CompositeImage> {
    let plan = plan_overlay(frame.width(), frame.height(), snapshot, layout)?;
    Ok(render_plan(frame, &plan, layout, assets))
}

/// Execute a previously computed plan against a frame.
pub fn render_plan(
    frame: &CaptureFrame,
    plan: &OverlayPlan,
    layout: &OverlayLayout,
    assets: &OverlayAssets,
) -> CompositeImage {
    let mut canvas = frame.pixels().clone();

    let d = plan.compass_diameter;
    let (cx, cy) = plan.compass_center;
    let left = cx - d as i64 / 2;
    let top = cy - d as i64 / 2;

    let compass = imageops::resize(assets.compass(), d, d, FilterType::Triangle);
    imageops::overlay(&mut canvas, &compass, left, top);

    let arrow = imageops::resize(assets.arrow(), d, d, FilterType::Triangle);
    let theta = plan.arrow_rotation_degrees.to_radians() as f32;
    let rotated = rotate_about_center(&arrow, theta, Interpolation::Bilinear, Rgba([0, 0, 0, 0]));
    imageops::overlay(&mut canvas, &rotated, left, top);

    if !plan.text_lines.is_empty() {
        match assets.font() {
            Some(font) => {
                let scale = PxScale::from(plan.text_px as f32);
                let stroke = ((plan.text_px / 16).max(1)) as i32;
                for line in &plan.text_lines {
                    let (text_w, _) = text_size(scale, font, &line.content);
                    let x = line.center_x - text_w as i32 / 2;
                    let y = line.top_y;

                    // Stroked outline behind the fill, for legibility
                    let outline = Rgba(layout.outline_color);
                    for (dx, dy) in [
                        (-stroke, 0),
                        (stroke, 0),
                        (0, -stroke),
                        (0, stroke),
                        (-stroke, -stroke),
                        (-stroke, stroke),
                        (stroke, -stroke),
                        (stroke, stroke),
                    ] {
                        draw_text_mut(&mut canvas, outline, x + dx, y + dy, scale, font, &line.content);
                    }
                    draw_text_mut(
                        &mut canvas,
                        Rgba(layout.fill_color),
                        x,
                        y,
                        scale,
                        font,
                        &line.content,
                    );
                }
            }
            None => {
                tracing::warn!(
                    lines = plan.text_lines.len(),
                    "No overlay font loaded; omitting text lines from composite"
                );
            }
        }
    }

    CompositeImage::new(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bearingcam_common::error::BearingError;
    use bearingcam_sensor_model::HeadingSample;
    use image::RgbaImage;

    fn green_frame(width: u32, height: u32) -> CaptureFrame {
        CaptureFrame::new(RgbaImage::from_pixel(
            width,
            height,
            Rgba([10, 200, 10, 255]),
        ))
    }

    fn snapshot(heading: f64) -> SensorSnapshot {
        SensorSnapshot::with_heading(HeadingSample::normalize(heading))
    }

    #[test]
    fn test_composite_keeps_frame_dimensions() {
        let frame = green_frame(640, 480);
        let composite = compose_capture(
            &frame,
            &snapshot(45.0),
            &OverlayLayout::default(),
            &OverlayAssets::without_font(),
        )
        .unwrap();
        assert_eq!(composite.width(), 640);
        assert_eq!(composite.height(), 480);
    }

    #[test]
    fn test_zero_dimension_frame_fails() {
        let frame = CaptureFrame::new(RgbaImage::new(0, 480));
        let result = compose_capture(
            &frame,
            &snapshot(45.0),
            &OverlayLayout::default(),
            &OverlayAssets::without_font(),
        );
        assert!(matches!(result, Err(BearingError::InvalidFrame { .. })));
    }

    #[test]
    fn test_base_pixels_outside_overlay_unchanged() {
        let frame = green_frame(640, 480);
        let composite = compose_capture(
            &frame,
            &snapshot(0.0),
            &OverlayLayout::default(),
            &OverlayAssets::without_font(),
        )
        .unwrap();
        // Compass is 30% of 480 centered; the corners are untouched
        assert_eq!(composite.pixels().get_pixel(1, 1).0, [10, 200, 10, 255]);
        assert_eq!(
            composite.pixels().get_pixel(638, 478).0,
            [10, 200, 10, 255]
        );
    }

    #[test]
    fn test_compass_region_is_composited() {
        let frame = green_frame(640, 480);
        let composite = compose_capture(
            &frame,
            &snapshot(0.0),
            &OverlayLayout::default(),
            &OverlayAssets::without_font(),
        )
        .unwrap();
        // Translucent disc blends over the base at the anchor
        let center = composite.pixels().get_pixel(320, 240);
        assert_ne!(center.0, [10, 200, 10, 255]);
    }

    #[test]
    fn test_frame_is_not_mutated() {
        let frame = green_frame(320, 240);
        let before = frame.pixels().clone();
        let _ = compose_capture(
            &frame,
            &snapshot(200.0),
            &OverlayLayout::default(),
            &OverlayAssets::without_font(),
        )
        .unwrap();
        assert_eq!(frame.pixels(), &before);
    }

    #[test]
    fn test_rotation_changes_arrow_pixels() {
        let frame = green_frame(640, 480);
        let layout = OverlayLayout::default();
        let assets = OverlayAssets::without_font();
        let up = compose_capture(&frame, &snapshot(0.0), &layout, &assets).unwrap();
        let east = compose_capture(&frame, &snapshot(90.0), &layout, &assets).unwrap();
        assert_ne!(up.pixels(), east.pixels());
    }
}
