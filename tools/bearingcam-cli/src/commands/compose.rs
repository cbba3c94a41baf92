//! Composite a frame with compass, arrow, and text overlays.

use std::path::PathBuf;

use anyhow::Context;
use bearingcam_capture::sources::synthetic_pattern;
use bearingcam_render::export::save_jpeg;
use bearingcam_render::{
    compose_capture, AnchorMode, CaptureFrame, OverlayAssets, OverlayLayout,
};
use bearingcam_sensor_model::{GeoFix, HeadingSample, OrientationOffset, SensorSnapshot};

#[allow(clippy::too_many_arguments)]
pub fn run(
    input: Option<PathBuf>,
    synthetic: String,
    heading: Option<f64>,
    orientation: f64,
    geo: Option<(f64, f64)>,
    anchor: String,
    compass_scale: f64,
    arrow_bias: f64,
    quality: u8,
    output: PathBuf,
) -> anyhow::Result<()> {
    let frame = match input {
        Some(path) => {
            let decoded = image::open(&path)
                .with_context(|| format!("Failed to open input image {}", path.display()))?;
            CaptureFrame::new(decoded.to_rgba8())
        }
        None => {
            let (width, height) = parse_dimensions(&synthetic)?;
            CaptureFrame::new(synthetic_pattern(width, height))
        }
    };

    let anchor = match anchor.as_str() {
        "center" => AnchorMode::Center,
        "bottom" => AnchorMode::BottomCenter,
        other => anyhow::bail!("Unknown anchor '{other}' (expected 'center' or 'bottom')"),
    };

    let config = bearingcam_common::config::AppConfig::load();
    let layout = OverlayLayout {
        anchor,
        compass_scale,
        arrow_bias_degrees: arrow_bias,
        ..OverlayLayout::from_defaults(&config.overlay)
    };

    let mut snapshot = SensorSnapshot {
        heading: heading.filter(|h| h.is_finite()).map(HeadingSample::normalize),
        orientation: OrientationOffset::from_degrees(orientation),
        geo: None,
    };
    if let Some((lat, lon)) = geo {
        snapshot.geo = Some(GeoFix::new(lat, lon));
    }

    let assets = OverlayAssets::load(&config.overlay);
    let composite = compose_capture(&frame, &snapshot, &layout, &assets)
        .map_err(|e| anyhow::anyhow!("Composition failed: {e}"))?;

    let path = save_jpeg(&composite, &output, quality)
        .map_err(|e| anyhow::anyhow!("Export failed: {e}"))?;

    println!(
        "Composite written: {} ({}x{})",
        path.display(),
        composite.width(),
        composite.height()
    );
    Ok(())
}

fn parse_dimensions(raw: &str) -> anyhow::Result<(u32, u32)> {
    let (w, h) = raw
        .split_once('x')
        .with_context(|| format!("Invalid dimensions '{raw}' (expected WxH)"))?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("1280x720").unwrap(), (1280, 720));
        assert!(parse_dimensions("1280").is_err());
        assert!(parse_dimensions("ax720").is_err());
    }
}
