//! Check font availability and configuration.

use bearingcam_common::config::{config_file_path, AppConfig};
use bearingcam_render::OverlayAssets;

pub fn run() -> anyhow::Result<()> {
    println!("BearingCam Environment Check");
    println!("{}", "=".repeat(50));

    let config_path = config_file_path();
    if config_path.exists() {
        println!("[OK] Config file: {}", config_path.display());
    } else {
        println!(
            "[WARN] Config file not found, using defaults ({})",
            config_path.display()
        );
    }

    let config = AppConfig::load();
    println!("[OK] Exports directory: {}", config.exports_dir.display());
    println!(
        "     Overlay: compass {:.0}% of shorter dimension, arrow bias {}\u{b0}, JPEG q{}",
        config.overlay.compass_scale * 100.0,
        config.overlay.arrow_bias_degrees,
        config.overlay.jpeg_quality
    );

    let assets = OverlayAssets::load(&config.overlay);
    if assets.has_font() {
        println!("[OK] Overlay font available; text will be composited");
    } else {
        println!("[WARN] No overlay font found; composites will omit text lines");
        println!("       Set overlay.font_path in the config to a TTF/OTF file");
    }

    println!();
    println!("Ready. Try: bearingcam compose --heading 45 --lat 48.8584 --lon 2.2945");
    Ok(())
}
