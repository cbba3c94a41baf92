//! Print CSS-style preview transforms across the zoom range.

use bearingcam_capture::session::{PreviewTransform, MAX_ZOOM, MIN_ZOOM};

pub fn run(steps: usize) -> anyhow::Result<()> {
    let steps = steps.max(2);

    println!("Preview zoom sweep ({MIN_ZOOM}x to {MAX_ZOOM}x, {steps} steps)");
    println!("Zoom is display-only; captures stay at native resolution.");
    println!();

    for i in 0..steps {
        let t = i as f64 / (steps - 1) as f64;
        let zoom = MIN_ZOOM + t * (MAX_ZOOM - MIN_ZOOM);
        let transform = PreviewTransform { scale: zoom };
        println!("  {:>5.2}x  {}", zoom, transform.css_transform());
    }

    Ok(())
}
