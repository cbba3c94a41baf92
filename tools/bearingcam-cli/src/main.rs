//! BearingCam CLI — Compose compass overlays onto captured frames.
//!
//! Usage:
//!   bearingcam compose [OPTIONS]   Composite a frame with compass/geo overlay
//!   bearingcam preview [OPTIONS]   Print preview zoom transforms
//!   bearingcam check               Check fonts and configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "bearingcam",
    about = "Compass and location overlays for camera captures",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Composite a frame with compass, arrow, and text overlays
    Compose {
        /// Input image to use as the captured frame (synthetic pattern if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Synthetic frame dimensions, e.g. "1280x720"
        #[arg(long, default_value = "1280x720")]
        synthetic: String,

        /// Heading in degrees (omit to render without heading)
        #[arg(long)]
        heading: Option<f64>,

        /// Screen orientation offset in degrees {0, 90, 180, 270}
        #[arg(long, default_value = "0")]
        orientation: f64,

        /// Latitude in decimal degrees (requires --lon)
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Longitude in decimal degrees (requires --lat)
        #[arg(long, requires = "lat")]
        lon: Option<f64>,

        /// Compass anchor: "center" or "bottom"
        #[arg(long, default_value = "center")]
        anchor: String,

        /// Compass diameter as a fraction of the shorter frame dimension
        #[arg(long, default_value = "0.30")]
        compass_scale: f64,

        /// Fixed arrow rotation bias in degrees (per-asset constant)
        #[arg(long, default_value = "0.0")]
        arrow_bias: f64,

        /// JPEG quality (1-100)
        #[arg(long, default_value = "80")]
        quality: u8,

        /// Output file path
        #[arg(short, long, default_value = "composite.jpg")]
        output: PathBuf,
    },

    /// Print CSS-style preview transforms across the zoom range
    Preview {
        /// Number of steps in the zoom sweep
        #[arg(long, default_value = "9")]
        steps: usize,
    },

    /// Check font availability and configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    bearingcam_common::logging::init_logging(&bearingcam_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Compose {
            input,
            synthetic,
            heading,
            orientation,
            lat,
            lon,
            anchor,
            compass_scale,
            arrow_bias,
            quality,
            output,
        } => commands::compose::run(
            input,
            synthetic,
            heading,
            orientation,
            lat.zip(lon),
            anchor,
            compass_scale,
            arrow_bias,
            quality,
            output,
        ),
        Commands::Preview { steps } => commands::preview::run(steps),
        Commands::Check => commands::check::run(),
    }
}
