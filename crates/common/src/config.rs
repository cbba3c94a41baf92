//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory where exported composites are written.
    pub exports_dir: PathBuf,

    /// Default overlay settings.
    pub overlay: OverlayDefaults,

    /// Default capture settings.
    pub capture: CaptureDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default overlay parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayDefaults {
    /// Compass diameter as a fraction of the shorter frame dimension.
    pub compass_scale: f64,

    /// Fixed rotation added to the arrow so that the asset's native "up"
    /// maps to heading 0. A per-asset constant, not a runtime value.
    pub arrow_bias_degrees: f64,

    /// Decimal places for latitude/longitude text.
    pub geo_decimal_places: usize,

    /// JPEG quality for exported composites (1-100).
    pub jpeg_quality: u8,

    /// Optional TTF/OTF font file for overlay text. When absent, common
    /// system font locations are probed; text is omitted if none is found.
    pub font_path: Option<PathBuf>,
}

/// Default capture parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureDefaults {
    /// Preferred camera facing ("environment" or "user").
    pub facing: String,

    /// Initial preview zoom factor.
    pub zoom: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "bearingcam=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            exports_dir: dirs_default_exports(),
            overlay: OverlayDefaults::default(),
            capture: CaptureDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for OverlayDefaults {
    fn default() -> Self {
        Self {
            compass_scale: 0.30,
            arrow_bias_degrees: 0.0,
            geo_decimal_places: 5,
            jpeg_quality: 80,
            font_path: None,
        }
    }
}

impl Default for CaptureDefaults {
    fn default() -> Self {
        Self {
            facing: "environment".to_string(),
            zoom: 1.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("bearingcam").join("config.json")
}

/// Default exports directory.
fn dirs_default_exports() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("bearingcam").join("exports")
}
