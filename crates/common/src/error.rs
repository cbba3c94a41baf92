//! Error types shared across BearingCam crates.

/// Top-level error type for BearingCam operations.
#[derive(Debug, thiserror::Error)]
pub enum BearingError {
    #[error("Capture error: {message}")]
    Capture { message: String },

    #[error("Sensor error: {message}")]
    Sensor { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Invalid frame: {width}x{height} (video not ready)")]
    InvalidFrame { width: u32, height: u32 },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using BearingError.
pub type BearingResult<T> = Result<T, BearingError>;

impl BearingError {
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture {
            message: msg.into(),
        }
    }

    pub fn sensor(msg: impl Into<String>) -> Self {
        Self::Sensor {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
