//! Geolocation fixes.

use serde::{Deserialize, Serialize};

/// A geolocation fix in decimal degrees.
///
/// Absence of a fix is modeled as `Option<GeoFix>` at the call site — there
/// is no placeholder value. A stale fix is still a valid fix; consumers that
/// care about freshness can inspect `acquired_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,

    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,

    /// Wall-clock time the fix was acquired (RFC 3339).
    pub acquired_at: String,
}

impl GeoFix {
    /// Create a fix stamped with the current wall-clock time.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            acquired_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a fix with a known acquisition time (for loading saved data).
    pub fn at(latitude: f64, longitude: f64, acquired_at: String) -> Self {
        Self {
            latitude,
            longitude,
            acquired_at,
        }
    }

    /// The overlay text line for this fix.
    pub fn display_line(&self, decimal_places: usize) -> String {
        format!(
            "Latitude: {:.places$}, Longitude: {:.places$}",
            self.latitude,
            self.longitude,
            places = decimal_places
        )
    }
}
