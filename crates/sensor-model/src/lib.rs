//! BearingCam Sensor Model
//!
//! Pure data types for the sensor inputs that feed the overlay compositor:
//! - **Heading:** normalized compass bearings and cardinal classification
//! - **Orientation:** screen rotation offsets ({0, 90, 180, 270} degrees)
//! - **Geolocation:** optional lat/lon fixes with acquisition timestamps
//! - **Snapshots:** immutable per-capture sensor state
//!
//! This crate is pure data — no I/O, no platform dependencies. Sensor
//! sources live in `bearingcam-capture`; rendering in `bearingcam-render`.

pub mod cell;
pub mod geo;
pub mod heading;
pub mod orientation;
pub mod snapshot;

pub use cell::{heading_cell, HeadingReader, HeadingWriter};
pub use geo::GeoFix;
pub use heading::{CardinalDirection, HeadingSample};
pub use orientation::OrientationOffset;
pub use snapshot::SensorSnapshot;
