//! BearingCam Capture Engine
//!
//! Coordinates the three independent asynchronous inputs that feed a live
//! compass-camera session, none of which block each other:
//!
//! - **Camera:** one-time stream acquisition at startup; failure is terminal
//!   for the session's video feed (logged, degraded mode, never retried)
//! - **Orientation:** sensor-driven events published into a last-write-wins
//!   heading cell by a tracker task
//! - **Geolocation:** one-shot fix requests; absence is valid data
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               CaptureSession                  │
//! │  ┌──────────┐ ┌─────────────┐ ┌────────────┐ │
//! │  │ Video    │ │ Orientation │ │ Location   │ │
//! │  │ Stream   │ │ Tracker     │ │ Source     │ │
//! │  └─────┬────┘ └──────┬──────┘ └─────┬──────┘ │
//! │        │             │              │         │
//! │        ▼             ▼              ▼         │
//! │  latest frame   heading cell    geo fix       │
//! │        └─────────────┼──────────────┘         │
//! │                      ▼                        │
//! │           SensorSnapshot + compose            │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Capture itself is synchronous: it snapshots the sensors, grabs the
//! latest native-resolution frame, and runs the compositor to completion.

pub mod orientation;
pub mod session;
pub mod sources;

pub use session::*;
pub use sources::{CameraSource, Facing, LocationSource, OrientationSource, VideoStream};
