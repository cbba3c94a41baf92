//! BearingCam Render Engine
//!
//! The heading compositor: turns a captured camera frame, a sensor
//! snapshot, and an overlay layout into an exportable composite image.
//!
//! # Pipeline Architecture
//!
//! ```text
//! frame (native WxH) ──┐
//!                      ├── plan_overlay (pure: anchors, rotation, text)
//! sensor snapshot ─────┘         │
//!                                ├── render_plan (compass, arrow, text)
//! preloaded assets ──────────────┘         │
//!                                          ▼
//!                                   CompositeImage
//!                                          │
//!                                          ▼
//!                                   Encode (JPEG)
//! ```
//!
//! Planning is separated from rasterization so the geometry (arrow
//! rotation, anchor placement, which text lines appear) is testable
//! without touching pixels.

pub mod assets;
pub mod compositor;
pub mod export;
pub mod frame;
pub mod layout;
pub mod raster;

pub use assets::OverlayAssets;
pub use compositor::{plan_overlay, OverlayPlan, TextRole};
pub use frame::{CaptureFrame, CompositeImage};
pub use layout::{arrow_rotation_degrees, AnchorMode, OverlayLayout};
pub use raster::compose_capture;
