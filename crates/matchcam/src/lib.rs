//! matchcam: perspective cameras from photogrammetry calibration
//! exports, with aspect-preserving viewport adaptation.
//!
//! A camera-matching tool solves a camera pose against a source image
//! and writes a calibration export (image dimensions plus a row-major
//! world transform). matchcam turns that export into a posed
//! [`PerspectiveCamera`] and keeps its projection visually correct as
//! the host viewport is resized to arbitrary aspect ratios: the
//! aspect always tracks the viewport, and a compensating zoom kicks
//! in whenever the viewport grows wider than the aspect the camera
//! was constructed against.
//!
//! # Quick Start
//!
//! ```no_run
//! use matchcam::{CameraRigBuilder, ViewportSize};
//!
//! fn main() -> matchcam::Result<()> {
//!     let mut rig = CameraRigBuilder::new("scene/camera.json")
//!         .viewport(ViewportSize::new(1920, 1080))
//!         .build()?;
//!
//!     // Wire this into the host's resize events:
//!     rig.handle_resize(ViewportSize::new(2560, 1080));
//!
//!     let camera = rig.camera();
//!     println!("aspect {} zoom {}", camera.aspect, camera.zoom);
//!     Ok(())
//! }
//! ```
//!
//! For hosts with several independent cameras, a [`ResizeBus`] fans a
//! single size-changed event stream out to any number of rigs, each
//! held behind an RAII [`ResizeSubscription`].

pub mod adapter;
pub mod camera;
pub mod events;
pub mod rig;
pub mod viewport;

// Re-export core types
pub use matchcam_core::{
    CalibrationRecord, CalibrationSource, Mat4, MatchcamError, Quat, Result, Vec3,
};

pub use adapter::{ProjectionFit, ViewportAdapter};
pub use camera::{
    PerspectiveCamera, DEFAULT_FAR, DEFAULT_FOV_Y_DEGREES, DEFAULT_NEAR,
};
pub use events::{ResizeBus, ResizeSubscription};
pub use rig::{CameraRig, CameraRigBuilder, RigOptions};
pub use viewport::ViewportSize;
