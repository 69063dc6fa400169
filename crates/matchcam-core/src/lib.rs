//! Core types for matchcam.
//!
//! This crate provides the calibration side of matchcam:
//! - [`CalibrationRecord`] — the validated in-memory form of a
//!   camera-matching export (image dimensions + row-major world
//!   transform)
//! - [`CalibrationSource`] — tagged input boundary (inline record,
//!   file path, or URL) with one-shot loading
//! - [`MatchcamError`] and the crate-wide [`Result`] alias

pub mod calibration;
pub mod error;
pub mod source;

pub use calibration::CalibrationRecord;
pub use error::{MatchcamError, Result};
pub use source::CalibrationSource;

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3};
