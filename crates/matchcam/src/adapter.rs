//! Aspect-preserving viewport adaptation.
//!
//! A camera calibrated against one viewport aspect will stretch or
//! crop its framing when the viewport is resized to another. The
//! adapter compares the current aspect to the aspect captured at
//! construction time and yields a compensating zoom that preserves
//! the vertical extent of the original framing.

use crate::camera::PerspectiveCamera;
use crate::viewport::ViewportSize;

/// Aspect and zoom to commit to a camera for a given viewport aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionFit {
    /// The viewport aspect ratio, committed unconditionally.
    pub aspect: f32,
    /// Compensating magnification, always >= 1.
    pub zoom: f32,
}

/// Recomputes projection parameters as the viewport aspect drifts
/// from the reference aspect.
///
/// The reference aspect is fixed at construction and never recomputed.
#[derive(Debug, Clone, Copy)]
pub struct ViewportAdapter {
    base_aspect: f32,
}

impl ViewportAdapter {
    /// Creates an adapter with the given reference aspect.
    #[must_use]
    pub fn new(base_aspect: f32) -> Self {
        Self { base_aspect }
    }

    /// The reference aspect captured at construction time.
    #[must_use]
    pub fn base_aspect(&self) -> f32 {
        self.base_aspect
    }

    /// Computes the projection fit for a viewport aspect.
    ///
    /// Viewports no wider than the reference keep zoom 1; wider
    /// viewports magnify by the aspect ratio so the vertical framing
    /// holds.
    #[must_use]
    pub fn fit(&self, current_aspect: f32) -> ProjectionFit {
        let zoom = if current_aspect <= self.base_aspect {
            1.0
        } else {
            current_aspect / self.base_aspect
        };
        ProjectionFit {
            aspect: current_aspect,
            zoom,
        }
    }

    /// Commits the fit for `size` to the camera and recomputes its
    /// projection matrix.
    pub fn apply(&self, camera: &mut PerspectiveCamera, size: ViewportSize) {
        let fit = self.fit(size.aspect());
        camera.aspect = fit.aspect;
        camera.zoom = fit.zoom;
        camera.update_projection_matrix();
    }
}
