//! Camera rig construction and resize handling.

use std::cell::RefCell;
use std::rc::Rc;

use matchcam_core::{CalibrationRecord, CalibrationSource, MatchcamError, Result};

use crate::adapter::ViewportAdapter;
use crate::camera::{PerspectiveCamera, DEFAULT_FAR, DEFAULT_FOV_Y_DEGREES, DEFAULT_NEAR};
use crate::events::{ResizeBus, ResizeSubscription};
use crate::viewport::ViewportSize;

/// Projection constants used when constructing a rig.
///
/// The field of view is a configured constant rather than a value
/// derived from the calibration's focal metadata; override it here
/// when the source imagery calls for a different lens.
#[derive(Debug, Clone, Copy)]
pub struct RigOptions {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

type ReadyCallback = Box<dyn FnOnce(&PerspectiveCamera)>;

/// Builder for [`CameraRig`].
///
/// Construction is one-shot: the source is resolved, the camera posed
/// from the calibration transform, and the completion callback (if
/// any) invoked exactly once with the fully configured camera. No
/// partially-configured rig escapes a failed build.
pub struct CameraRigBuilder {
    source: CalibrationSource,
    viewport: ViewportSize,
    options: RigOptions,
    on_ready: Option<ReadyCallback>,
}

impl CameraRigBuilder {
    /// Starts a builder for the given calibration source.
    pub fn new(source: impl Into<CalibrationSource>) -> Self {
        Self {
            source: source.into(),
            viewport: ViewportSize::new(1280, 720),
            options: RigOptions::default(),
            on_ready: None,
        }
    }

    /// Sets the viewport the camera is constructed against. Its
    /// aspect becomes the rig's fixed reference aspect.
    #[must_use]
    pub fn viewport(mut self, size: ViewportSize) -> Self {
        self.viewport = size;
        self
    }

    /// Overrides the projection constants.
    #[must_use]
    pub fn options(mut self, options: RigOptions) -> Self {
        self.options = options;
        self
    }

    /// Registers a callback invoked once with the configured camera
    /// after construction completes.
    #[must_use]
    pub fn on_ready(mut self, callback: impl FnOnce(&PerspectiveCamera) + 'static) -> Self {
        self.on_ready = Some(Box::new(callback));
        self
    }

    /// Resolves the source and constructs the rig.
    pub fn build(mut self) -> Result<CameraRig> {
        if !self.viewport.is_valid() {
            return Err(MatchcamError::Configuration(format!(
                "viewport dimensions must be positive, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }

        let record = self.source.load()?;
        let base_aspect = self.viewport.aspect();

        let mut camera = PerspectiveCamera::new(
            self.options.fov_y_degrees,
            base_aspect,
            self.options.near,
            self.options.far,
        );
        camera.position = record.position();
        camera.rotation = record.rotation();
        camera.update_projection_matrix();

        log::info!(
            "camera rig constructed for {}x{} viewport (aspect {:.4})",
            self.viewport.width,
            self.viewport.height,
            base_aspect
        );

        let rig = CameraRig {
            camera,
            adapter: ViewportAdapter::new(base_aspect),
            record,
        };

        if let Some(callback) = self.on_ready.take() {
            callback(&rig.camera);
        }

        Ok(rig)
    }
}

/// A calibrated perspective camera bound to a viewport.
///
/// The rig owns the camera for its whole lifetime and reworks the
/// projection on every resize notification; pose is set once at
/// construction and never touched again.
#[derive(Debug)]
pub struct CameraRig {
    camera: PerspectiveCamera,
    adapter: ViewportAdapter,
    record: CalibrationRecord,
}

impl CameraRig {
    /// Starts a builder for the given calibration source.
    pub fn builder(source: impl Into<CalibrationSource>) -> CameraRigBuilder {
        CameraRigBuilder::new(source)
    }

    /// The rig's camera.
    #[must_use]
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Mutable access to the rig's camera.
    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    /// The calibration record the rig was built from.
    #[must_use]
    pub fn calibration(&self) -> &CalibrationRecord {
        &self.record
    }

    /// The reference aspect captured at construction time.
    #[must_use]
    pub fn base_aspect(&self) -> f32 {
        self.adapter.base_aspect()
    }

    /// Handles a viewport-size-changed notification.
    ///
    /// Idempotent and safe to call arbitrarily often; performs no
    /// I/O. Degenerate sizes (a zero dimension) are ignored.
    pub fn handle_resize(&mut self, size: ViewportSize) {
        if !size.is_valid() {
            log::trace!(
                "ignoring degenerate resize to {}x{}",
                size.width,
                size.height
            );
            return;
        }
        self.adapter.apply(&mut self.camera, size);
        log::trace!(
            "viewport resized to {}x{}: aspect {:.4}, zoom {:.4}",
            size.width,
            size.height,
            self.camera.aspect,
            self.camera.zoom
        );
    }

    /// Attaches a shared rig to a resize bus.
    ///
    /// The subscription detaches when the returned guard drops; a rig
    /// dropped while still subscribed is skipped silently on later
    /// publishes.
    pub fn attach(rig: &Rc<RefCell<Self>>, bus: &ResizeBus) -> ResizeSubscription {
        let weak = Rc::downgrade(rig);
        bus.subscribe(move |size| {
            if let Some(rig) = weak.upgrade() {
                rig.borrow_mut().handle_resize(size);
            }
        })
    }
}
