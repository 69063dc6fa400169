//! Perspective camera with zoom-aware projection.

use glam::{Mat4, Quat, Vec3};

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV_Y_DEGREES: f32 = 62.881_854;

/// Default near clipping plane distance.
pub const DEFAULT_NEAR: f32 = 0.01;

/// Default far clipping plane distance.
pub const DEFAULT_FAR: f32 = 10_000.0;

/// A perspective camera posed in world space.
///
/// Pose and projection parameters are plain fields; the projection
/// matrix is cached and only recomputed by an explicit call to
/// [`update_projection_matrix`](Self::update_projection_matrix), so a
/// burst of field changes costs one recompute.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation.
    pub rotation: Quat,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Projection magnification. 1.0 is unmagnified; larger values
    /// narrow the effective field of view.
    pub zoom: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    /// Creates a camera at the origin with the given projection
    /// parameters, zoom 1, and an up-to-date projection matrix.
    #[must_use]
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y_degrees,
            aspect,
            near,
            far,
            zoom: 1.0,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Recomputes the cached projection matrix from the current
    /// fields.
    ///
    /// Zoom divides the half-frustum extents, which is equivalent to
    /// an effective vertical FoV of `2 * atan(tan(fovy / 2) / zoom)`.
    pub fn update_projection_matrix(&mut self) {
        let half_tan = (self.fov_y_degrees.to_radians() * 0.5).tan() / self.zoom;
        let effective_fov_y = 2.0 * half_tan.atan();
        self.projection = Mat4::perspective_rh(effective_fov_y, self.aspect, self.near, self.far);
    }

    /// The cached projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// The view matrix (world to camera space).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// The combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// The camera's forward direction.
    #[must_use]
    pub fn look_dir(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// The camera's up direction.
    #[must_use]
    pub fn up_dir(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// The camera's right direction.
    #[must_use]
    pub fn right_dir(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(DEFAULT_FOV_Y_DEGREES, 16.0 / 9.0, DEFAULT_NEAR, DEFAULT_FAR)
    }
}
