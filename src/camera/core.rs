use glam::{Mat4, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// `|normalize(view) x normalize(up)|` below this counts as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Which matrix-construction branch the projection builder runs.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Perspective projection driven by the vertical field of view.
    #[default]
    Perspective,
    /// Orthographic projection; `fovy` is reused as the view height.
    Orthographic,
}

/// Free-fly camera pose plus projection parameters.
///
/// Created once at startup and mutated in place every frame by
/// [`CameraController::update`](super::controller::CameraController::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at point in world space.
    pub target: Vec3,
    /// Nominal up reference. Only ever read normalized.
    pub up: Vec3,
    /// Vertical field of view in degrees, in the open interval (0, 180).
    pub fovy: f32,
    /// Perspective or orthographic projection.
    pub projection: ProjectionKind,
}

impl Default for Camera {
    /// Eye at (10, 10, 10) looking at the origin, Y up, 45 degree FOV.
    fn default() -> Self {
        Self {
            position: Vec3::splat(10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0,
            projection: ProjectionKind::Perspective,
        }
    }
}

impl Camera {
    /// Create a camera, rejecting poses that break the camera invariants.
    pub fn new(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fovy: f32,
        projection: ProjectionKind,
    ) -> Result<Self, FlycamError> {
        let camera = Self {
            position,
            target,
            up,
            fovy,
            projection,
        };
        camera.validate()?;
        Ok(camera)
    }

    /// Check the pose and field of view.
    ///
    /// Fails when `position == target`, when `up` is zero or parallel to the
    /// view direction, or when `fovy` is outside (0, 180).
    pub fn validate(&self) -> Result<(), FlycamError> {
        validate_fovy(self.fovy)?;
        let view = (self.target - self.position)
            .try_normalize()
            .ok_or(FlycamError::DegenerateView)?;
        let up = self.up.try_normalize().ok_or(FlycamError::ParallelUp)?;
        if view.cross(up).length() < PARALLEL_EPSILON {
            return Err(FlycamError::ParallelUp);
        }
        Ok(())
    }

    /// Unit view direction (from position toward target).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Unit right axis, `normalize(forward x up)`.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Up axis orthogonal to both forward and right.
    #[must_use]
    pub fn local_up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Distance between position and target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Elevation of the view direction above the plane perpendicular to
    /// `up`, in degrees. Positive looks up.
    #[must_use]
    pub fn pitch_degrees(&self) -> f32 {
        let up = self.up.normalize_or_zero();
        let view = self.target - self.position;
        if up == Vec3::ZERO || view == Vec3::ZERO {
            return 0.0;
        }
        90.0 - up.angle_between(view).to_degrees()
    }

    /// Right-handed view matrix looking from position at target.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}

/// Reject field-of-view values outside the open interval (0, 180).
pub(crate) fn validate_fovy(fovy: f32) -> Result<(), FlycamError> {
    if fovy > 0.0 && fovy < 180.0 {
        Ok(())
    } else {
        Err(FlycamError::InvalidFov(fovy))
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices for an external renderer.
pub struct CameraUniform {
    /// Eye position; `w` is unused and kept for 16-byte alignment.
    pub position: [f32; 4],
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Inverse of `view_proj`, for reconstructing world-space rays.
    pub inverse_view_proj: [[f32; 4]; 4],
    /// Unit view direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: [0.0; 4],
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            inverse_view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }

    /// Update from the camera and an already-built projection matrix.
    pub fn update_view_proj(&mut self, camera: &Camera, projection: Mat4) {
        let view_proj = projection * camera.build_view();
        self.position = camera.position.extend(0.0).to_array();
        self.view_proj = view_proj.to_cols_array_2d();
        self.inverse_view_proj = view_proj.inverse().to_cols_array_2d();
        self.forward = camera.forward().to_array();
        self.fovy = camera.fovy;
    }
}
