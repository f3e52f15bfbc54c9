//! Projection matrix construction.
//!
//! Right-handed matrices with a [0, 1] depth range (wgpu/Vulkan
//! convention), matching [`Camera::build_view`].

use glam::Mat4;

use crate::camera::core::{validate_fovy, Camera, ProjectionKind};
use crate::error::FlycamError;
use crate::options::ProjectionOptions;

/// Builds projection matrices from a camera and viewport aspect ratio.
///
/// Clip planes are configuration, not camera state, and are validated once
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionBuilder {
    znear: f32,
    zfar: f32,
}

impl Default for ProjectionBuilder {
    fn default() -> Self {
        let defaults = ProjectionOptions::default();
        Self {
            znear: defaults.znear,
            zfar: defaults.zfar,
        }
    }
}

impl ProjectionBuilder {
    /// Create a builder, rejecting clip planes unless `0 < znear < zfar`.
    pub fn new(options: &ProjectionOptions) -> Result<Self, FlycamError> {
        options.validate()?;
        Ok(Self {
            znear: options.znear,
            zfar: options.zfar,
        })
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn znear(&self) -> f32 {
        self.znear
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn zfar(&self) -> f32 {
        self.zfar
    }

    /// Projection matrix for `camera` at the given viewport aspect
    /// (width / height).
    ///
    /// Orthographic projections use `fovy` as the full view height, so the
    /// vertical extent is independent of the aspect ratio.
    pub fn build_projection(
        &self,
        camera: &Camera,
        aspect: f32,
    ) -> Result<Mat4, FlycamError> {
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(FlycamError::InvalidAspectRatio(aspect));
        }
        validate_fovy(camera.fovy)?;

        let matrix = match camera.projection {
            ProjectionKind::Perspective => Mat4::perspective_rh(
                camera.fovy.to_radians(),
                aspect,
                self.znear,
                self.zfar,
            ),
            ProjectionKind::Orthographic => {
                let top = camera.fovy * 0.5;
                let right = top * aspect;
                Mat4::orthographic_rh(
                    -right, right, -top, top, self.znear, self.zfar,
                )
            }
        };
        Ok(matrix)
    }

    /// Combined view-projection matrix.
    pub fn build_view_projection(
        &self,
        camera: &Camera,
        aspect: f32,
    ) -> Result<Mat4, FlycamError> {
        Ok(self.build_projection(camera, aspect)? * camera.build_view())
    }
}
