use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, ProjectionKind};
use crate::error::FlycamError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Start Pose", inline)]
#[serde(default)]
/// Camera pose and projection the render loop starts from.
pub struct PoseOptions {
    /// Eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Look-at point in world space.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Up reference direction.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Perspective or orthographic projection.
    #[schemars(title = "Projection")]
    pub projection: ProjectionKind,
}

impl Default for PoseOptions {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            position: camera.position.to_array(),
            target: camera.target.to_array(),
            up: camera.up.to_array(),
            fovy: camera.fovy,
            projection: camera.projection,
        }
    }
}

impl PoseOptions {
    /// Build the starting camera, rejecting invalid poses.
    pub fn to_camera(&self) -> Result<Camera, FlycamError> {
        Camera::new(
            Vec3::from_array(self.position),
            Vec3::from_array(self.target),
            Vec3::from_array(self.up),
            self.fovy,
            self.projection,
        )
    }
}
