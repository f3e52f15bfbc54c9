//! Camera system for free-fly navigation.
//!
//! Provides the camera pose, the per-frame controller that applies keyboard,
//! mouse, and wheel input to it, and the projection matrix builder.

/// Free-fly controller applying frame input to a camera.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Perspective and orthographic projection construction.
pub mod projection;

pub use controller::CameraController;
pub use self::core::{Camera, CameraUniform, ProjectionKind};
pub use projection::ProjectionBuilder;
