use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// How the mouse wheel zooms the camera.
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
pub enum ZoomMode {
    /// Move the eye along the view axis toward or away from the target.
    #[default]
    Dolly,
    /// Narrow or widen the vertical field of view.
    FovAdjust,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controller", inline)]
#[serde(default)]
/// Movement, look, and zoom parameters for the free-fly controller.
pub struct ControllerOptions {
    /// Translation speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.0, max = 100.0), extend("step" = 0.5))]
    pub base_move_speed: f32,
    /// Speed multiplier while the boost key is held.
    #[schemars(title = "Boost Factor", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub speed_boost_factor: f32,
    /// Look rotation in degrees per pixel of mouse motion.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Maximum elevation above or below the horizon, in degrees.
    #[schemars(title = "Pitch Limit", range(min = 1.0, max = 89.9), extend("step" = 0.5))]
    pub pitch_clamp_degrees: f32,
    /// Keep forward/right movement in the horizontal plane regardless of
    /// pitch.
    #[schemars(title = "Move In World Plane")]
    pub move_in_world_plane: bool,
    /// Whether the wheel dollies the eye or adjusts the field of view.
    #[schemars(title = "Zoom Mode")]
    pub zoom_mode: ZoomMode,
    /// World units dollied per wheel notch.
    #[schemars(title = "Dolly Step", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub zoom_step: f32,
    /// Degrees of field of view changed per wheel notch.
    #[schemars(title = "FOV Step", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub fov_zoom_step: f32,
    /// Narrowest field of view reachable by wheel zoom.
    #[schemars(skip)]
    pub min_fovy: f32,
    /// Widest field of view reachable by wheel zoom.
    #[schemars(skip)]
    pub max_fovy: f32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            base_move_speed: 10.0,
            speed_boost_factor: 2.0,
            mouse_sensitivity: 0.1,
            pitch_clamp_degrees: 89.0,
            move_in_world_plane: true,
            zoom_mode: ZoomMode::Dolly,
            zoom_step: 1.0,
            fov_zoom_step: 1.0,
            min_fovy: 1.0,
            max_fovy: 120.0,
        }
    }
}

impl ControllerOptions {
    /// Reject values that would break the camera invariants.
    pub fn validate(&self) -> Result<(), FlycamError> {
        let non_negative = [
            ("base_move_speed", self.base_move_speed),
            ("zoom_step", self.zoom_step),
            ("fov_zoom_step", self.fov_zoom_step),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FlycamError::InvalidOption(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !(self.speed_boost_factor.is_finite() && self.speed_boost_factor > 0.0)
        {
            return Err(FlycamError::InvalidOption(format!(
                "speed_boost_factor must be positive, got {}",
                self.speed_boost_factor
            )));
        }
        if !self.mouse_sensitivity.is_finite() {
            return Err(FlycamError::InvalidOption(format!(
                "mouse_sensitivity must be finite, got {}",
                self.mouse_sensitivity
            )));
        }
        if !(self.pitch_clamp_degrees > 0.0 && self.pitch_clamp_degrees < 90.0) {
            return Err(FlycamError::InvalidOption(format!(
                "pitch_clamp_degrees must be inside (0, 90), got {}",
                self.pitch_clamp_degrees
            )));
        }
        if !(self.min_fovy > 0.0
            && self.max_fovy < 180.0
            && self.min_fovy <= self.max_fovy)
        {
            return Err(FlycamError::InvalidOption(format!(
                "fov zoom range [{}, {}] must lie inside (0, 180)",
                self.min_fovy, self.max_fovy
            )));
        }
        Ok(())
    }
}
