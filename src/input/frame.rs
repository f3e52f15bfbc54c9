use glam::Vec2;

/// One frame's worth of sampled input, consumed by
/// [`CameraController::update`](crate::camera::controller::CameraController::update).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Seconds elapsed since the previous frame, never negative.
    pub delta_time: f32,
    /// Forward/back intent in {-1, 0, +1}.
    pub move_forward: f32,
    /// Right/left intent in {-1, 0, +1}.
    pub move_right: f32,
    /// Rise along the up axis.
    pub ascend: bool,
    /// Sink along the up axis.
    pub descend: bool,
    /// Multiply movement speed by the boost factor.
    pub speed_boost: bool,
    /// Mouse motion in pixels since the previous frame.
    pub mouse_delta: Vec2,
    /// Wheel notches since the previous frame (positive = zoom in).
    pub wheel_delta: f32,
}

impl FrameInput {
    /// A frame with no held keys and no mouse activity.
    #[must_use]
    pub fn idle(delta_time: f32) -> Self {
        Self {
            delta_time,
            ..Self::default()
        }
    }

    /// Signed intent from a pair of opposing keys. Both held cancel out.
    #[must_use]
    pub fn axis(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}
