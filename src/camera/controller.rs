use glam::{Quat, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::error::FlycamError;
use crate::input::FrameInput;
use crate::options::{ControllerOptions, ZoomMode};

/// Closest the eye may dolly toward the target.
const MIN_DOLLY_DISTANCE: f32 = 0.001;

/// Free-fly controller: keyboard translation, mouse look, and wheel zoom.
///
/// Holds only configuration; the camera is passed in explicitly every frame
/// and mutated in place.
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    options: ControllerOptions,
}

impl CameraController {
    /// Create a controller, rejecting options that would break the pitch
    /// clamp or the field-of-view range.
    pub fn new(options: ControllerOptions) -> Result<Self, FlycamError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Replace the options. Invalid options leave the current ones in place.
    pub fn set_options(
        &mut self,
        options: ControllerOptions,
    ) -> Result<(), FlycamError> {
        if let Err(e) = options.validate() {
            log::warn!("rejected controller options: {e}");
            return Err(e);
        }
        log::debug!("controller options updated: {options:?}");
        self.options = options;
        Ok(())
    }

    /// Advance the camera by one frame of input.
    ///
    /// Translation is applied first, then mouse look, then wheel zoom.
    pub fn update(&self, camera: &mut Camera, input: &FrameInput) {
        let translation = self.translation(camera, input);
        camera.position += translation;
        camera.target += translation;

        self.rotate(camera, input.mouse_delta);
        self.zoom(camera, input.wheel_delta);

        log::trace!(
            "camera pose: position {} target {} fovy {}",
            camera.position,
            camera.target,
            camera.fovy
        );
    }

    /// Distance moved this frame along any single direction, in world units.
    #[must_use]
    pub fn move_speed(&self, input: &FrameInput) -> f32 {
        let speed = self.options.base_move_speed * input.delta_time;
        if input.speed_boost {
            speed * self.options.speed_boost_factor
        } else {
            speed
        }
    }

    /// World-space displacement for this frame.
    ///
    /// The planar (forward/right) intent is normalized so diagonal movement
    /// is no faster than axis-aligned movement; vertical movement is added
    /// on top of it.
    #[must_use]
    pub fn translation(&self, camera: &Camera, input: &FrameInput) -> Vec3 {
        let speed = self.move_speed(input);
        let (forward, right, vertical) = self.movement_basis(camera);

        let planar = Vec2::new(input.move_forward, input.move_right)
            .try_normalize()
            .map_or(Vec3::ZERO, |dir| (forward * dir.x + right * dir.y) * speed);
        let lift = FrameInput::axis(input.ascend, input.descend) * speed;

        planar + vertical * lift
    }

    /// (forward, right, vertical) axes used for translation.
    fn movement_basis(&self, camera: &Camera) -> (Vec3, Vec3, Vec3) {
        let right = camera.right();
        if self.options.move_in_world_plane {
            let up = camera.up.normalize_or_zero();
            // up x right is the view direction flattened onto the ground
            (up.cross(right), right, up)
        } else {
            (camera.forward(), right, camera.local_up())
        }
    }

    /// Mouse look: yaw about `up`, then pitch about the local right axis.
    ///
    /// `delta` is in pixels; +x turns right, +y looks down. The resulting
    /// elevation is clamped to `±pitch_clamp_degrees`.
    pub fn rotate(&self, camera: &mut Camera, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        let Some(up) = camera.up.try_normalize() else {
            return;
        };
        let sensitivity = self.options.mouse_sensitivity;
        let yaw = -delta.x * sensitivity;
        let pitch = -delta.y * sensitivity;

        let mut view = camera.target - camera.position;
        view = Quat::from_axis_angle(up, yaw.to_radians()) * view;

        let limit = self.options.pitch_clamp_degrees;
        let current = 90.0 - up.angle_between(view).to_degrees();
        let applied = (current + pitch).clamp(-limit, limit) - current;
        if applied != 0.0 {
            if let Some(right) = view.cross(up).try_normalize() {
                view = Quat::from_axis_angle(right, applied.to_radians()) * view;
            }
        }

        camera.target = camera.position + view;
    }

    /// Wheel zoom. Positive `wheel_delta` (scroll away from the user) moves
    /// closer in [`ZoomMode::Dolly`] or narrows the field of view in
    /// [`ZoomMode::FovAdjust`].
    pub fn zoom(&self, camera: &mut Camera, wheel_delta: f32) {
        let zoom = -wheel_delta;
        if zoom == 0.0 {
            return;
        }
        match self.options.zoom_mode {
            ZoomMode::Dolly => {
                let forward = camera.forward();
                let distance = (camera.distance()
                    + zoom * self.options.zoom_step)
                    .max(MIN_DOLLY_DISTANCE);
                camera.position = camera.target - forward * distance;
            }
            ZoomMode::FovAdjust => {
                camera.fovy = (camera.fovy + zoom * self.options.fov_zoom_step)
                    .clamp(self.options.min_fovy, self.options.max_fovy);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::ProjectionKind;

    const EPS: f32 = 1e-4;

    fn controller() -> CameraController {
        CameraController::default()
    }

    fn moving(delta_time: f32, forward: f32, right: f32) -> FrameInput {
        FrameInput {
            delta_time,
            move_forward: forward,
            move_right: right,
            ..FrameInput::default()
        }
    }

    #[test]
    fn idle_frame_is_identity() {
        let mut camera = Camera::default();
        let before = camera;
        controller().update(&mut camera, &FrameInput::idle(0.016));
        assert_eq!(camera, before);
    }

    #[test]
    fn zero_delta_time_frames_never_move() {
        let mut camera = Camera::default();
        let before = camera;
        let input = FrameInput {
            move_forward: 1.0,
            move_right: -1.0,
            ascend: true,
            speed_boost: true,
            ..FrameInput::idle(0.0)
        };
        for _ in 0..100 {
            controller().update(&mut camera, &input);
        }
        assert_eq!(camera.position, before.position);
        assert_eq!(camera.target, before.target);
    }

    #[test]
    fn forward_moves_along_flattened_view() {
        let mut camera = Camera::default();
        controller().update(&mut camera, &moving(1.0, 1.0, 0.0));

        let step = Vec3::new(-1.0, 0.0, -1.0).normalize() * 10.0;
        assert!(camera.position.abs_diff_eq(Vec3::splat(10.0) + step, EPS));
        assert!(camera.target.abs_diff_eq(step, EPS));
    }

    #[test]
    fn translation_preserves_view_direction() {
        let mut camera = Camera::default();
        let forward = camera.forward();
        let input = FrameInput {
            ascend: true,
            ..moving(0.3, -1.0, 1.0)
        };
        controller().update(&mut camera, &input);
        assert!(camera.forward().abs_diff_eq(forward, EPS));
    }

    #[test]
    fn diagonal_is_not_faster_than_axis_aligned() {
        let ctrl = controller();
        let camera = Camera::default();
        let dt = 0.25;
        let expected = ctrl.options().base_move_speed * dt;
        for (f, r) in [(1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)]
        {
            let moved = ctrl.translation(&camera, &moving(dt, f, r)).length();
            assert!(
                (moved - expected).abs() < EPS,
                "intent ({f}, {r}) moved {moved}, expected {expected}"
            );
        }
    }

    #[test]
    fn diagonal_speed_holds_in_local_mode() {
        let ctrl = CameraController::new(ControllerOptions {
            move_in_world_plane: false,
            ..ControllerOptions::default()
        })
        .unwrap();
        let camera = Camera::default();
        let moved = ctrl.translation(&camera, &moving(1.0, 1.0, 1.0));
        assert!((moved.length() - 10.0).abs() < EPS);
        // Local forward follows the pitch, so height changes.
        assert!(moved.y < 0.0);
    }

    #[test]
    fn local_mode_lift_follows_local_up() {
        let ctrl = CameraController::new(ControllerOptions {
            move_in_world_plane: false,
            ..ControllerOptions::default()
        })
        .unwrap();
        let camera = Camera::default();
        let rise = FrameInput {
            ascend: true,
            ..FrameInput::idle(1.0)
        };
        let lift = ctrl.translation(&camera, &rise);

        assert!(lift.abs_diff_eq(camera.local_up() * 10.0, EPS));
        assert!(lift.dot(camera.forward()).abs() < EPS);
        assert!(lift.dot(camera.right()).abs() < EPS);
        // The camera looks down, so local up tilts off the world vertical.
        let horizontal = Vec3::new(lift.x, 0.0, lift.z);
        assert!(horizontal.length() > 1.0);
        assert!(lift.y > 0.0 && lift.y < 10.0);

        let sink = FrameInput {
            descend: true,
            ..FrameInput::idle(1.0)
        };
        assert!(ctrl.translation(&camera, &sink).abs_diff_eq(-lift, EPS));
    }

    #[test]
    fn world_plane_movement_keeps_height() {
        let ctrl = controller();
        let camera = Camera::default();
        let moved = ctrl.translation(&camera, &moving(1.0, 1.0, 1.0));
        assert!(moved.y.abs() < EPS);
    }

    #[test]
    fn boost_multiplies_speed() {
        let ctrl = controller();
        let camera = Camera::default();
        let input = FrameInput {
            speed_boost: true,
            ..moving(1.0, 1.0, 0.0)
        };
        let moved = ctrl.translation(&camera, &input).length();
        assert!((moved - 20.0).abs() < EPS);
    }

    #[test]
    fn vertical_is_added_after_planar_normalization() {
        let ctrl = controller();
        let camera = Camera::default();
        let input = FrameInput {
            ascend: true,
            ..moving(1.0, 1.0, 0.0)
        };
        let moved = ctrl.translation(&camera, &input);
        assert!((moved.y - 10.0).abs() < EPS);
        assert!((moved.length() - 200.0_f32.sqrt()).abs() < EPS);

        let both = FrameInput {
            ascend: true,
            descend: true,
            ..FrameInput::idle(1.0)
        };
        assert_eq!(ctrl.translation(&camera, &both), Vec3::ZERO);
    }

    #[test]
    fn rotation_is_not_time_scaled() {
        let ctrl = controller();
        let mut a = Camera::default();
        let mut b = Camera::default();
        let look = |dt| FrameInput {
            mouse_delta: Vec2::new(30.0, 10.0),
            ..FrameInput::idle(dt)
        };
        ctrl.update(&mut a, &look(0.0));
        ctrl.update(&mut b, &look(1.0));
        assert!(a.target.abs_diff_eq(b.target, EPS));
        assert_ne!(a.target, Camera::default().target);
        assert_eq!(a.position, Camera::default().position);
    }

    #[test]
    fn yaw_turns_right_for_positive_mouse_x() {
        let ctrl = controller();
        let mut camera = Camera::new(
            Vec3::ZERO,
            Vec3::NEG_Z,
            Vec3::Y,
            45.0,
            ProjectionKind::Perspective,
        )
        .unwrap();
        ctrl.rotate(&mut camera, Vec2::new(900.0, 0.0));
        // 90 degrees to the right of -Z is +X.
        assert!(camera.forward().abs_diff_eq(Vec3::X, EPS));
        assert!((camera.distance() - 1.0).abs() < EPS);
    }

    #[test]
    fn pitch_looks_down_for_positive_mouse_y() {
        let ctrl = controller();
        let mut camera = Camera::new(
            Vec3::ZERO,
            Vec3::NEG_Z,
            Vec3::Y,
            45.0,
            ProjectionKind::Perspective,
        )
        .unwrap();
        ctrl.rotate(&mut camera, Vec2::new(0.0, 300.0));
        assert!((camera.pitch_degrees() + 30.0).abs() < 1e-2);
    }

    #[test]
    fn pitch_is_clamped_for_any_mouse_sequence() {
        let ctrl = controller();
        let limit = ctrl.options().pitch_clamp_degrees;
        let mut camera = Camera::default();
        let deltas = [
            Vec2::new(0.0, -5000.0),
            Vec2::new(13.0, -700.0),
            Vec2::new(-250.0, 9000.0),
            Vec2::new(40.0, 1.0),
            Vec2::new(0.0, -1e6),
            Vec2::new(3.0, 1e6),
        ];
        for delta in deltas.iter().cycle().take(60) {
            ctrl.rotate(&mut camera, *delta);
            let pitch = camera.pitch_degrees();
            assert!(pitch.abs() <= limit + 1e-2, "pitch {pitch} past limit");
            assert!(camera.validate().is_ok());
        }
    }

    #[test]
    fn dolly_wheel_changes_distance_by_step() {
        let ctrl = controller();
        let mut camera = Camera::default();
        let start = camera.distance();
        let forward = camera.forward();

        ctrl.zoom(&mut camera, 1.0);
        assert!((camera.distance() - (start - 1.0)).abs() < EPS);
        assert!(camera.forward().abs_diff_eq(forward, EPS));
        assert_eq!(camera.target, Vec3::ZERO);

        ctrl.zoom(&mut camera, -1.0);
        ctrl.zoom(&mut camera, -1.0);
        assert!((camera.distance() - (start + 1.0)).abs() < EPS);
    }

    #[test]
    fn opposite_wheel_deltas_cancel() {
        let ctrl = controller();
        let mut camera = Camera::default();
        let start = camera.distance();
        for wheel in [2.0, -1.0, 3.0, -4.0, 0.5, -0.5] {
            ctrl.zoom(&mut camera, wheel);
        }
        assert!((camera.distance() - start).abs() < EPS);
    }

    #[test]
    fn dolly_never_reaches_target() {
        let ctrl = controller();
        let mut camera = Camera::default();
        ctrl.zoom(&mut camera, 1000.0);
        assert!(camera.distance() > 0.0);
        assert!(camera.validate().is_ok());
    }

    #[test]
    fn fov_zoom_narrows_and_clamps() {
        let ctrl = CameraController::new(ControllerOptions {
            zoom_mode: ZoomMode::FovAdjust,
            ..ControllerOptions::default()
        })
        .unwrap();
        let mut camera = Camera::default();
        let position = camera.position;

        ctrl.zoom(&mut camera, 5.0);
        assert!((camera.fovy - 40.0).abs() < EPS);
        assert_eq!(camera.position, position);

        ctrl.zoom(&mut camera, 1000.0);
        assert_eq!(camera.fovy, ctrl.options().min_fovy);
        ctrl.zoom(&mut camera, -1000.0);
        assert_eq!(camera.fovy, ctrl.options().max_fovy);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let inverted_fov = ControllerOptions {
            zoom_mode: ZoomMode::FovAdjust,
            min_fovy: 60.0,
            max_fovy: 30.0,
            ..ControllerOptions::default()
        };
        let past_vertical = ControllerOptions {
            pitch_clamp_degrees: 120.0,
            ..ControllerOptions::default()
        };
        let nan_pitch = ControllerOptions {
            pitch_clamp_degrees: f32::NAN,
            ..ControllerOptions::default()
        };

        for options in [inverted_fov, past_vertical, nan_pitch] {
            assert!(matches!(
                CameraController::new(options.clone()),
                Err(FlycamError::InvalidOption(_))
            ));

            let mut ctrl = controller();
            assert!(matches!(
                ctrl.set_options(options),
                Err(FlycamError::InvalidOption(_))
            ));
            assert_eq!(ctrl.options().pitch_clamp_degrees, 89.0);
            assert_eq!(ctrl.options().min_fovy, 1.0);
            assert_eq!(ctrl.options().max_fovy, 120.0);
        }
    }

    #[test]
    fn set_options_applies_valid_options() {
        let mut ctrl = controller();
        ctrl.set_options(ControllerOptions {
            pitch_clamp_degrees: 45.0,
            ..ControllerOptions::default()
        })
        .unwrap();
        let mut camera = Camera::default();
        ctrl.rotate(&mut camera, Vec2::new(0.0, -5000.0));
        assert!((camera.pitch_degrees() - 45.0).abs() < 1e-2);
    }
}
