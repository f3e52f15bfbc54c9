//! Folds raw platform events into per-frame [`FrameInput`] snapshots.
//!
//! The render loop owns one sampler, forwards every window/device event to
//! [`KeyboardMouseSampler::handle_event`], and calls
//! [`InputSampler::sample_input`] exactly once per frame before updating the
//! camera.

use std::collections::HashSet;

use glam::Vec2;

use super::event::InputEvent;
use super::frame::FrameInput;
use super::keyboard::MoveAction;
use crate::options::KeybindingOptions;

/// Synchronous source of per-frame input snapshots.
pub trait InputSampler {
    /// Produce the input for the frame that just elapsed `delta_time`
    /// seconds, and reset any accumulated motion.
    fn sample_input(&mut self, delta_time: f32) -> FrameInput;
}

/// Keyboard and mouse accumulator driven by [`InputEvent`]s.
///
/// Held keys persist across samples; mouse motion and wheel deltas are
/// summed between samples and cleared by each sample.
#[derive(Debug, Clone, Default)]
pub struct KeyboardMouseSampler {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Bound keys currently held down.
    held_keys: HashSet<String>,
    /// Mouse motion accumulated since the last sample.
    mouse_delta: Vec2,
    /// Wheel notches accumulated since the last sample.
    wheel_delta: f32,
}

impl KeyboardMouseSampler {
    /// Create a sampler with the given key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::default()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held keys are released.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.held_keys.clear();
    }

    /// Whether any key bound to `action` is currently held.
    #[must_use]
    pub fn is_held(&self, action: MoveAction) -> bool {
        self.held_keys
            .iter()
            .any(|key| self.key_bindings.lookup(key) == Some(action))
    }

    /// Record an event. Returns `true` if the event affects the camera.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key { key, pressed } => {
                if self.key_bindings.lookup(&key).is_none() {
                    return false;
                }
                if pressed {
                    let _ = self.held_keys.insert(key);
                } else {
                    let _ = self.held_keys.remove(&key);
                }
                true
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_delta += Vec2::new(dx, dy);
                true
            }
            InputEvent::Scroll { delta } => {
                self.wheel_delta += delta;
                true
            }
            InputEvent::FocusLost => {
                self.held_keys.clear();
                false
            }
        }
    }
}

impl InputSampler for KeyboardMouseSampler {
    fn sample_input(&mut self, delta_time: f32) -> FrameInput {
        let delta_time = if delta_time.is_finite() && delta_time > 0.0 {
            delta_time
        } else {
            0.0
        };
        let frame = FrameInput {
            delta_time,
            move_forward: FrameInput::axis(
                self.is_held(MoveAction::Forward),
                self.is_held(MoveAction::Back),
            ),
            move_right: FrameInput::axis(
                self.is_held(MoveAction::Right),
                self.is_held(MoveAction::Left),
            ),
            ascend: self.is_held(MoveAction::Ascend),
            descend: self.is_held(MoveAction::Descend),
            speed_boost: self.is_held(MoveAction::Boost),
            mouse_delta: self.mouse_delta,
            wheel_delta: self.wheel_delta,
        };
        self.mouse_delta = Vec2::ZERO;
        self.wheel_delta = 0.0;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: name.into(),
            pressed,
        }
    }

    #[test]
    fn held_keys_persist_across_samples() {
        let mut sampler = KeyboardMouseSampler::default();
        assert!(sampler.handle_event(key("KeyW", true)));
        assert!(sampler.handle_event(key("KeyD", true)));

        for _ in 0..2 {
            let frame = sampler.sample_input(0.016);
            assert_eq!(frame.move_forward, 1.0);
            assert_eq!(frame.move_right, 1.0);
        }

        let _ = sampler.handle_event(key("KeyW", false));
        let frame = sampler.sample_input(0.016);
        assert_eq!(frame.move_forward, 0.0);
        assert_eq!(frame.move_right, 1.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut sampler = KeyboardMouseSampler::default();
        let _ = sampler.handle_event(key("KeyA", true));
        let _ = sampler.handle_event(key("KeyD", true));
        let _ = sampler.handle_event(key("Space", true));
        let _ = sampler.handle_event(key("ControlLeft", true));

        let frame = sampler.sample_input(0.016);
        assert_eq!(frame.move_right, 0.0);
        assert!(frame.ascend && frame.descend);
    }

    #[test]
    fn motion_and_wheel_accumulate_then_reset() {
        let mut sampler = KeyboardMouseSampler::default();
        let _ = sampler.handle_event(InputEvent::MouseMotion { dx: 3.0, dy: 1.0 });
        let _ = sampler.handle_event(InputEvent::MouseMotion { dx: 2.0, dy: -4.0 });
        let _ = sampler.handle_event(InputEvent::Scroll { delta: 1.0 });
        let _ = sampler.handle_event(InputEvent::Scroll { delta: 0.5 });

        let frame = sampler.sample_input(0.016);
        assert_eq!(frame.mouse_delta, Vec2::new(5.0, -3.0));
        assert_eq!(frame.wheel_delta, 1.5);

        let next = sampler.sample_input(0.016);
        assert_eq!(next, FrameInput::idle(0.016));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut sampler = KeyboardMouseSampler::default();
        assert!(!sampler.handle_event(key("KeyZ", true)));
        assert_eq!(sampler.sample_input(0.1), FrameInput::idle(0.1));
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut sampler = KeyboardMouseSampler::default();
        let _ = sampler.handle_event(key("KeyW", true));
        let _ = sampler.handle_event(key("ShiftLeft", true));
        let _ = sampler.handle_event(InputEvent::FocusLost);

        let frame = sampler.sample_input(0.016);
        assert_eq!(frame.move_forward, 0.0);
        assert!(!frame.speed_boost);
    }

    #[test]
    fn two_keys_for_one_action() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind("ArrowUp", MoveAction::Forward);
        let mut sampler = KeyboardMouseSampler::with_key_bindings(bindings);

        let _ = sampler.handle_event(key("KeyW", true));
        let _ = sampler.handle_event(key("ArrowUp", true));
        let _ = sampler.handle_event(key("KeyW", false));
        assert!(sampler.is_held(MoveAction::Forward));
    }

    #[test]
    fn invalid_frame_time_is_zeroed() {
        let mut sampler = KeyboardMouseSampler::default();
        assert_eq!(sampler.sample_input(-1.0).delta_time, 0.0);
        assert_eq!(sampler.sample_input(f32::NAN).delta_time, 0.0);
        assert_eq!(sampler.sample_input(0.25).delta_time, 0.25);
    }
}
