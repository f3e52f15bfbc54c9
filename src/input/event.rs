/// Platform-agnostic input events.
///
/// These are fed into a
/// [`KeyboardMouseSampler`](super::KeyboardMouseSampler), which folds them
/// into the next [`FrameInput`](super::FrameInput) snapshot.
///
/// # Example
///
/// ```
/// use flycam::input::{InputEvent, InputSampler, KeyboardMouseSampler};
///
/// let mut sampler = KeyboardMouseSampler::default();
/// let _ = sampler.handle_event(InputEvent::Key {
///     key: "KeyW".into(),
///     pressed: true,
/// });
/// let _ = sampler.handle_event(InputEvent::MouseMotion { dx: 4.0, dy: -2.0 });
/// let frame = sampler.sample_input(1.0 / 60.0);
/// assert_eq!(frame.move_forward, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// Key code in `winit::keyboard::KeyCode` debug format.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Raw relative mouse motion.
    MouseMotion {
        /// Horizontal motion in pixels (positive = right).
        dx: f32,
        /// Vertical motion in pixels (positive = down).
        dy: f32,
    },
    /// Scroll wheel (positive = away from the user, zoom in).
    Scroll {
        /// Scroll amount in notches.
        delta: f32,
    },
    /// The window lost keyboard focus; every held key is released.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Pixels of trackpad scroll treated as one wheel notch.
    const PIXELS_PER_NOTCH: f32 = 100.0;

    /// Convert a winit keyboard event. Keys without a physical code are
    /// ignored.
    #[must_use]
    pub fn from_key_event(event: &winit::event::KeyEvent) -> Option<Self> {
        match event.physical_key {
            winit::keyboard::PhysicalKey::Code(code) => Some(Self::Key {
                key: format!("{code:?}"),
                pressed: event.state == winit::event::ElementState::Pressed,
            }),
            winit::keyboard::PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Convert a winit wheel delta into notches.
    #[must_use]
    pub fn from_scroll(delta: winit::event::MouseScrollDelta) -> Self {
        let notches = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => y,
            winit::event::MouseScrollDelta::PixelDelta(pos) => {
                pos.y as f32 / Self::PIXELS_PER_NOTCH
            }
        };
        Self::Scroll { delta: notches }
    }
}
