//! Input handling: platform-agnostic events, bindable movement actions, and
//! the sampler that turns them into one [`FrameInput`] per frame.

/// Platform-agnostic input events.
pub mod event;
/// Per-frame input snapshot.
pub mod frame;
/// Bindable movement actions.
pub mod keyboard;
/// Event accumulator and the sampling trait.
pub mod sampler;

pub use event::InputEvent;
pub use frame::FrameInput;
pub use keyboard::MoveAction;
pub use sampler::{InputSampler, KeyboardMouseSampler};
