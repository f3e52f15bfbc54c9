use serde::{Deserialize, Serialize};

/// Camera movement actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "forward"
/// ShiftLeft = "boost"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Move along the view direction.
    Forward,
    /// Move against the view direction.
    Back,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Rise along the up axis.
    Ascend,
    /// Sink along the up axis.
    Descend,
    /// Multiply movement speed while held.
    Boost,
}
