use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::MoveAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key codes to movement actions.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
/// `"Space"`, `"ShiftLeft"`). Several keys may drive the same action.
pub struct KeybindingOptions {
    /// Maps key string → action (e.g. `"KeyW"` → `Forward`).
    pub bindings: HashMap<String, MoveAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), MoveAction::Forward),
            ("KeyS".into(), MoveAction::Back),
            ("KeyA".into(), MoveAction::Left),
            ("KeyD".into(), MoveAction::Right),
            ("Space".into(), MoveAction::Ascend),
            ("ControlLeft".into(), MoveAction::Descend),
            ("ShiftLeft".into(), MoveAction::Boost),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, action: MoveAction) {
        let _ = self.bindings.insert(key.into(), action);
    }
}
