//! Pose, controller, projection, and keybinding options with TOML presets.
//!
//! Every tunable of the free-fly camera lives here. Options serialize
//! to/from TOML so presets can be stored next to the application and
//! loaded at startup.

mod camera;
mod keybindings;
mod pose;
mod projection;

use std::path::Path;

pub use camera::{ControllerOptions, ZoomMode};
pub use keybindings::KeybindingOptions;
pub use pose::PoseOptions;
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controller]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Starting camera pose and projection kind.
    pub pose: PoseOptions,
    /// Movement, look, and zoom parameters.
    pub controller: ControllerOptions,
    /// Clip planes for the projection builder.
    pub projection: ProjectionOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<(), FlycamError> {
        let _ = self.pose.to_camera()?;
        self.controller.validate()?;
        self.projection.validate()
    }

    /// Parse options from TOML text. Missing fields use defaults; the result
    /// is validated.
    pub fn from_toml_str(content: &str) -> Result<Self, FlycamError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::debug!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
