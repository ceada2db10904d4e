//! Controller and camera options with TOML preset support.
//!
//! Options serialize to/from TOML so a host can ship tuned presets (e.g. a
//! wider board needs wider pan bounds) without recompiling.

mod camera;
mod controller;

use std::path::Path;

pub use camera::CameraOptions;
pub use controller::{Bounds, ControllerOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TouchcamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controller]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Pan/zoom sensitivities and bounds.
    pub controller: ControllerOptions,
    /// Initial camera placement and projection.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Reject option sets the controller cannot clamp against.
    pub fn validate(&self) -> Result<(), TouchcamError> {
        if let Some(msg) = self.controller.invalid_field() {
            return Err(TouchcamError::InvalidOptions(msg));
        }
        if !self.camera.fovy.is_finite() {
            return Err(TouchcamError::InvalidOptions(format!(
                "camera.fovy is not finite ({})",
                self.camera.fovy
            )));
        }
        Ok(())
    }

    /// Load and validate options from a TOML file. Missing fields use
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, TouchcamError> {
        let content = std::fs::read_to_string(path).map_err(TouchcamError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| TouchcamError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TouchcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TouchcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TouchcamError::Io)?;
        }
        std::fs::write(path, content).map_err(TouchcamError::Io)
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
