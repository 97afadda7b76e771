//! Viewer configuration with TOML support.
//!
//! One file per section; every struct carries `#[serde(default)]` so a
//! partial TOML file (e.g. only overriding `[camera]`) fills the rest
//! with defaults.

mod camera;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::OrbviewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Orbit-camera placement, sensitivities, bounds, and bindings.
    pub camera: CameraOptions,
    /// Window geometry.
    pub window: WindowOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, OrbviewError> {
        let content = std::fs::read_to_string(path).map_err(OrbviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrbviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), OrbviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbviewError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbviewError::Io)
    }
}
