//! Centralized runtime options with TOML file support.
//!
//! All tweakable settings (window, camera, lighting) are consolidated here.
//! Options serialize to/from TOML; every sub-struct uses `#[serde(default)]`
//! so a partial file (e.g. only overriding `[camera]`) works correctly.

mod camera;
mod lighting;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use lighting::LightingOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::Error;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window title and initial size.
    pub window: WindowOptions,
    /// Camera placement, projection, and control parameters.
    pub camera: CameraOptions,
    /// Light colors and cone/attenuation parameters.
    pub lighting: LightingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::OptionsParse`] if it is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionsParse`] on serialization failure and
    /// [`Error::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 5.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 5.0);
        // Everything else should be default
        assert_eq!(opts.camera.look_sensitivity, 0.25);
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.window.title, "Cubelight");
        assert_eq!(opts.lighting.spot_cutoff_deg, 12.5);
    }

    #[test]
    fn load_and_save_round_trip() {
        let dir = std::env::temp_dir().join("cubelight_options_test");
        let path = dir.join("options.toml");

        let mut opts = Options::default();
        opts.camera.fovy = 30.0;
        opts.window.width = 640;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/cubelight.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join("cubelight_options_bad");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera]\nmovement_speed = \"fast\"\n").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, Error::OptionsParse(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
