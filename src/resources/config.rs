//! Stage configuration resource.
//!
//! Settings loaded from an INI configuration file, with safe defaults for
//! startup. Only the subsystem's own knobs live here: viewport metrics, the
//! camera's default snap, and the demo scene size.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! width = 480
//! height = 360
//! scale = 1.0
//!
//! [camera]
//! snap = 100
//!
//! [demo]
//! objects = 4
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::transform2d::clamp_scale;

/// Default safe values for startup
const DEFAULT_VIEWPORT_WIDTH: f32 = 480.0;
const DEFAULT_VIEWPORT_HEIGHT: f32 = 360.0;
const DEFAULT_VIEWPORT_SCALE: f32 = 1.0;
const DEFAULT_SNAP: f32 = 100.0;
const DEFAULT_DEMO_OBJECTS: u32 = 4;
const DEFAULT_CONFIG_PATH: &str = "./stagecam.ini";

/// Stage/camera configuration resource.
///
/// Missing file or missing keys keep their defaults; a load failure is
/// reported to the caller, which falls back to defaults.
#[derive(Resource, Debug, Clone)]
pub struct StageConfig {
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    /// Pixels per stage unit.
    pub viewport_scale: f32,
    /// Initial camera snap in [0,100].
    pub snap: f32,
    /// Number of objects the demo scene spawns.
    pub demo_objects: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StageConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            viewport_scale: DEFAULT_VIEWPORT_SCALE,
            snap: DEFAULT_SNAP,
            demo_objects: DEFAULT_DEMO_OBJECTS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [viewport] section
        if let Some(width) = config.getfloat("viewport", "width").ok().flatten() {
            self.viewport_width = width as f32;
        }
        if let Some(height) = config.getfloat("viewport", "height").ok().flatten() {
            self.viewport_height = height as f32;
        }
        if let Some(scale) = config.getfloat("viewport", "scale").ok().flatten() {
            self.viewport_scale = clamp_scale(scale as f32);
        }

        // [camera] section
        if let Some(snap) = config.getfloat("camera", "snap").ok().flatten() {
            self.snap = (snap as f32).clamp(0.0, 100.0);
        }

        // [demo] section
        if let Some(objects) = config.getuint("demo", "objects").ok().flatten() {
            self.demo_objects = objects as u32;
        }

        info!(
            "Loaded config: viewport {}x{} @ {}, snap={}, demo objects={}",
            self.viewport_width,
            self.viewport_height,
            self.viewport_scale,
            self.snap,
            self.demo_objects
        );

        Ok(())
    }

    /// Save configuration to the INI file. Creates the file if it doesn't
    /// exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set(
            "viewport",
            "height",
            Some(self.viewport_height.to_string()),
        );
        config.set("viewport", "scale", Some(self.viewport_scale.to_string()));
        config.set("camera", "snap", Some(self.snap.to_string()));
        config.set("demo", "objects", Some(self.demo_objects.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = StageConfig::new();
        assert!(config.viewport_width > 0.0);
        assert!(config.viewport_height > 0.0);
        assert!(config.viewport_scale > 0.0);
        assert!((0.0..=100.0).contains(&config.snap));
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let mut config = StageConfig::with_path("/nonexistent/stagecam.ini");
        let defaults = config.clone();
        assert!(config.load_from_file().is_err());
        assert_eq!(config.viewport_width, defaults.viewport_width);
        assert_eq!(config.snap, defaults.snap);
    }
}
