//! # Unified Configuration System
//!
//! All configuration for the harness in one place: window creation, the GUI
//! render bridge, and logging. Every section has defaults matching the stock
//! demo, so a missing or partial config file is fine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub use crate::config::{Config, ConfigError};

/// # Window Configuration
///
/// Window size, title and the OpenGL context requested from the windowing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial client width in logical pixels
    pub width: u32,
    /// Initial client height in logical pixels
    pub height: u32,
    /// Window title
    pub title: String,
    /// Color used to clear the framebuffer each frame (RGBA)
    pub clear_color: [f32; 4],
    /// Requested OpenGL context version (major, minor), core profile
    pub gl_version: (u32, u32),
    /// Request a forward-compatible context
    pub forward_compatible: bool,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given title and default size
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            width: 800,
            height: 600,
            title: title.into(),
            clear_color: [0.1, 0.1, 0.1, 1.0],
            gl_version: (3, 3),
            forward_compatible: true,
            vsync: true,
        }
    }

    /// Set the initial client size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable vsync
    pub fn with_vsync(mut self, enabled: bool) -> Self {
        self.vsync = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("Window size must be non-zero, got {}x{}", self.width, self.height));
        }
        if self.gl_version < (3, 3) {
            return Err(format!(
                "OpenGL {}.{} is too old, vertex arrays and base-vertex draws need 3.3",
                self.gl_version.0, self.gl_version.1
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("Opengl engine")
    }
}

/// # GUI Bridge Configuration
///
/// Tunables for the immediate-mode GUI render bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Placeholder vertex buffer allocation in bytes (resized on every upload)
    pub initial_vertex_capacity: usize,
    /// Placeholder index buffer allocation in bytes (resized on every upload)
    pub initial_index_capacity: usize,
    /// Delta time pushed on construction and resize, and substituted for non-positive deltas
    pub default_delta_seconds: f32,
    /// Apply the GUI library's dark color scheme
    pub dark_style: bool,
    /// Where the GUI library persists window layout; `None` disables persistence
    pub ini_file: Option<String>,
}

impl GuiConfig {
    /// Create a GUI configuration with defaults
    pub fn new() -> Self {
        Self {
            initial_vertex_capacity: 10_000,
            initial_index_capacity: 2_000,
            default_delta_seconds: 1.0 / 60.0,
            dark_style: true,
            ini_file: None,
        }
    }

    /// Set the placeholder buffer capacities (bytes)
    pub fn with_initial_capacity(mut self, vertex_bytes: usize, index_bytes: usize) -> Self {
        self.initial_vertex_capacity = vertex_bytes;
        self.initial_index_capacity = index_bytes;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.default_delta_seconds.is_finite() && self.default_delta_seconds > 0.0) {
            return Err(format!(
                "Default delta time must be positive, got {}",
                self.default_delta_seconds
            ));
        }
        Ok(())
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level name (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    pub level: String,
}

impl LoggingConfig {
    /// Set log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// Where [`ApplicationConfig::load_or_default`] got its values from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// No file at this path; defaults used
    Defaults(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "Loaded config from {}", path.display()),
            Self::Defaults(path) => write!(f, "No config at {}, using defaults", path.display()),
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses every subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Window and GL context
    pub window: WindowConfig,
    /// GUI render bridge
    pub gui: GuiConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl ApplicationConfig {
    /// Load from `path` if it exists, otherwise use defaults.
    ///
    /// A file that exists but fails to parse or validate is an error. Runs before
    /// logging is configured, so the source is returned for the caller to log.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults(path.to_path_buf())));
        }

        let config = Self::load_from_file(path)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.gui.validate()?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("gl_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_match_stock_demo() {
        let config = ApplicationConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "Opengl engine");
        assert_eq!(config.gui.initial_vertex_capacity, 10_000);
        assert_eq!(config.gui.initial_index_capacity, 2_000);
        assert!((config.gui.default_delta_seconds - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ApplicationConfig::default();
        config.window.width = 0;
        assert!(config.validate().is_err());

        let mut config = ApplicationConfig::default();
        config.window.gl_version = (2, 1);
        assert!(config.validate().is_err());

        let mut config = ApplicationConfig::default();
        config.gui.default_delta_seconds = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ApplicationConfig = toml::from_str(
            r#"
            [window]
            title = "Custom"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Custom");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.gui, GuiConfig::default());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_save_and_load_toml() {
        let path = temp_path("roundtrip.toml");
        let config = ApplicationConfig {
            window: WindowConfig::new("Saved").with_size(1024, 768).with_vsync(false),
            gui: GuiConfig::new().with_initial_capacity(4096, 1024),
            logging: LoggingConfig::default().with_level("warn"),
        };

        config.save_to_file(&path).unwrap();
        let loaded = ApplicationConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = temp_path("does_not_exist.toml");
        let (config, source) = ApplicationConfig::load_or_default(&path).unwrap();
        assert_eq!(config, ApplicationConfig::default());
        assert_eq!(source, ConfigSource::Defaults(path.clone()));
        assert_eq!(source.to_string(), format!("No config at {}, using defaults", path.display()));
    }

    #[test]
    fn test_load_or_default_reports_file_source() {
        let path = temp_path("present.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
        let result = ApplicationConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();

        let (config, source) = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(source.to_string(), format!("Loaded config from {}", path.display()));
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_load_or_default_rejects_invalid_values() {
        let path = temp_path("invalid.toml");
        std::fs::write(&path, "[window]\nwidth = 0\n").unwrap();
        let result = ApplicationConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
