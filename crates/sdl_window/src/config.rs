//! Configuration system
//!
//! Window creation parameters can be kept in TOML or RON files:
//!
//! ```toml
//! title = "Asteroids"
//! x = "centered"
//! y = { at = 40 }
//! width = 1280
//! height = 720
//! flags = "RESIZABLE | ALLOW_HIGHDPI"
//! fullscreen = "windowed"
//! grab = false
//! minimum_size = { x = 640, y = 360 }
//! ```

pub use serde::{Deserialize, Serialize};

use crate::flags::{FullscreenMode, WindowFlags};
use crate::point::Point;
use crate::position::Coordinate;
use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    ///
    /// The format follows the extension: `.toml` or `.ron`.
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] if its contents do not match `Self`, and
    /// [`ConfigError::UnsupportedFormat`] for any other extension.
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// [`ConfigError::Serialize`] if `self` cannot be encoded,
    /// [`ConfigError::UnsupportedFormat`] for an extension other than `.toml`
    /// or `.ron`, and [`ConfigError::Io`] if the write fails.
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that no window can be created with
    #[error("Invalid window configuration: {0}")]
    Invalid(String),
}

/// Window creation parameters and initial state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title in UTF-8
    pub title: String,
    /// Horizontal position
    pub x: Coordinate,
    /// Vertical position
    pub y: Coordinate,
    /// Client area width in pixels
    pub width: i32,
    /// Client area height in pixels
    pub height: i32,
    /// Creation flags
    pub flags: WindowFlags,
    /// Fullscreen state applied after creation
    pub fullscreen: FullscreenMode,
    /// Display gamma multiplier applied after creation
    pub brightness: Option<f32>,
    /// Grab input after creation
    pub grab: bool,
    /// Minimum client area size
    pub minimum_size: Option<Point>,
    /// Maximum client area size
    pub maximum_size: Option<Point>,
}

impl WindowConfig {
    /// Default configuration with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the client area size
    #[must_use]
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the position
    #[must_use]
    pub fn with_position(mut self, x: Coordinate, y: Coordinate) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the creation flags
    #[must_use]
    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the fullscreen state
    #[must_use]
    pub fn with_fullscreen(mut self, mode: FullscreenMode) -> Self {
        self.fullscreen = mode;
        self
    }

    /// Set the display gamma multiplier
    #[must_use]
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Grab or release input after creation
    #[must_use]
    pub fn with_grab(mut self, grab: bool) -> Self {
        self.grab = grab;
        self
    }

    /// Set the minimum client area size
    #[must_use]
    pub fn with_minimum_size(mut self, width: i32, height: i32) -> Self {
        self.minimum_size = Some(Point::new(width, height));
        self
    }

    /// Set the maximum client area size
    #[must_use]
    pub fn with_maximum_size(mut self, width: i32, height: i32) -> Self {
        self.maximum_size = Some(Point::new(width, height));
        self
    }

    /// Validate the configuration
    ///
    /// Brightness is not range-checked; the native side decides what it
    /// accepts.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] if a size is not positive or the minimum size
    /// exceeds the maximum size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        for (name, limit) in [("minimum", self.minimum_size), ("maximum", self.maximum_size)] {
            if let Some(size) = limit {
                if size.x <= 0 || size.y <= 0 {
                    return Err(ConfigError::Invalid(format!("{name} size must be positive, got {size}")));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.minimum_size, self.maximum_size) {
            if min.x > max.x || min.y > max.y {
                return Err(ConfigError::Invalid(format!(
                    "minimum size {min} exceeds maximum size {max}"
                )));
            }
        }

        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            x: Coordinate::Centered,
            y: Coordinate::Centered,
            width: 640,
            height: 480,
            flags: WindowFlags::SHOWN,
            fullscreen: FullscreenMode::Windowed,
            brightness: None,
            grab: false,
            minimum_size: None,
            maximum_size: None,
        }
    }
}

impl Config for WindowConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = WindowConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.x, Coordinate::Centered);
        assert_eq!(config.flags, WindowFlags::SHOWN);
    }

    #[test]
    fn test_validation_rejects_bad_sizes() {
        assert!(matches!(
            WindowConfig::new("w").with_size(0, 480).validate(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(WindowConfig::new("w")
            .with_minimum_size(800, 600)
            .with_maximum_size(640, 480)
            .validate()
            .is_err());
        assert!(WindowConfig::new("w").with_maximum_size(-1, 480).validate().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            title = "Asteroids"
            x = "undefined"
            y = { at = 40 }
            width = 1280
            height = 720
            flags = "RESIZABLE | ALLOW_HIGHDPI"
            fullscreen = "desktop"
            brightness = 0.8
            grab = true
            minimum_size = { x = 640, y = 360 }
        "#;
        let config: WindowConfig = toml::from_str(text).expect("valid toml");

        assert_eq!(config.title, "Asteroids");
        assert_eq!(config.x, Coordinate::Undefined);
        assert_eq!(config.y, Coordinate::At(40));
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.flags, WindowFlags::RESIZABLE | WindowFlags::ALLOW_HIGHDPI);
        assert_eq!(config.fullscreen, FullscreenMode::Desktop);
        assert_relative_eq!(config.brightness.unwrap_or_default(), 0.8);
        assert!(config.grab);
        assert_eq!(config.minimum_size, Some(Point::new(640, 360)));
        assert_eq!(config.maximum_size, None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: WindowConfig = toml::from_str("title = \"Only title\"").expect("valid toml");
        assert_eq!(config, WindowConfig::new("Only title"));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("sdl_window_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");

        let config = WindowConfig::new("Saved")
            .with_size(1024, 768)
            .with_position(Coordinate::At(5), Coordinate::Undefined)
            .with_flags(WindowFlags::RESIZABLE | WindowFlags::OPENGL)
            .with_maximum_size(1920, 1080);

        for name in ["window.toml", "window.ron"] {
            let path = dir.join(name);
            config.save_to_file(&path).expect("save");
            let loaded = WindowConfig::load_from_file(&path).expect("load");
            assert_eq!(loaded, config, "{name}");
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = WindowConfig::default().save_to_file("window.json").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
