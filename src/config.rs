//! Configuration for the zoom control overlay.

use crate::mapper::{ZoomBounds, ZoomRangeMapper};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f32 = 0.15;

/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f32 = 1.5;

/// Default slider resolution.
pub const DEFAULT_SLIDER_STEPS: u32 = 100;

/// File name looked up inside the platform config directory.
const CONFIG_FILE_NAME: &str = "controls.ron";

/// Errors that can occur when building or loading the control configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("zoom bounds must be finite (min: {min}, max: {max})")]
    NonFiniteBound { min: f32, max: f32 },
    #[error("min zoom {min} must be less than max zoom {max}")]
    InvalidBounds { min: f32, max: f32 },
    #[error("slider steps must be greater than zero")]
    ZeroSteps,
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: ron::de::SpannedError,
    },
}

/// Settings for [`crate::ZoomControls`].
///
/// Every field has a default, so a RON file only needs the overrides:
///
/// ```ron
/// (max_zoom: 3.0, allow_multi_select: true)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Zoom bound used when the host does not supply one.
    pub min_zoom: f32,
    /// Zoom bound used when the host does not supply one.
    pub max_zoom: f32,
    /// Number of discrete slider positions above zero.
    pub slider_steps: u32,
    /// Whether the help toggle and panel exist at all.
    pub show_help: bool,
    /// Adds the multi-select line to the help text.
    pub allow_multi_select: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            slider_steps: DEFAULT_SLIDER_STEPS,
            show_help: true,
            allow_multi_select: false,
        }
    }
}

impl ControlsConfig {
    /// Returns the validated default bounds.
    pub fn bounds(&self) -> Result<ZoomBounds, ConfigError> {
        ZoomBounds::new(self.min_zoom, self.max_zoom)
    }

    /// Validates the whole configuration and builds the mapper for the default bounds.
    pub fn mapper(&self) -> Result<ZoomRangeMapper, ConfigError> {
        ZoomRangeMapper::new(self.bounds()?, self.slider_steps)
    }

    /// Parses a configuration from RON text.
    pub fn from_ron(source: &str, path: &Path) -> Result<Self, ConfigError> {
        ron::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&source, path)
    }

    /// Loads the configuration from the platform config directory.
    ///
    /// A missing file yields the defaults; a present but broken file is an error.
    pub fn load_default_location() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::info!("Loading controls config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Returns `<config dir>/graph-zoom-controls/controls.ron`.
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = dirs::config_dir()?;
        Some(
            config_dir
                .join(env!("CARGO_PKG_NAME"))
                .join(CONFIG_FILE_NAME),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ControlsConfig::default();
        let mapper = config.mapper().unwrap();
        assert_eq!(mapper.steps(), DEFAULT_SLIDER_STEPS);
        assert_eq!(mapper.bounds().min(), DEFAULT_MIN_ZOOM);
        assert_eq!(mapper.bounds().max(), DEFAULT_MAX_ZOOM);
        assert!(config.show_help);
        assert!(!config.allow_multi_select);
    }

    #[test]
    fn partial_ron_keeps_defaults_for_missing_fields() {
        let config =
            ControlsConfig::from_ron("(max_zoom: 3.0, allow_multi_select: true)", Path::new("x"))
                .unwrap();
        assert_eq!(config.max_zoom, 3.0);
        assert_eq!(config.min_zoom, DEFAULT_MIN_ZOOM);
        assert_eq!(config.slider_steps, DEFAULT_SLIDER_STEPS);
        assert!(config.allow_multi_select);
        assert!(config.show_help);
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = ControlsConfig::from_ron("(max_zoom: \"big\")", Path::new("controls.ron"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("controls.ron"));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = ControlsConfig {
            min_zoom: 2.0,
            max_zoom: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.mapper(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn equal_bounds_are_rejected() {
        let config = ControlsConfig {
            min_zoom: 1.0,
            max_zoom: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.bounds(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn zero_steps_are_rejected() {
        let config = ControlsConfig {
            slider_steps: 0,
            ..Default::default()
        };
        assert!(matches!(config.mapper(), Err(ConfigError::ZeroSteps)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = ControlsConfig::load(Path::new("/definitely/not/here/controls.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
