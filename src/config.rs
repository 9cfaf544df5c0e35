//! Configuration management for the head pointer application

use crate::{
    constants::{DEFAULT_HORIZONTAL_RATIO, DEFAULT_VERTICAL_RATIO},
    projection::ScreenGeometry,
    regions::RegionCatalog,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Screen canvas used as the projection center
    pub screen: ScreenGeometry,

    /// Per-user calibration ratios
    pub calibration: CalibrationConfig,

    /// Expose intermediate estimator values for overlay drawing
    pub debug_overlay: bool,

    /// Selectable regions, in selection-priority order
    pub regions: RegionCatalog,
}

/// Per-user facial asymmetry calibration.
///
/// Both ratios default to 1.0 (no calibration); they are exposed here as
/// the hook for a future calibration pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Left/right eye-to-nose asymmetry ratio
    pub horizontal_ratio: f64,

    /// Up/down (brow vs. lip) asymmetry ratio
    pub vertical_ratio: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen: ScreenGeometry::default(),
            calibration: CalibrationConfig::default(),
            debug_overlay: false,
            regions: RegionCatalog::default(),
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            horizontal_ratio: DEFAULT_HORIZONTAL_RATIO,
            vertical_ratio: DEFAULT_VERTICAL_RATIO,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return Err(Error::ConfigError(
                "Screen dimensions must be positive".to_string(),
            ));
        }
        if self.calibration.horizontal_ratio <= 0.0 {
            return Err(Error::ConfigError(
                "Horizontal calibration ratio must be positive".to_string(),
            ));
        }
        if self.calibration.vertical_ratio <= 0.0 {
            return Err(Error::ConfigError(
                "Vertical calibration ratio must be positive".to_string(),
            ));
        }
        self.regions.validate()
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Head Pointer Configuration

# Screen canvas used as the projection center
screen:
  width: 1000.0
  height: 718.0

# Per-user calibration (1.0 = no calibration)
calibration:
  horizontal_ratio: 1.0
  vertical_ratio: 1.0

# Expose intermediate estimator values for overlay drawing
debug_overlay: false

# Selectable regions, first match wins
regions:
  - left: 75.0
    top: 150.0
    right: 250.0
    bottom: 637.0
    lines:
      - "Shirt:2000YEN"
      - "Pants:4000YEN"
      - "Slim fit for you"
  - left: 275.0
    top: 150.0
    right: 412.0
    bottom: 637.0
    lines:
      - "Shirt:2000YEN"
      - "Sweater: 4000YEN"
      - "Pants:4000YEN"
      - "Make you look slimmer"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.screen.width, 1000.0);
        assert_eq!(config.screen.height, 718.0);
        assert_eq!(config.calibration.horizontal_ratio, 1.0);
        assert!(!config.debug_overlay);
        assert_eq!(config.regions.len(), 4);
    }

    #[test]
    fn example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.regions.len(), 2);
        assert_eq!(config.regions.get(1).unwrap().lines.len(), 4);
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.screen, config.screen);
        assert_eq!(parsed.regions, config.regions);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut config = Config::default();
        config.screen.width = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.calibration.vertical_ratio = -1.0;
        assert!(config.validate().is_err());
    }
}
