//! Configuration for the PM quadtree.
//!
//! A configuration only describes the universe: the rectangle every mapped
//! feature must fall inside. It can be built in code with the `with_*`
//! setters or loaded from JSON (and TOML with the `toml` feature).
use crate::compute::validation::{validate_extent, validate_point};
use crate::error::PmError;
use geo::Point;
use serde::de::Error;

/// Index configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Width of the universe
    #[serde(default = "Config::default_extent")]
    pub spatial_width: f64,

    /// Height of the universe
    #[serde(default = "Config::default_extent")]
    pub spatial_height: f64,

    /// X coordinate of the universe's north-west corner
    #[serde(default)]
    pub origin_x: f64,

    /// Y coordinate of the universe's north-west corner
    #[serde(default)]
    pub origin_y: f64,
}

impl Config {
    const fn default_extent() -> f64 {
        1024.0
    }

    pub fn with_universe(mut self, width: f64, height: f64) -> Self {
        self.spatial_width = width;
        self.spatial_height = height;
        self
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Checks the universe extent and origin.
    pub fn validate(&self) -> crate::Result<()> {
        validate_extent(self.spatial_width, self.spatial_height)?;
        validate_point(&Point::new(self.origin_x, self.origin_y))
            .map_err(|e| PmError::InvalidInput(format!("Universe origin: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spatial_width: Self::default_extent(),
            spatial_height: Self::default_extent(),
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.spatial_width, 1024.0);
        assert_eq!(config.spatial_height, 1024.0);
        assert_eq!(config.origin_x, 0.0);
        assert_eq!(config.origin_y, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default()
            .with_universe(128.0, 256.0)
            .with_origin(-64.0, 10.0);

        let json = config.to_json().unwrap();
        let deserialized = Config::from_json(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{"spatial_width": 512.0}"#).unwrap();
        assert_eq!(config.spatial_width, 512.0);
        assert_eq!(config.spatial_height, 1024.0);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        assert!(Config::from_json(r#"{"spatial_depth": 3.0}"#).is_err());
    }

    #[test]
    fn test_config_validation() {
        let err = Config::from_json(r#"{"spatial_width": 0.0}"#).unwrap_err();
        assert!(err.to_string().contains("Universe width"));

        let config = Config::default().with_universe(128.0, -1.0);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            PmError::InvalidInput("Universe height must be finite and positive, got: -1".to_string())
        );

        let config = Config::default().with_origin(f64::NAN, 0.0);
        assert!(matches!(config.validate(), Err(PmError::InvalidInput(_))));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_round_trip() {
        let toml_str = "spatial_width = 64.0\nspatial_height = 32.0\n";
        let config = Config::from_toml(toml_str).unwrap();
        assert_eq!(config.spatial_width, 64.0);
        assert_eq!(config.spatial_height, 32.0);

        let back = Config::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
