//! Compass engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::compass::{SectorLookup, SectorMapper};

/// Compass engine configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    /// Bearing-to-mountain lookup strategy (`scan` or `bucket`)
    #[serde(default)]
    pub sector_lookup: SectorLookup,

    /// Local magnetic declination in degrees (east positive), applied to
    /// magnetic readings that do not carry their own
    #[serde(default)]
    pub default_declination: f64,
}

impl EngineConfig {
    /// Builds the sector mapper for the configured strategy
    pub fn sector_mapper(&self) -> SectorMapper {
        SectorMapper::new(self.sector_lookup)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.default_declination.is_finite() || self.default_declination.abs() > 180.0 {
            return Err(ValidationError::InvalidDeclination);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.sector_lookup, SectorLookup::Scan);
        assert_eq!(config.default_declination, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_deserialization() {
        let json = r#"{ "sector_lookup": "bucket", "default_declination": -4.5 }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.sector_lookup, SectorLookup::Bucket);
        assert_eq!(config.sector_mapper().lookup(), SectorLookup::Bucket);
        assert_eq!(config.default_declination, -4.5);
    }

    #[test]
    fn test_validation_rejects_wild_declination() {
        let config = EngineConfig {
            default_declination: 270.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDeclination));

        let config = EngineConfig {
            default_declination: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDeclination));
    }
}
