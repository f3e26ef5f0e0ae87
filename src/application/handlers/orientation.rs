//! AnalyzeOrientationHandler - turns a facing bearing into a sitting/facing analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::domain::analysis::{SittingFacingAnalyzer, SittingFacingResult};
use crate::domain::compass::{normalize_degrees, Mountain, SectorMapper};
use crate::domain::foundation::{DomainError, ValidationError};

/// Largest declination magnitude accepted, in degrees.
const MAX_DECLINATION: f64 = 180.0;

/// How much the reading device trusts its own bearing.
///
/// Carried through to the report and the logs; never changes the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BearingConfidence {
    #[default]
    High,
    Medium,
    Low,
}

impl BearingConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            BearingConfidence::High => "high",
            BearingConfidence::Medium => "medium",
            BearingConfidence::Low => "low",
        }
    }
}

impl fmt::Display for BearingConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BearingConfidence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(BearingConfidence::High),
            "medium" => Ok(BearingConfidence::Medium),
            "low" => Ok(BearingConfidence::Low),
            "" => Err(ValidationError::empty_field("confidence")),
            other => Err(ValidationError::invalid_format(
                "confidence",
                format!("expected high, medium or low, got '{}'", other),
            )),
        }
    }
}

/// Which north a bearing was measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NorthReference {
    #[default]
    True,
    Magnetic,
}

/// A bearing as delivered by the sensor service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingReading {
    /// Clockwise degrees from north; any finite value, normalized on use.
    pub degrees: f64,
    #[serde(default)]
    pub confidence: BearingConfidence,
    #[serde(default)]
    pub north_reference: NorthReference,
    /// Magnetic declination (east positive). `None` falls back to the
    /// handler's configured default. Ignored for true-north readings.
    #[serde(default)]
    pub declination: Option<f64>,
}

impl BearingReading {
    /// A true-north reading with high confidence.
    pub fn true_north(degrees: f64) -> Self {
        Self {
            degrees,
            confidence: BearingConfidence::High,
            north_reference: NorthReference::True,
            declination: None,
        }
    }

    /// A magnetic reading with an explicit declination.
    pub fn magnetic(degrees: f64, declination: f64) -> Self {
        Self {
            degrees,
            confidence: BearingConfidence::High,
            north_reference: NorthReference::Magnetic,
            declination: Some(declination),
        }
    }

    pub fn with_confidence(mut self, confidence: BearingConfidence) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Command to analyze the orientation a building faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeOrientationCommand {
    /// Bearing of the facing (front) direction.
    pub facing: BearingReading,
}

/// Orientation analysis with the resolved bearings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrientationReport {
    /// Facing bearing after declination correction, in `[0, 360)`.
    pub facing_degrees: f64,
    /// Sitting bearing, opposite the facing one, in `[0, 360)`.
    pub sitting_degrees: f64,
    pub sitting: Mountain,
    pub facing: Mountain,
    /// Traditional "X山Y向" label.
    pub label: String,
    pub confidence: BearingConfidence,
    pub analysis: SittingFacingResult,
}

/// Handler for orientation analysis.
pub struct AnalyzeOrientationHandler {
    mapper: SectorMapper,
    default_declination: f64,
}

impl AnalyzeOrientationHandler {
    pub fn new(mapper: SectorMapper, default_declination: f64) -> Self {
        Self {
            mapper,
            default_declination,
        }
    }

    /// Validates the reading, maps both bearings and runs the sitting/facing analysis.
    ///
    /// # Errors
    ///
    /// - `INVALID_FORMAT` when the bearing or declination is NaN or infinite
    /// - `OUT_OF_RANGE` when the declination exceeds ±180°
    pub fn handle(&self, cmd: AnalyzeOrientationCommand) -> Result<OrientationReport, DomainError> {
        let reading = cmd.facing;

        // 1. Validate and correct to true north
        let true_bearing = self.true_bearing(&reading)?;

        if reading.confidence == BearingConfidence::Low {
            warn!(
                degrees = reading.degrees,
                confidence = %reading.confidence,
                "Analyzing low-confidence bearing"
            );
        }

        // 2. Map facing and sitting bearings onto the ring
        let facing_degrees = normalize_degrees(true_bearing);
        let sitting_degrees = normalize_degrees(facing_degrees + 180.0);
        let facing = self.mapper.sector_of(facing_degrees);
        let sitting = self.mapper.sector_of(sitting_degrees);

        // 3. Analyze
        let analysis = SittingFacingAnalyzer::analyze(sitting, facing);
        let label = analysis.label();

        debug!(
            facing_degrees,
            sitting_degrees,
            label = %label,
            compatibility = analysis.compatibility.label(),
            special = analysis.special_combination,
            "Orientation analyzed"
        );

        Ok(OrientationReport {
            facing_degrees,
            sitting_degrees,
            sitting,
            facing,
            label,
            confidence: reading.confidence,
            analysis,
        })
    }

    fn true_bearing(&self, reading: &BearingReading) -> Result<f64, DomainError> {
        if !reading.degrees.is_finite() {
            return Err(ValidationError::invalid_format(
                "bearing",
                "bearing must be a finite number of degrees",
            )
            .into());
        }

        match reading.north_reference {
            NorthReference::True => Ok(reading.degrees),
            NorthReference::Magnetic => {
                let declination = reading.declination.unwrap_or(self.default_declination);
                if !declination.is_finite() {
                    return Err(ValidationError::invalid_format(
                        "declination",
                        "declination must be a finite number of degrees",
                    )
                    .into());
                }
                if declination.abs() > MAX_DECLINATION {
                    return Err(ValidationError::out_of_range(
                        "declination",
                        -MAX_DECLINATION as i32,
                        MAX_DECLINATION as i32,
                        declination.round() as i32,
                    )
                    .into());
                }
                Ok(reading.degrees + declination)
            }
        }
    }
}

impl Default for AnalyzeOrientationHandler {
    fn default() -> Self {
        Self::new(SectorMapper::default(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Compatibility;
    use crate::domain::compass::SectorLookup;
    use crate::domain::foundation::ErrorCode;

    fn handle(reading: BearingReading) -> Result<OrientationReport, DomainError> {
        AnalyzeOrientationHandler::default().handle(AnalyzeOrientationCommand { facing: reading })
    }

    #[test]
    fn south_facing_reading_is_zi_sitting_wu_facing() {
        let report = handle(BearingReading::true_north(180.0)).unwrap();
        assert_eq!(report.facing, Mountain::Wu);
        assert_eq!(report.sitting, Mountain::Zi);
        assert_eq!(report.label, "子山午向");
        assert_eq!(report.sitting_degrees, 0.0);
        assert_eq!(report.analysis.compatibility, Compatibility::Excellent);
        assert!(report.analysis.special_combination);
    }

    #[test]
    fn negative_bearing_is_normalized() {
        let report = handle(BearingReading::true_north(-90.0)).unwrap();
        assert_eq!(report.facing_degrees, 270.0);
        assert_eq!(report.facing, Mountain::You);
        assert_eq!(report.sitting, Mountain::Mao);
    }

    #[test]
    fn full_turn_bearing_wraps_to_north() {
        let report = handle(BearingReading::true_north(365.0)).unwrap();
        assert_eq!(report.facing_degrees, 5.0);
        assert_eq!(report.facing, Mountain::Zi);
        assert_eq!(report.sitting, Mountain::Wu);
        assert_eq!(report.label, "午山子向");
    }

    #[test]
    fn magnetic_reading_applies_declination() {
        let report = handle(BearingReading::magnetic(170.0, -10.0)).unwrap();
        assert_eq!(report.facing_degrees, 160.0);
        assert_eq!(report.facing, Mountain::Bing);
        assert_eq!(report.sitting, Mountain::Ren);
    }

    #[test]
    fn magnetic_reading_without_declination_uses_handler_default() {
        let handler = AnalyzeOrientationHandler::new(SectorMapper::new(SectorLookup::Bucket), 12.0);
        let reading = BearingReading {
            declination: None,
            ..BearingReading::magnetic(170.0, 0.0)
        };
        let report = handler
            .handle(AnalyzeOrientationCommand { facing: reading })
            .unwrap();
        assert_eq!(report.facing_degrees, 182.0);
        assert_eq!(report.facing, Mountain::Wu);
    }

    #[test]
    fn true_north_reading_ignores_declination() {
        let reading = BearingReading {
            declination: Some(30.0),
            ..BearingReading::true_north(180.0)
        };
        let report = handle(reading).unwrap();
        assert_eq!(report.facing_degrees, 180.0);
    }

    #[test]
    fn confidence_is_carried_through() {
        let reading = BearingReading::true_north(90.0).with_confidence(BearingConfidence::Low);
        let report = handle(reading).unwrap();
        assert_eq!(report.confidence, BearingConfidence::Low);
        assert_eq!(report.facing, Mountain::Mao);
    }

    #[test]
    fn non_finite_bearing_is_rejected() {
        let err = handle(BearingReading::true_north(f64::NAN)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.details.get("field"), Some(&"bearing".to_string()));

        let err = handle(BearingReading::true_north(f64::INFINITY)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn out_of_range_declination_is_rejected() {
        let err = handle(BearingReading::magnetic(90.0, 200.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.details.get("field"), Some(&"declination".to_string()));

        let err = handle(BearingReading::magnetic(90.0, f64::NAN)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn confidence_parses_case_insensitively() {
        assert_eq!("LOW".parse::<BearingConfidence>().unwrap(), BearingConfidence::Low);
        assert_eq!(" medium ".parse::<BearingConfidence>().unwrap(), BearingConfidence::Medium);
        assert!("certain".parse::<BearingConfidence>().is_err());
    }

    #[test]
    fn reading_deserializes_with_defaults() {
        let json = r#"{ "degrees": 45.0 }"#;
        let reading: BearingReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading, BearingReading::true_north(45.0));

        let json = r#"{ "degrees": 45.0, "confidence": "low", "north_reference": "magnetic", "declination": 3.5 }"#;
        let reading: BearingReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.north_reference, NorthReference::Magnetic);
        assert_eq!(reading.declination, Some(3.5));
    }
}
