//! Application handlers.
//!
//! Command handlers that validate host input and run the domain analyzers.

mod orientation;
mod recommend;
mod site;

pub use orientation::{
    AnalyzeOrientationCommand, AnalyzeOrientationHandler, BearingConfidence, BearingReading,
    NorthReference, OrientationReport,
};
pub use recommend::{RecommendFacingCommand, RecommendFacingHandler};
pub use site::{AnalyzeSiteCommand, AnalyzeSiteHandler};

use crate::domain::foundation::ValidationError;

/// Re-labels a parse error with the command field it came from.
pub(crate) fn relabel(field: &str, err: ValidationError) -> ValidationError {
    match err {
        ValidationError::EmptyField { .. } => ValidationError::empty_field(field),
        ValidationError::InvalidFormat { reason, .. } => {
            ValidationError::invalid_format(field, reason)
        }
        ValidationError::OutOfRange {
            min, max, actual, ..
        } => ValidationError::out_of_range(field, min, max, actual),
    }
}
