//! Application layer - Commands and Handlers.
//!
//! This layer accepts raw host input (bearings, sector names, element names),
//! validates it into domain values and orchestrates the pure domain analyzers.
//! Logging of analysis outcomes happens here, never in the domain.

pub mod handlers;

pub use handlers::{
    // Orientation
    AnalyzeOrientationCommand, AnalyzeOrientationHandler, BearingConfidence, BearingReading,
    NorthReference, OrientationReport,
    // Site composition
    AnalyzeSiteCommand, AnalyzeSiteHandler,
    // Facing recommendation
    RecommendFacingCommand, RecommendFacingHandler,
};
