//! Analysis Module - Pure domain services for orientation and site analysis.
//!
//! This module contains stateless functions that operate on compass values
//! to score and explain orientations and site compositions.
//!
//! # Components
//!
//! - `SittingFacingAnalyzer` - tier, rationale, aspect scores and advice for a sitting/facing pair
//! - `SiteAnalyzer` - dragon, cave, sand and water assessment with an aggregate score
//! - `FacingRecommender` - best sitting mountain for an elemental profile
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take compass
//! values as input and return owned results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod facing_recommender;
mod site_analyzer;
mod sitting_facing;

pub use facing_recommender::{
    ElementalProfile, FacingRecommendation, FacingRecommender, RATIONALE_AVOID_LIMIT,
};
pub use site_analyzer::{
    sand_strength, CaveAssessment, CaveEnergy, CompositeSiteResult, DragonAssessment,
    DragonQuality, SandAssessment, SandBalance, SiteAnalyzer, SiteSurvey, WaterAssessment,
    WaterPattern, SITE_ACCEPTABLE_THRESHOLD, SITE_AUSPICIOUS_THRESHOLD,
};
pub use sitting_facing::{
    orientation_label, special_combination, Aspect, AspectScores, Compatibility, MountainPair,
    SittingFacingAnalyzer, SittingFacingResult, SpecialCombination,
};
