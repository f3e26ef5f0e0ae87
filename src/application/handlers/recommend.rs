//! RecommendFacingHandler - sitting/facing recommendation from birth-chart element names.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::relabel;
use crate::domain::analysis::{ElementalProfile, FacingRecommendation, FacingRecommender};
use crate::domain::compass::Element;
use crate::domain::foundation::{DomainError, ValidationError};

/// Command carrying the elemental needs reported by the birth-chart service.
///
/// Element names are accepted as the Chinese glyph or the English name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendFacingCommand {
    pub anchor: String,
    #[serde(default)]
    pub favorable: Vec<String>,
    #[serde(default)]
    pub unfavorable: Vec<String>,
}

impl RecommendFacingCommand {
    /// Parses the element names into a profile.
    pub fn to_profile(&self) -> Result<ElementalProfile, ValidationError> {
        let anchor = self
            .anchor
            .parse::<Element>()
            .map_err(|e| relabel("anchor", e))?;
        let favorable = parse_elements("favorable", &self.favorable)?;
        let unfavorable = parse_elements("unfavorable", &self.unfavorable)?;
        Ok(ElementalProfile::new(anchor, favorable, unfavorable))
    }
}

fn parse_elements(field: &str, names: &[String]) -> Result<Vec<Element>, ValidationError> {
    names
        .iter()
        .map(|name| name.parse::<Element>().map_err(|e| relabel(field, e)))
        .collect()
}

/// Handler for optimal-facing recommendations.
#[derive(Debug, Default)]
pub struct RecommendFacingHandler;

impl RecommendFacingHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: RecommendFacingCommand) -> Result<FacingRecommendation, DomainError> {
        let profile = cmd.to_profile()?;
        let recommendation = FacingRecommender::recommend(&profile);

        debug!(
            anchor = %profile.anchor,
            best_choice = %recommendation.best_choice,
            facing = %recommendation.facing,
            recommended = recommendation.recommended.len(),
            avoid = recommendation.avoid.len(),
            "Facing recommended"
        );

        Ok(recommendation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compass::Mountain;
    use crate::domain::foundation::ErrorCode;

    fn command(anchor: &str, favorable: &[&str], unfavorable: &[&str]) -> RecommendFacingCommand {
        RecommendFacingCommand {
            anchor: anchor.to_string(),
            favorable: favorable.iter().map(|s| s.to_string()).collect(),
            unfavorable: unfavorable.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn parses_glyphs_and_english_names() {
        let profile = command("木", &["water", "Fire"], &["金"]).to_profile().unwrap();
        assert_eq!(profile.anchor, Element::Wood);
        assert_eq!(profile.favorable, vec![Element::Water, Element::Fire]);
        assert_eq!(profile.unfavorable, vec![Element::Metal]);
    }

    #[test]
    fn recommends_through_the_domain() {
        let rec = RecommendFacingHandler::new()
            .handle(command("Wood", &["Water"], &["Metal"]))
            .unwrap();
        assert_eq!(rec.best_choice, Mountain::Ren);
        assert_eq!(rec.facing, Mountain::Bing);
    }

    #[test]
    fn empty_lists_are_allowed() {
        let rec = RecommendFacingHandler::new()
            .handle(command("Earth", &[], &[]))
            .unwrap();
        assert!(rec.recommended.is_empty());
        assert_eq!(rec.best_choice, Mountain::Zi);
    }

    #[test]
    fn unknown_element_names_the_field() {
        let err = RecommendFacingHandler::new()
            .handle(command("Wood", &["Water"], &["Aether"]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.details.get("field"), Some(&"unfavorable".to_string()));
    }

    #[test]
    fn empty_anchor_is_rejected() {
        let err = RecommendFacingHandler::new()
            .handle(command("", &[], &[]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.details.get("field"), Some(&"anchor".to_string()));
    }
}
