//! AnalyzeSiteHandler - composite dragon/cave/sand/water assessment from sector names.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::relabel;
use crate::domain::analysis::{CompositeSiteResult, SiteAnalyzer, SiteSurvey};
use crate::domain::compass::Mountain;
use crate::domain::foundation::{DomainError, ValidationError};

/// Command to assess a site.
///
/// Sector names are accepted as the Chinese glyph or the pinyin name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeSiteCommand {
    pub dragon: String,
    pub cave: String,
    #[serde(default)]
    pub left_flank: Option<String>,
    #[serde(default)]
    pub right_flank: Option<String>,
    #[serde(default)]
    pub water_in: Option<String>,
    #[serde(default)]
    pub water_out: Option<String>,
}

impl AnalyzeSiteCommand {
    pub fn new(dragon: impl Into<String>, cave: impl Into<String>) -> Self {
        Self {
            dragon: dragon.into(),
            cave: cave.into(),
            ..Default::default()
        }
    }

    /// Parses every named sector into a survey.
    ///
    /// # Errors
    ///
    /// `ValidationError` naming the first field that is empty or unknown.
    pub fn to_survey(&self) -> Result<SiteSurvey, ValidationError> {
        let dragon = parse_mountain("dragon", &self.dragon)?;
        let cave = parse_mountain("cave", &self.cave)?;
        let left = parse_optional("left_flank", self.left_flank.as_deref())?;
        let right = parse_optional("right_flank", self.right_flank.as_deref())?;
        let water_in = parse_optional("water_in", self.water_in.as_deref())?;
        let water_out = parse_optional("water_out", self.water_out.as_deref())?;

        Ok(SiteSurvey::new(dragon, cave)
            .with_flanks(left, right)
            .with_water(water_in, water_out))
    }
}

fn parse_mountain(field: &str, value: &str) -> Result<Mountain, ValidationError> {
    value.parse::<Mountain>().map_err(|e| relabel(field, e))
}

fn parse_optional(field: &str, value: Option<&str>) -> Result<Option<Mountain>, ValidationError> {
    value.map(|v| parse_mountain(field, v)).transpose()
}

/// Handler for composite site analysis.
#[derive(Debug, Default)]
pub struct AnalyzeSiteHandler;

impl AnalyzeSiteHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: AnalyzeSiteCommand) -> Result<CompositeSiteResult, DomainError> {
        let survey = cmd.to_survey()?;
        let result = SiteAnalyzer::analyze(&survey);

        debug!(
            dragon = %survey.dragon,
            cave = %survey.cave,
            overall_score = result.overall_score,
            "Site analyzed"
        );

        Ok(result)
    }
}
