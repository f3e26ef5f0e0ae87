//! Composite Site Analyzer - dragon, cave, sand and water assessment.

use serde::{Deserialize, Serialize};

use crate::domain::compass::{relationship_of, Element, Mountain, Relationship};
use crate::domain::foundation::Percentage;

/// Score at or above which a site is considered auspicious.
pub const SITE_AUSPICIOUS_THRESHOLD: f64 = 80.0;

/// Score at or above which a site is usable with adjustment.
pub const SITE_ACCEPTABLE_THRESHOLD: f64 = 60.0;

/// Mountains describing a site. Flanks and water are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSurvey {
    pub dragon: Mountain,
    pub cave: Mountain,
    pub left_flank: Option<Mountain>,
    pub right_flank: Option<Mountain>,
    pub water_in: Option<Mountain>,
    pub water_out: Option<Mountain>,
}

impl SiteSurvey {
    /// Creates a survey with only the required dragon and cave.
    pub fn new(dragon: Mountain, cave: Mountain) -> Self {
        Self {
            dragon,
            cave,
            left_flank: None,
            right_flank: None,
            water_in: None,
            water_out: None,
        }
    }

    /// Sets both flanking mountains.
    pub fn with_flanks(mut self, left: Option<Mountain>, right: Option<Mountain>) -> Self {
        self.left_flank = left;
        self.right_flank = right;
        self
    }

    /// Sets incoming and outgoing water mountains.
    pub fn with_water(mut self, incoming: Option<Mountain>, outgoing: Option<Mountain>) -> Self {
        self.water_in = incoming;
        self.water_out = outgoing;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragonQuality {
    Excellent,
    Good,
    Poor,
}

impl DragonQuality {
    /// Quality of a dragon vein running through a mountain of `element`.
    pub fn for_element(element: Element) -> Self {
        match element {
            Element::Wood | Element::Earth => DragonQuality::Excellent,
            Element::Water | Element::Fire | Element::Metal => DragonQuality::Good,
        }
    }

    pub fn score(&self) -> u8 {
        match self {
            DragonQuality::Excellent => 90,
            DragonQuality::Good => 60,
            DragonQuality::Poor => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaveEnergy {
    Strong,
    Moderate,
    Weak,
}

impl CaveEnergy {
    pub fn score(&self) -> u8 {
        match self {
            CaveEnergy::Strong => 90,
            CaveEnergy::Moderate => 60,
            CaveEnergy::Weak => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SandBalance {
    Balanced,
    LeftHeavy,
    RightHeavy,
}

impl SandBalance {
    pub fn score(&self) -> u8 {
        match self {
            SandBalance::Balanced => 90,
            SandBalance::LeftHeavy | SandBalance::RightHeavy => 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterPattern {
    Auspicious,
    Neutral,
    Inauspicious,
}

impl WaterPattern {
    pub fn score(&self) -> u8 {
        match self {
            WaterPattern::Auspicious => 90,
            WaterPattern::Neutral => 50,
            WaterPattern::Inauspicious => 20,
        }
    }
}

/// Flanking strength of an element, used to compare the two sand hills.
pub fn sand_strength(element: Element) -> i32 {
    match element {
        Element::Wood => 3,
        Element::Fire => 4,
        Element::Earth => 5,
        Element::Metal => 4,
        Element::Water => 3,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragonAssessment {
    pub direction: Mountain,
    pub quality: DragonQuality,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaveAssessment {
    pub position: Mountain,
    /// Relationship from the dragon's element towards the cave's.
    pub relationship: Relationship,
    pub energy: CaveEnergy,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandAssessment {
    pub left_green_dragon: Option<Mountain>,
    pub right_white_tiger: Option<Mountain>,
    pub balance: SandBalance,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterAssessment {
    pub incoming: Option<Mountain>,
    pub outgoing: Option<Mountain>,
    pub pattern: WaterPattern,
    pub description: String,
}

/// Aggregate assessment of a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeSiteResult {
    pub dragon: DragonAssessment,
    pub cave: CaveAssessment,
    pub sand: SandAssessment,
    pub water: WaterAssessment,
    /// Unweighted mean of the four sub-scores.
    pub overall_score: f64,
    /// `overall_score` rounded onto the 0-100 scale.
    pub overall: Percentage,
    pub recommendations: Vec<String>,
}

/// Analyzer for four-factor site composition.
pub struct SiteAnalyzer;

impl SiteAnalyzer {
    /// Assesses a site.
    ///
    /// # Edge Cases
    /// - No flanks: sand reported `Balanced`, description notes no protection
    /// - One flank: heavy toward the present side, missing side called out
    /// - Incomplete water: pattern `Neutral`
    pub fn analyze(survey: &SiteSurvey) -> CompositeSiteResult {
        let dragon = Self::assess_dragon(survey.dragon);
        let cave = Self::assess_cave(survey.dragon, survey.cave);
        let sand = Self::assess_sand(survey.left_flank, survey.right_flank);
        let water = Self::assess_water(survey.water_in, survey.water_out, survey.cave);

        let scores = [
            dragon.quality.score(),
            cave.energy.score(),
            sand.balance.score(),
            water.pattern.score(),
        ];
        let overall_score =
            scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64;

        let recommendations = Self::recommendations(overall_score, &dragon, &cave, &sand, &water);

        CompositeSiteResult {
            dragon,
            cave,
            sand,
            water,
            overall_score,
            overall: Percentage::from_f64(overall_score),
            recommendations,
        }
    }

    /// Rates the dragon vein by the element of its mountain.
    pub fn assess_dragon(direction: Mountain) -> DragonAssessment {
        let element = direction.element();
        let quality = DragonQuality::for_element(element);
        let description = match quality {
            DragonQuality::Excellent => format!("来龙有力，{}气充沛，主贵", element),
            DragonQuality::Good => format!("龙脉平稳，{}气适中，主富", element),
            DragonQuality::Poor => "龙气不足，需要补强".to_string(),
        };

        DragonAssessment {
            direction,
            quality,
            description,
        }
    }

    /// Rates the cave by how the dragon's element feeds it.
    pub fn assess_cave(dragon: Mountain, position: Mountain) -> CaveAssessment {
        let relationship = relationship_of(dragon.element(), position.element());
        let energy = if relationship == Relationship::Compatible || relationship.is_generating() {
            CaveEnergy::Strong
        } else if relationship.is_controlling() {
            CaveEnergy::Weak
        } else {
            CaveEnergy::Moderate
        };
        let description = match energy {
            CaveEnergy::Strong => "穴位得龙气滋养，能量充沛",
            CaveEnergy::Moderate => "穴位能量适中，可用",
            CaveEnergy::Weak => "穴位能量不足，需要培补",
        };

        CaveAssessment {
            position,
            relationship,
            energy,
            description: description.to_string(),
        }
    }

    /// Compares the left (green dragon) and right (white tiger) flanks.
    pub fn assess_sand(left: Option<Mountain>, right: Option<Mountain>) -> SandAssessment {
        let (balance, description) = match (left, right) {
            (None, None) => (SandBalance::Balanced, "左右无护砂，需要加强防护"),
            (Some(_), None) => (SandBalance::LeftHeavy, "缺右护砂，白虎位空虚"),
            (None, Some(_)) => (SandBalance::RightHeavy, "缺左护砂，青龙位不足"),
            (Some(l), Some(r)) => {
                let left_strength = sand_strength(l.element());
                let right_strength = sand_strength(r.element());
                if (left_strength - right_strength).abs() <= 1 {
                    (SandBalance::Balanced, "青龙白虎相配，左右护持有力")
                } else if left_strength > right_strength {
                    (SandBalance::LeftHeavy, "左右失衡，需要调整")
                } else {
                    (SandBalance::RightHeavy, "左右失衡，需要调整")
                }
            }
        };

        SandAssessment {
            left_green_dragon: left,
            right_white_tiger: right,
            balance,
            description: description.to_string(),
        }
    }

    /// Judges water flow: incoming should feed the cave, outgoing should
    /// be fed by (or match) it.
    pub fn assess_water(
        incoming: Option<Mountain>,
        outgoing: Option<Mountain>,
        cave: Mountain,
    ) -> WaterAssessment {
        let (pattern, description) = match (incoming, outgoing) {
            (None, None) => (WaterPattern::Neutral, "无明显水势，需要引水造势"),
            (Some(water_in), Some(water_out)) => {
                let incoming_rel = relationship_of(water_in.element(), cave.element());
                let outgoing_rel = relationship_of(cave.element(), water_out.element());

                if incoming_rel.is_generating()
                    && (outgoing_rel.is_generating() || outgoing_rel == Relationship::Compatible)
                {
                    (WaterPattern::Auspicious, "来水有情，去水有力，财源广进")
                } else if incoming_rel == Relationship::Conflicting
                    || outgoing_rel == Relationship::Conflicting
                {
                    (WaterPattern::Inauspicious, "水势不利，需要化解")
                } else {
                    (WaterPattern::Neutral, "水势平平，需要调整改善")
                }
            }
            _ => (WaterPattern::Neutral, "水势不完整，需要综合调理"),
        };

        WaterAssessment {
            incoming,
            outgoing,
            pattern,
            description: description.to_string(),
        }
    }

    fn recommendations(
        overall_score: f64,
        dragon: &DragonAssessment,
        cave: &CaveAssessment,
        sand: &SandAssessment,
        water: &WaterAssessment,
    ) -> Vec<String> {
        let mut lines = Vec::new();

        let headline = if overall_score >= SITE_AUSPICIOUS_THRESHOLD {
            "龙真穴的，大吉之地"
        } else if overall_score >= SITE_ACCEPTABLE_THRESHOLD {
            "地势尚可，稍作调整可成佳局"
        } else {
            "需要重新考虑选址或大幅调整"
        };
        lines.push(headline.to_string());

        if dragon.quality != DragonQuality::Excellent {
            lines.push("加强来龙之势，可在龙脉方位设置靠山".to_string());
        }

        if cave.energy != CaveEnergy::Strong {
            lines.push("培补穴位之气，可在穴位周边聚气藏风".to_string());
        }

        match sand.balance {
            SandBalance::Balanced => {}
            SandBalance::LeftHeavy => lines.push("调整左右护砂，加强右侧防护".to_string()),
            SandBalance::RightHeavy => lines.push("调整左右护砂，加强左侧防护".to_string()),
        }

        if water.pattern != WaterPattern::Auspicious {
            lines.push("优化水流方向，确保去水有情".to_string());
        }

        lines
    }
}
