//! Sitting-Facing Analyzer - compatibility of a sitting/facing mountain pair.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::compass::{relationship_of, Element, Mountain, Relationship};
use crate::domain::foundation::Percentage;

/// Qualitative tier of an orientation, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    Excellent,
    Good,
    Neutral,
    Bad,
    Terrible,
}

impl Compatibility {
    /// Tier and base score implied by an element relationship.
    ///
    /// Both generating directions score alike, as do both controlling ones.
    pub fn from_relationship(relationship: Relationship) -> (Compatibility, i32) {
        match relationship {
            Relationship::Compatible => (Compatibility::Excellent, 90),
            Relationship::GeneratingForward | Relationship::GeneratingReverse => {
                (Compatibility::Good, 75)
            }
            Relationship::Neutral => (Compatibility::Neutral, 50),
            Relationship::Controlling => (Compatibility::Bad, 30),
            Relationship::Conflicting => (Compatibility::Terrible, 15),
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Compatibility::Excellent => "Excellent",
            Compatibility::Good => "Good",
            Compatibility::Neutral => "Neutral",
            Compatibility::Bad => "Bad",
            Compatibility::Terrible => "Terrible",
        }
    }

    fn advice(&self) -> &'static [&'static str] {
        match self {
            Compatibility::Excellent => &[
                "此坐向为上吉之局，宜保持现状",
                "可在面向方位摆放聚财物品增强运势",
            ],
            Compatibility::Good => &[
                "坐向较为理想，稍作调整可更佳",
                "建议在坐山方位加强靠山之势",
            ],
            Compatibility::Neutral => &[
                "坐向平平，需要通过其他风水布局改善",
                "可考虑调整门窗朝向优化气场",
            ],
            Compatibility::Bad => &["坐向欠佳，建议使用五行化解", "在关键位置摆放化煞物品"],
            Compatibility::Terrible => &["坐向大凶，须尽快化解", "建议请专业人士现场勘察调整"],
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Life aspect scored for an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Wealth,
    Health,
    Relationships,
    Career,
}

impl Aspect {
    /// Returns all aspects in report order.
    pub fn all() -> &'static [Aspect] {
        &[Aspect::Wealth, Aspect::Health, Aspect::Relationships, Aspect::Career]
    }

    /// Bonus for an ordered (sitting element, facing element) pair.
    pub fn bonus(&self, sitting: Element, facing: Element) -> i32 {
        let table: &[(Element, Element, i32)] = match self {
            Aspect::Wealth => &[
                (Element::Earth, Element::Metal, 20),
                (Element::Metal, Element::Water, 15),
                (Element::Water, Element::Wood, 10),
                (Element::Wood, Element::Fire, 5),
            ],
            Aspect::Health => &[
                (Element::Wood, Element::Fire, 20),
                (Element::Fire, Element::Earth, 15),
                (Element::Earth, Element::Metal, 10),
                (Element::Metal, Element::Water, 5),
            ],
            Aspect::Relationships => &[
                (Element::Water, Element::Wood, 20),
                (Element::Wood, Element::Fire, 15),
                (Element::Fire, Element::Earth, 10),
                (Element::Earth, Element::Metal, 5),
            ],
            Aspect::Career => &[
                (Element::Metal, Element::Water, 20),
                (Element::Water, Element::Wood, 15),
                (Element::Wood, Element::Fire, 10),
                (Element::Fire, Element::Earth, 5),
            ],
        };
        table
            .iter()
            .find(|(s, f, _)| *s == sitting && *f == facing)
            .map(|(_, _, bonus)| *bonus)
            .unwrap_or(0)
    }
}

/// Per-aspect scores, each clamped to 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectScores {
    pub wealth: Percentage,
    pub health: Percentage,
    pub relationships: Percentage,
    pub career: Percentage,
}

impl AspectScores {
    /// Scores every aspect from a shared base plus its own bonus.
    pub fn compute(base_score: i32, sitting: Element, facing: Element) -> Self {
        let score = |aspect: Aspect| Percentage::clamped(base_score + aspect.bonus(sitting, facing));
        Self {
            wealth: score(Aspect::Wealth),
            health: score(Aspect::Health),
            relationships: score(Aspect::Relationships),
            career: score(Aspect::Career),
        }
    }

    /// Returns the score for one aspect.
    pub fn get(&self, aspect: Aspect) -> Percentage {
        match aspect {
            Aspect::Wealth => self.wealth,
            Aspect::Health => self.health,
            Aspect::Relationships => self.relationships,
            Aspect::Career => self.career,
        }
    }
}

/// Unordered pair of mountains, stored with the lower registry index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountainPair(Mountain, Mountain);

impl MountainPair {
    /// Creates the pair; argument order does not matter.
    pub fn new(a: Mountain, b: Mountain) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// Returns both members, lower registry index first.
    pub fn members(&self) -> (Mountain, Mountain) {
        (self.0, self.1)
    }
}

/// A named classical orientation whose tier overrides the element rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCombination {
    pub compatibility: Compatibility,
    pub description: &'static str,
}

static SPECIAL_COMBINATIONS: Lazy<HashMap<MountainPair, SpecialCombination>> = Lazy::new(|| {
    let entries = [
        (Mountain::Zi, Mountain::Wu, Compatibility::Excellent, "子山午向，正南正北，君子正位"),
        (Mountain::Mao, Mountain::You, Compatibility::Excellent, "卯山酉向，正东正西，日月对照"),
        (Mountain::Xun, Mountain::Qian, Compatibility::Good, "巽山乾向，文昌得位"),
        (Mountain::Kun, Mountain::Gen, Compatibility::Good, "坤山艮向，土气稳重"),
        (Mountain::Hai, Mountain::Si, Compatibility::Bad, "亥山巳向，水火相冲"),
        (Mountain::Yin, Mountain::Shen, Compatibility::Bad, "寅山申向，虎猴相冲"),
    ];

    entries
        .into_iter()
        .map(|(a, b, compatibility, description)| {
            (
                MountainPair::new(a, b),
                SpecialCombination {
                    compatibility,
                    description,
                },
            )
        })
        .collect()
});

/// Looks up the special combination for a pair, in either order.
pub fn special_combination(a: Mountain, b: Mountain) -> Option<&'static SpecialCombination> {
    SPECIAL_COMBINATIONS.get(&MountainPair::new(a, b))
}

/// Result of analysing one sitting/facing orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SittingFacingResult {
    pub sitting: Mountain,
    pub facing: Mountain,
    /// Element relationship from the sitting mountain towards the facing one.
    pub relationship: Relationship,
    pub compatibility: Compatibility,
    pub rationale: String,
    /// True when a named classical combination set the tier and rationale.
    pub special_combination: bool,
    /// Relationship-derived base score that the aspect scores build on.
    pub base_score: Percentage,
    pub aspects: AspectScores,
    pub recommendations: Vec<String>,
}

impl SittingFacingResult {
    /// Traditional "X山Y向" label.
    pub fn label(&self) -> String {
        orientation_label(self.sitting, self.facing)
    }
}

/// Traditional "X山Y向" label for a sitting/facing pair.
pub fn orientation_label(sitting: Mountain, facing: Mountain) -> String {
    format!("{}山{}向", sitting, facing)
}

/// Element decoration suggestions, in the order they are offered.
const ELEMENT_SUGGESTIONS: [(Element, &str); 5] = [
    (Element::Water, "可摆放水晶或玻璃制品增强水气"),
    (Element::Wood, "适合摆放绿植或木质装饰"),
    (Element::Fire, "可使用红色装饰或照明增强火气"),
    (Element::Earth, "适合摆放陶瓷或石材装饰"),
    (Element::Metal, "可摆放金属制品或白色装饰"),
];

/// Analyzer for sitting/facing orientations.
pub struct SittingFacingAnalyzer;

impl SittingFacingAnalyzer {
    /// Analyzes an orientation.
    ///
    /// # Algorithm
    /// 1. Resolve the sitting→facing element relationship into a tier and base score
    /// 2. A named special combination (either order) replaces tier and rationale
    /// 3. Aspect scores = base score + ordered element-pair bonus, clamped
    /// 4. Two tier lines, then one decoration line per distinct element
    ///
    /// The base score is never replaced by a special combination, so an
    /// overridden tier can sit next to aspect scores from a lower base.
    pub fn analyze(sitting: Mountain, facing: Mountain) -> SittingFacingResult {
        let sitting_element = sitting.element();
        let facing_element = facing.element();
        let relationship = relationship_of(sitting_element, facing_element);
        let (mut compatibility, base_score) = Compatibility::from_relationship(relationship);
        let mut rationale = relationship.describe(sitting_element, facing_element);

        let special = special_combination(sitting, facing);
        if let Some(combo) = special {
            compatibility = combo.compatibility;
            rationale = combo.description.to_string();
        }

        let aspects = AspectScores::compute(base_score, sitting_element, facing_element);
        let recommendations =
            Self::recommendations(compatibility, sitting_element, facing_element);

        SittingFacingResult {
            sitting,
            facing,
            relationship,
            compatibility,
            rationale,
            special_combination: special.is_some(),
            base_score: Percentage::clamped(base_score),
            aspects,
            recommendations,
        }
    }

    /// Builds the recommendation list for a tier and the two end elements.
    pub fn recommendations(
        compatibility: Compatibility,
        sitting: Element,
        facing: Element,
    ) -> Vec<String> {
        let mut lines: Vec<String> = compatibility
            .advice()
            .iter()
            .map(|line| line.to_string())
            .collect();

        lines.extend(
            ELEMENT_SUGGESTIONS
                .iter()
                .filter(|(element, _)| *element == sitting || *element == facing)
                .map(|(_, line)| line.to_string()),
        );

        lines
    }
}
