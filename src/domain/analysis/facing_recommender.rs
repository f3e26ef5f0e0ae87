//! Optimal-Facing Recommender - picks a sitting mountain for an elemental profile.

use serde::{Deserialize, Serialize};

use crate::domain::compass::{is_generating_pair, Element, Mountain};

/// Maximum number of avoided mountains named in the rationale.
pub const RATIONALE_AVOID_LIMIT: usize = 3;

/// Elemental needs supplied by the birth-chart service.
///
/// The two sets are caller-defined and may overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalProfile {
    /// Anchor (year) element used to break ties among favorable mountains.
    pub anchor: Element,
    pub favorable: Vec<Element>,
    pub unfavorable: Vec<Element>,
}

impl ElementalProfile {
    /// Creates a profile.
    pub fn new(anchor: Element, favorable: Vec<Element>, unfavorable: Vec<Element>) -> Self {
        Self {
            anchor,
            favorable,
            unfavorable,
        }
    }
}

/// Recommended orientation for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacingRecommendation {
    /// Mountains whose element is favorable, in registry order.
    pub recommended: Vec<Mountain>,
    /// Mountains whose element is unfavorable, in registry order.
    pub avoid: Vec<Mountain>,
    /// Chosen sitting mountain.
    pub best_choice: Mountain,
    /// Facing mountain opposite the best choice.
    pub facing: Mountain,
    pub rationale: String,
}

/// Recommender for optimal sitting/facing by elemental profile.
pub struct FacingRecommender;

impl FacingRecommender {
    /// Recommends an orientation.
    ///
    /// # Algorithm
    /// 1. Partition the 24 mountains by favorable / unfavorable element
    ///    (a mountain may land in both lists)
    /// 2. Best choice = first recommended mountain whose element generates, or
    ///    is generated by, the anchor; else the first recommended; else 子
    /// 3. Facing = opposite of the best choice
    pub fn recommend(profile: &ElementalProfile) -> FacingRecommendation {
        let recommended: Vec<Mountain> = Mountain::all()
            .iter()
            .filter(|m| profile.favorable.contains(&m.element()))
            .copied()
            .collect();
        let avoid: Vec<Mountain> = Mountain::all()
            .iter()
            .filter(|m| profile.unfavorable.contains(&m.element()))
            .copied()
            .collect();

        let best_choice = recommended
            .iter()
            .find(|m| is_generating_pair(profile.anchor, m.element()))
            .or_else(|| recommended.first())
            .copied()
            .unwrap_or(Mountain::DEFAULT);
        let facing = best_choice.opposite();

        let rationale = Self::rationale(profile.anchor, best_choice, &avoid);

        FacingRecommendation {
            recommended,
            avoid,
            best_choice,
            facing,
            rationale,
        }
    }

    fn rationale(anchor: Element, best_choice: Mountain, avoid: &[Mountain]) -> String {
        let avoided: Vec<&str> = avoid
            .iter()
            .take(RATIONALE_AVOID_LIMIT)
            .map(|m| m.glyph())
            .collect();

        format!(
            "根据命理分析，年命属{}，宜坐{}向，最佳选择为{}山{}向。应避免{}等方位。",
            anchor,
            best_choice.element(),
            best_choice,
            best_choice.opposite(),
            avoided.join("、")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_by_favorable_and_unfavorable() {
        let profile = ElementalProfile::new(Element::Wood, vec![Element::Water], vec![Element::Metal]);
        let rec = FacingRecommender::recommend(&profile);
        assert_eq!(
            rec.recommended,
            vec![Mountain::Ren, Mountain::Zi, Mountain::Gui, Mountain::Hai]
        );
        assert_eq!(
            rec.avoid,
            vec![Mountain::Shen, Mountain::Geng, Mountain::You, Mountain::Xin, Mountain::Qian]
        );
    }

    #[test]
    fn best_choice_prefers_generating_relation_with_anchor() {
        // Favorable Earth and Fire; anchor Metal is generated by Earth.
        let profile = ElementalProfile::new(
            Element::Metal,
            vec![Element::Fire, Element::Earth],
            vec![],
        );
        let rec = FacingRecommender::recommend(&profile);
        // 丑 is the first Earth mountain and precedes every Fire mountain.
        assert_eq!(rec.best_choice, Mountain::Chou);
        assert_eq!(rec.facing, Mountain::Wei);
    }

    #[test]
    fn best_choice_skips_non_generating_mountains() {
        // Anchor Fire: Water (controls Fire) is favorable but not generating,
        // Wood generates Fire.
        let profile = ElementalProfile::new(
            Element::Fire,
            vec![Element::Water, Element::Wood],
            vec![],
        );
        let rec = FacingRecommender::recommend(&profile);
        assert_eq!(rec.recommended[0], Mountain::Ren);
        assert_eq!(rec.best_choice, Mountain::Yin);
        assert_eq!(rec.facing, Mountain::Shen);
    }

    #[test]
    fn falls_back_to_first_recommended() {
        // Anchor Metal, favorable Metal only: same element is not generating.
        let profile = ElementalProfile::new(Element::Metal, vec![Element::Metal], vec![]);
        let rec = FacingRecommender::recommend(&profile);
        assert_eq!(rec.best_choice, Mountain::Shen);
    }

    #[test]
    fn falls_back_to_north_when_nothing_recommended() {
        let profile = ElementalProfile::new(Element::Wood, vec![], vec![Element::Fire]);
        let rec = FacingRecommender::recommend(&profile);
        assert!(rec.recommended.is_empty());
        assert_eq!(rec.best_choice, Mountain::Zi);
        assert_eq!(rec.facing, Mountain::Wu);
    }

    #[test]
    fn overlapping_sets_list_mountains_in_both() {
        let profile = ElementalProfile::new(Element::Wood, vec![Element::Fire], vec![Element::Fire]);
        let rec = FacingRecommender::recommend(&profile);
        assert_eq!(rec.recommended, rec.avoid);
        assert_eq!(rec.recommended.len(), 4);
    }

    #[test]
    fn rationale_names_anchor_choice_and_first_three_avoided() {
        let profile = ElementalProfile::new(Element::Wood, vec![Element::Water], vec![Element::Metal]);
        let rec = FacingRecommender::recommend(&profile);
        assert_eq!(rec.best_choice, Mountain::Ren);
        assert_eq!(
            rec.rationale,
            "根据命理分析，年命属木，宜坐水向，最佳选择为壬山丙向。应避免申、庚、酉等方位。"
        );
    }

    #[test]
    fn rationale_with_empty_avoid_list() {
        let profile = ElementalProfile::new(Element::Earth, vec![Element::Fire], vec![]);
        let rec = FacingRecommender::recommend(&profile);
        assert_eq!(
            rec.rationale,
            "根据命理分析，年命属土，宜坐火向，最佳选择为巳山亥向。应避免等方位。"
        );
    }

    #[test]
    fn recommendation_is_deterministic() {
        let profile = ElementalProfile::new(
            Element::Water,
            vec![Element::Metal, Element::Wood],
            vec![Element::Earth],
        );
        let first = serde_json::to_string(&FacingRecommender::recommend(&profile)).unwrap();
        let second = serde_json::to_string(&FacingRecommender::recommend(&profile)).unwrap();
        assert_eq!(first, second);
    }
}
