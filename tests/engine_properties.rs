//! Property-based tests for the compass engine.
//!
//! Uses proptest to verify that sector mapping is total and strategy-independent,
//! that the static tables are self-consistent, and that every analyzer stays
//! within its score bounds for all inputs.

use proptest::prelude::*;

use luopan::domain::analysis::{
    ElementalProfile, FacingRecommender, SiteAnalyzer, SiteSurvey, SittingFacingAnalyzer,
    RATIONALE_AVOID_LIMIT,
};
use luopan::domain::compass::{
    normalize_degrees, relationship_of, Element, Mountain, SectorLookup, SectorMapper,
};
use luopan::domain::foundation::Percentage;

fn mountain() -> impl Strategy<Value = Mountain> {
    prop::sample::select(Mountain::all().to_vec())
}

fn element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::all().to_vec())
}

fn elements() -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec(element(), 0..6)
}

// =============================================================================
// Sector Mapping Properties
// =============================================================================

proptest! {
    /// Every finite bearing lands in the mountain whose range contains it.
    #[test]
    fn prop_mapping_is_total(angle in -1.0e6f64..1.0e6) {
        let normalized = normalize_degrees(angle);
        prop_assert!((0.0..360.0).contains(&normalized));

        let found = SectorMapper::new(SectorLookup::Scan).sector_of(angle);
        prop_assert!(found.range().contains(normalized));
    }

    /// Scan and bucket strategies agree on every input.
    #[test]
    fn prop_strategies_agree(angle in -1.0e6f64..1.0e6) {
        let scan = SectorMapper::new(SectorLookup::Scan).sector_of(angle);
        let bucket = SectorMapper::new(SectorLookup::Bucket).sector_of(angle);
        prop_assert_eq!(scan, bucket);
    }

    /// Adding whole turns never changes the mountain.
    #[test]
    fn prop_full_turns_are_invisible(m in mountain(), offset in -7.0f64..7.0, turns in -5i32..5) {
        let angle = m.range().center + offset + 360.0 * f64::from(turns);
        prop_assert_eq!(SectorMapper::default().sector_of(angle), m);
    }

    /// The bearing half a turn away from a mountain lands in its opposite.
    #[test]
    fn prop_half_turn_lands_in_opposite(m in mountain(), offset in -7.0f64..7.0) {
        let angle = m.range().center + offset;
        let mapper = SectorMapper::default();
        prop_assert_eq!(mapper.sector_of(angle), m);
        prop_assert_eq!(mapper.sector_of(angle + 180.0), m.opposite());
    }
}

// =============================================================================
// Registry and Relationship Properties
// =============================================================================

proptest! {
    /// Opposite is an involution and never the identity.
    #[test]
    fn prop_opposite_involution(m in mountain()) {
        prop_assert_eq!(m.opposite().opposite(), m);
        prop_assert_ne!(m.opposite(), m);
    }

    /// Reversing the pair mirrors the relationship.
    #[test]
    fn prop_relationship_mirror(a in element(), b in element()) {
        prop_assert_eq!(relationship_of(b, a), relationship_of(a, b).mirrored());
    }
}

// =============================================================================
// Analyzer Properties
// =============================================================================

proptest! {
    /// Sitting/facing analysis is deterministic and bounded.
    #[test]
    fn prop_sitting_facing_bounded(sitting in mountain(), facing in mountain()) {
        let first = SittingFacingAnalyzer::analyze(sitting, facing);
        let second = SittingFacingAnalyzer::analyze(sitting, facing);
        prop_assert_eq!(&first, &second);

        for score in [
            first.aspects.wealth,
            first.aspects.health,
            first.aspects.relationships,
            first.aspects.career,
        ] {
            prop_assert!(score.value() <= 100);
            prop_assert!(score >= first.base_score);
        }
        prop_assert!(first.recommendations.len() >= 2);
        prop_assert!(first.recommendations.len() <= 4);
        prop_assert_eq!(first.label(), format!("{}山{}向", sitting, facing));
    }

    /// The site score is the bounded mean of the four sub-scores.
    #[test]
    fn prop_site_score_bounded(
        dragon in mountain(),
        cave in mountain(),
        left in proptest::option::of(mountain()),
        right in proptest::option::of(mountain()),
        water_in in proptest::option::of(mountain()),
        water_out in proptest::option::of(mountain()),
    ) {
        let survey = SiteSurvey::new(dragon, cave)
            .with_flanks(left, right)
            .with_water(water_in, water_out);
        let result = SiteAnalyzer::analyze(&survey);

        prop_assert!(result.overall_score >= 0.0);
        prop_assert!(result.overall_score <= 100.0);
        prop_assert_eq!(result.overall, Percentage::from_f64(result.overall_score));
        prop_assert!(!result.recommendations.is_empty());
        prop_assert_eq!(&result, &SiteAnalyzer::analyze(&survey));
    }

    /// The recommender always picks a facing opposite its choice, drawn
    /// from the recommended list whenever that list is non-empty.
    #[test]
    fn prop_recommendation_consistent(
        anchor in element(),
        favorable in elements(),
        unfavorable in elements(),
    ) {
        let profile = ElementalProfile::new(anchor, favorable.clone(), unfavorable.clone());
        let rec = FacingRecommender::recommend(&profile);

        prop_assert_eq!(rec.facing, rec.best_choice.opposite());
        if rec.recommended.is_empty() {
            prop_assert_eq!(rec.best_choice, Mountain::Zi);
        } else {
            prop_assert!(rec.recommended.contains(&rec.best_choice));
        }
        prop_assert!(rec.recommended.iter().all(|m| favorable.contains(&m.element())));
        prop_assert!(rec.avoid.iter().all(|m| unfavorable.contains(&m.element())));

        let named = rec.avoid.iter().take(RATIONALE_AVOID_LIMIT);
        for m in named {
            prop_assert!(rec.rationale.contains(m.glyph()));
        }
        prop_assert_eq!(&rec, &FacingRecommender::recommend(&profile));
    }
}
