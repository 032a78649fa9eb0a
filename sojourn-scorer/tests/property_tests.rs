//! Property-based tests for the scoring strategies.
//!
//! These assert invariants that must hold for every valid input,
//! complementing the example-based unit and behaviour tests:
//!
//! - **Scale compliance:** fuzzy scores stay in `0.0..=1.0`, legacy scores
//!   in `0.0..=10.0`, both always finite.
//! - **Similarity bounds:** Jaccard overlap is symmetric and in
//!   `0.0..=1.0`.
//! - **Distance monotonicity:** the "near" membership never rises as a
//!   place moves further beyond the near peak.

#![expect(
    clippy::float_arithmetic,
    reason = "property tests perturb inputs arithmetically"
)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use sojourn_core::{
    Candidate, DestinationScorer, Place, PriceBand, Season, Setting, TravellerProfile, jaccard,
};
use sojourn_scorer::{Memberships, WeightedFuzzyScorer, evaluate_destination};

const TAG_POOL: [&str; 6] = ["nature", "food", "art", "shopping", "hiking", "museum"];

fn arb_tags() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::sample::subsequence(TAG_POOL.to_vec(), 0..TAG_POOL.len())
        .prop_map(|tags| tags.into_iter().map(str::to_owned).collect())
}

fn arb_setting() -> impl Strategy<Value = Setting> {
    prop_oneof![
        Just(Setting::Indoor),
        Just(Setting::Outdoor),
        Just(Setting::Mixed),
    ]
}

fn arb_place() -> impl Strategy<Value = Place> {
    (
        "[a-z]{1,8}",
        arb_tags(),
        0.0_f64..1000.0,
        0.0_f32..=5.0,
        arb_setting(),
        any::<bool>(),
    )
        .prop_map(|(id, tags, cost, rating, setting, wet_only)| {
            let mut place = Place {
                id,
                tags,
                price_band: PriceBand::from_cost(cost),
                setting,
                rating,
                ..Place::default()
            };
            if wet_only {
                place.season_best = std::iter::once("wet".to_owned()).collect();
            }
            place
        })
}

fn arb_traveller() -> impl Strategy<Value = TravellerProfile> {
    (
        0.0_f32..=1.0,
        0.0_f32..=1.0,
        proptest::sample::subsequence(TAG_POOL.to_vec(), 0..TAG_POOL.len()),
        any::<bool>(),
    )
        .prop_map(|(budget, weather, interests, wet)| {
            TravellerProfile::new()
                .with_budget(budget)
                .with_weather(weather)
                .with_interests(interests)
                .with_season(if wet { Season::Wet } else { Season::Dry })
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the fuzzy score is finite and within the unit scale for
    /// any well-formed candidate and traveller.
    #[test]
    fn fuzzy_scores_stay_in_the_unit_range(
        place in arb_place(),
        distance_km in 0.0_f32..20.0,
        traveller in arb_traveller(),
    ) {
        let candidate = Candidate::new(place, distance_km);
        let evaluation = WeightedFuzzyScorer.evaluate(&candidate, &traveller);
        prop_assert!(evaluation.score.is_finite());
        prop_assert!(
            (0.0..=1.0).contains(&evaluation.score),
            "score {} escaped the unit scale",
            evaluation.score
        );
    }

    /// Property: the legacy formula never leaves the 0-10 scale, even for
    /// out-of-band budgets and popularity figures.
    #[test]
    fn legacy_scores_stay_in_the_ten_range(
        budget in -1000.0_f32..30000.0,
        popularity in -5.0_f32..15.0,
    ) {
        let score = evaluate_destination(budget, popularity, "Nature", "Nature");
        prop_assert!(score.is_finite());
        prop_assert!((0.0..=10.0).contains(&score));
    }

    /// Property: Jaccard overlap is bounded and symmetric.
    #[test]
    fn jaccard_is_bounded_and_symmetric(a in arb_tags(), b in arb_tags()) {
        let forward = jaccard(&a, &b);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert_eq!(forward, jaccard(&b, &a));
    }

    /// Property: moving a place further beyond the near peak never makes
    /// it more "near".
    #[test]
    fn near_membership_is_monotone_beyond_the_peak(
        start in 0.8_f32..10.0,
        delta in 0.0_f32..10.0,
    ) {
        let traveller = TravellerProfile::new();
        let near_at = |distance_km: f32| {
            Memberships::evaluate(&Candidate::new(Place::default(), distance_km), &traveller).near
        };
        prop_assert!(near_at(start + delta) <= near_at(start));
    }
}
