//! Facade crate for the Sojourn recommendation engine.
//!
//! This crate re-exports the core domain types, the normalisation
//! boundary, and the scoring strategies so applications can depend on a
//! single package.
//!
//! # Examples
//!
//! ```
//! use sojourn_engine::{
//!     Candidate, RawPlaceRecord, RecommendationRanker, TravellerProfile, WeightedFuzzyScorer,
//!     normalise_place,
//! };
//!
//! let raw = RawPlaceRecord {
//!     id: Some("park".to_owned()),
//!     categories: vec!["Nature".to_owned()],
//!     ..RawPlaceRecord::default()
//! };
//! let candidate = Candidate::new(normalise_place(raw), 0.5);
//! let traveller = TravellerProfile::new().with_interest("nature");
//!
//! let ranker = RecommendationRanker::new(WeightedFuzzyScorer);
//! let ranked = ranker.rank(&[candidate], &traveller);
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use sojourn_core::{
    Candidate, DestinationScorer, Evaluation, ParseSeasonError, ParseSettingError, Place,
    PlaceKind, PriceBand, RawCoordinates, RawPlaceRecord, Reason, ScoreScale, ScoredPlace, Season,
    Setting, TravellerProfile, canonical_tag, jaccard, normalise_place,
};

pub use sojourn_scorer::{
    LegacyCrispError, LegacyCrispScorer, MembershipError, MembershipFn, Memberships,
    RecommendationRanker, WeightedFuzzyScorer, evaluate_destination,
};
