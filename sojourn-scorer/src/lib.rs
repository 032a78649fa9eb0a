//! Scoring strategies for Sojourn destinations.
//!
//! The crate provides the two strategies of the recommendation engine and
//! the machinery they share:
//! - **Weighted fuzzy scoring** evaluates membership degrees across the
//!   budget, weather, distance, and interest axes, aggregates a weighted
//!   rule base into a `0.0..=1.0` score, and explains itself with ordered
//!   reason tags.
//! - **Legacy crisp scoring** reproduces the older 0-10 band formula over
//!   currency budgets and popularity, adapted to the same
//!   [`DestinationScorer`](sojourn_core::DestinationScorer) seam.
//!
//! Both strategies evaluate their linguistic labels through one shared
//! [`MembershipFn`] library, and [`RecommendationRanker`] turns either
//! into an ordered, memoised ranking.
//!
//! # Examples
//!
//! ```
//! use sojourn_core::{Candidate, Place, TravellerProfile};
//! use sojourn_scorer::{RecommendationRanker, WeightedFuzzyScorer};
//!
//! let mut park = Place::default();
//! park.tags.insert("nature".to_owned());
//!
//! let ranker = RecommendationRanker::new(WeightedFuzzyScorer);
//! let candidates = vec![
//!     Candidate::new(park, 0.5),
//!     Candidate::new(Place::default(), 7.0),
//! ];
//! let traveller = TravellerProfile::new().with_interest("nature");
//!
//! let ranked = ranker.rank(&candidates, &traveller);
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked.first().map(|s| s.score) >= ranked.last().map(|s| s.score));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod crisp;
mod fuzzy;
mod membership;
mod rank;

pub use crisp::{LegacyCrispError, LegacyCrispScorer, evaluate_destination};
pub use fuzzy::{Memberships, WeightedFuzzyScorer};
pub use membership::{MembershipError, MembershipFn};
pub use rank::RecommendationRanker;
