//! The legacy crisp scoring strategy.
//!
//! An older generation of the recommender scored destinations on a 0-10
//! scale from four crisp inputs: a currency budget, a 0-10 popularity
//! figure, and a single interest/category label pair. It survives here as
//! an alternate strategy built on the same membership library as the fuzzy
//! scorer, with its original gating semantics intact: a band participates
//! when its membership is non-zero at all, regardless of magnitude.
#![forbid(unsafe_code)]

use sojourn_core::{
    Candidate, DestinationScorer, Evaluation, ScoreScale, TravellerProfile, canonical_tag,
};
use thiserror::Error;

use crate::membership::MembershipFn;

// Budget bands in currency units.
const LOW_BUDGET: MembershipFn = MembershipFn::Trapezoidal {
    a: 0.0,
    b: 0.0,
    c: 1500.0,
    d: 3000.0,
};
const MEDIUM_BUDGET: MembershipFn = MembershipFn::Triangular {
    a: 2000.0,
    b: 5000.0,
    c: 8000.0,
};
const HIGH_BUDGET: MembershipFn = MembershipFn::Trapezoidal {
    a: 6000.0,
    b: 9000.0,
    c: 12000.0,
    d: 12000.0,
};

// Popularity bands over the 0-10 scale.
const LOW_POPULARITY: MembershipFn = MembershipFn::Trapezoidal {
    a: 0.0,
    b: 0.0,
    c: 2.0,
    d: 4.0,
};
const MEDIUM_POPULARITY: MembershipFn = MembershipFn::Triangular {
    a: 3.0,
    b: 5.0,
    c: 7.0,
};
const HIGH_POPULARITY: MembershipFn = MembershipFn::Trapezoidal {
    a: 6.0,
    b: 8.0,
    c: 10.0,
    d: 10.0,
};

const MAX_SCORE: f32 = 10.0;
const NATURE_BONUS: f32 = 1.0;
const RELAXATION_BONUS: f32 = 0.5;

/// Score a destination on the legacy 0-10 scale.
///
/// The base suitability comes from matching budget and popularity bands
/// (high pair 9, medium pair 7, low pair 3, otherwise 0), then flat
/// bonuses apply for an exact interest/category match: +1 for popular
/// nature trips, +0.5 for quiet relaxation trips. The result never
/// exceeds 10. Label comparison is exact and case-sensitive, as it always
/// was.
///
/// # Examples
/// ```
/// use sojourn_scorer::evaluate_destination;
///
/// let score = evaluate_destination(9500.0, 9.0, "Nature", "Nature");
/// assert_eq!(score, 10.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "bonus application adds flat increments to the base score"
)]
pub fn evaluate_destination(budget: f32, popularity: f32, interest: &str, category: &str) -> f32 {
    let low_budget = LOW_BUDGET.degree(budget);
    let medium_budget = MEDIUM_BUDGET.degree(budget);
    let high_budget = HIGH_BUDGET.degree(budget);
    let low_popularity = LOW_POPULARITY.degree(popularity);
    let medium_popularity = MEDIUM_POPULARITY.degree(popularity);
    let high_popularity = HIGH_POPULARITY.degree(popularity);

    let mut score = if high_budget > 0.0 && high_popularity > 0.0 {
        9.0
    } else if medium_budget > 0.0 && medium_popularity > 0.0 {
        7.0
    } else if low_budget > 0.0 && low_popularity > 0.0 {
        3.0
    } else {
        0.0
    };

    if interest == "Nature" && category == "Nature" && high_popularity > 0.0 {
        score += NATURE_BONUS;
    }
    if interest == "Relaxation" && category == "Relaxation" && low_popularity > 0.0 {
        score += RELAXATION_BONUS;
    }

    score.min(MAX_SCORE)
}

/// Errors raised when configuring the legacy scorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LegacyCrispError {
    /// The currency budget was NaN, infinite, or negative.
    #[error("budget must be a finite, non-negative amount")]
    InvalidBudget,
}

/// Adapter exposing the legacy formula as a [`DestinationScorer`] on
/// [`ScoreScale::Ten`].
///
/// The traveller-side inputs (currency budget, interest label) are
/// strategy configuration; per-place popularity is derived from the 0-5
/// rating, and the category counts as matching when the place's tag set
/// contains the canonicalised interest. Legacy scores carry no reason
/// tags.
///
/// # Examples
/// ```
/// use sojourn_core::{Candidate, DestinationScorer, Place, TravellerProfile};
/// use sojourn_scorer::LegacyCrispScorer;
///
/// let scorer = LegacyCrispScorer::new(9500.0, "Nature").unwrap();
/// let mut place = Place { rating: 4.5, ..Place::default() };
/// place.tags.insert("nature".to_owned());
///
/// let evaluation = scorer.evaluate(&Candidate::new(place, 1.0), &TravellerProfile::new());
/// assert_eq!(evaluation.score, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyCrispScorer {
    budget: f32,
    interest: String,
}

impl LegacyCrispScorer {
    /// Configure the strategy for one traveller.
    ///
    /// # Errors
    /// Returns [`LegacyCrispError::InvalidBudget`] when the budget is not
    /// a finite, non-negative amount.
    pub fn new(budget: f32, interest: impl Into<String>) -> Result<Self, LegacyCrispError> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(LegacyCrispError::InvalidBudget);
        }
        Ok(Self {
            budget,
            interest: interest.into(),
        })
    }

    /// Rescale a 0-5 rating onto the legacy 0-10 popularity axis.
    #[expect(
        clippy::float_arithmetic,
        reason = "popularity doubles the 0-5 rating"
    )]
    fn popularity(rating: f32) -> f32 {
        (rating * 2.0).clamp(0.0, MAX_SCORE)
    }
}

impl DestinationScorer for LegacyCrispScorer {
    fn evaluate(&self, candidate: &Candidate, _traveller: &TravellerProfile) -> Evaluation {
        let popularity = Self::popularity(candidate.place.rating);
        let category_matches = candidate
            .place
            .tags
            .contains(&canonical_tag(&self.interest));
        let category = if category_matches {
            self.interest.as_str()
        } else {
            ""
        };
        let raw = evaluate_destination(self.budget, popularity, &self.interest, category);
        Evaluation {
            score: Self::sanitise(raw, ScoreScale::Ten),
            reasons: Vec::new(),
        }
    }

    fn scale(&self) -> ScoreScale {
        ScoreScale::Ten
    }
}
