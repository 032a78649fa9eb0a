//! The scoring strategy seam.
//!
//! A [`DestinationScorer`] turns a `(candidate, traveller)` pair into a
//! score plus explanation reasons. Strategies differ in how they score and
//! in their output range, so every scorer declares a [`ScoreScale`];
//! scores from different scales must never be compared.

use crate::place::Candidate;
use crate::reason::Reason;
use crate::traveller::TravellerProfile;
use crate::Place;

/// The output range of a scoring strategy.
///
/// # Examples
/// ```
/// use sojourn_core::ScoreScale;
///
/// assert_eq!(ScoreScale::Unit.max(), 1.0);
/// assert_eq!(ScoreScale::Ten.as_str(), "0-10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreScale {
    /// Scores in `0.0..=1.0`.
    Unit,
    /// Scores in `0.0..=10.0`.
    Ten,
}

impl ScoreScale {
    /// Upper bound of the scale.
    pub const fn max(self) -> f32 {
        match self {
            Self::Unit => 1.0,
            Self::Ten => 10.0,
        }
    }

    /// Short textual form for reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unit => "0-1",
            Self::Ten => "0-10",
        }
    }
}

impl std::fmt::Display for ScoreScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of scoring one candidate.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Suitability score within the strategy's [`ScoreScale`].
    pub score: f32,
    /// Explanation tags in fixed evaluation order.
    pub reasons: Vec<Reason>,
}

/// A place together with its score and explanation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredPlace {
    /// The scored destination.
    pub place: Place,
    /// Suitability score within the strategy's [`ScoreScale`].
    pub score: f32,
    /// Explanation tags in fixed evaluation order.
    pub reasons: Vec<Reason>,
}

impl ScoredPlace {
    /// Attach an evaluation to the place it scored.
    pub fn new(place: Place, evaluation: Evaluation) -> Self {
        Self {
            place,
            score: evaluation.score,
            reasons: evaluation.reasons,
        }
    }
}

/// Calculate a suitability score for a candidate destination.
///
/// Higher scores indicate a better match between the place and the
/// traveller's preferences. Implementations must be thread-safe
/// (`Send + Sync`) so scoring can fan out across threads, and infallible:
/// malformed input degrades to a lower score, never an error.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
/// - Stay within the range declared by [`DestinationScorer::scale`].
///
/// Use [`DestinationScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use sojourn_core::{
///     Candidate, DestinationScorer, Evaluation, Place, ScoreScale, TravellerProfile,
/// };
///
/// struct UnitScorer;
///
/// impl DestinationScorer for UnitScorer {
///     fn evaluate(&self, _: &Candidate, _: &TravellerProfile) -> Evaluation {
///         Evaluation { score: 1.0, reasons: Vec::new() }
///     }
///
///     fn scale(&self) -> ScoreScale {
///         ScoreScale::Unit
///     }
/// }
///
/// let candidate = Candidate::new(Place::default(), 0.0);
/// let traveller = TravellerProfile::new();
/// assert_eq!(UnitScorer.evaluate(&candidate, &traveller).score, 1.0);
/// ```
pub trait DestinationScorer: Send + Sync {
    /// Score `candidate` according to `traveller`'s preferences.
    fn evaluate(&self, candidate: &Candidate, traveller: &TravellerProfile) -> Evaluation;

    /// The output range scores fall within.
    fn scale(&self) -> ScoreScale;

    /// Clamp and validate a raw score for the given scale.
    ///
    /// Returns `0.0` for non-finite values and clamps into
    /// `0.0..=scale.max()`.
    fn sanitise(score: f32, scale: ScoreScale) -> f32 {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, scale.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct HalfScorer;

    impl DestinationScorer for HalfScorer {
        fn evaluate(&self, _: &Candidate, _: &TravellerProfile) -> Evaluation {
            Evaluation {
                score: 0.5,
                reasons: vec![Reason::Near],
            }
        }

        fn scale(&self) -> ScoreScale {
            ScoreScale::Unit
        }
    }

    #[rstest]
    #[case(f32::NAN, 0.0)]
    #[case(f32::INFINITY, 0.0)]
    #[case(-0.3, 0.0)]
    #[case(1.7, 1.0)]
    #[case(0.4, 0.4)]
    fn sanitise_guards_the_unit_scale(#[case] raw: f32, #[case] expected: f32) {
        assert_eq!(HalfScorer::sanitise(raw, ScoreScale::Unit), expected);
    }

    #[rstest]
    fn sanitise_respects_the_ten_scale() {
        assert_eq!(HalfScorer::sanitise(11.0, ScoreScale::Ten), 10.0);
        assert_eq!(HalfScorer::sanitise(7.5, ScoreScale::Ten), 7.5);
    }

    #[rstest]
    fn scored_place_carries_the_evaluation() {
        let evaluation = HalfScorer.evaluate(
            &Candidate::new(Place::default(), 0.0),
            &TravellerProfile::new(),
        );
        let scored = ScoredPlace::new(Place::default(), evaluation);
        assert_eq!(scored.score, 0.5);
        assert_eq!(scored.reasons, vec![Reason::Near]);
    }
}
