//! The weighted fuzzy scoring strategy.
//!
//! Scoring runs in three steps: evaluate the membership degrees for every
//! linguistic label on the budget, weather, distance, and interest axes
//! (plus the crisp setting and season axes), fire the rule base, and
//! collect explanation reasons. Each rule's activation weight is the
//! minimum of the degrees feeding it; the final score is the
//! confidence-weighted average of the activations, so rules that do not
//! fire leave the average untouched instead of dragging it down.
#![forbid(unsafe_code)]

use sojourn_core::{
    Candidate, DestinationScorer, Evaluation, PriceBand, Reason, ScoreScale, Season, Setting,
    TravellerProfile, jaccard,
};

use crate::membership::MembershipFn;

// Rule confidences.
const HIGH: f32 = 0.9;
const MED: f32 = 0.6;
const LOW: f32 = 0.3;
const VLOW: f32 = 0.1;

// The rating rule contributes a fixed weight whose confidence is the
// rating itself, rescaled from 0-5.
const RATING_WEIGHT: f32 = 0.2;
const RATING_FULL_SCALE: f32 = 5.0;

// Budget axis, domain 0-1.
const BUDGET_LOW: MembershipFn = MembershipFn::Trapezoidal {
    a: 0.0,
    b: 0.0,
    c: 0.15,
    d: 0.4,
};
const BUDGET_MID: MembershipFn = MembershipFn::Triangular {
    a: 0.3,
    b: 0.5,
    c: 0.7,
};
const BUDGET_HIGH: MembershipFn = MembershipFn::Trapezoidal {
    a: 0.6,
    b: 0.85,
    c: 1.0,
    d: 1.0,
};

// Weather axis, domain 0-1. "Poor" is a left block with a hard right edge.
const WEATHER_POOR: MembershipFn = MembershipFn::Trapezoidal {
    a: 0.0,
    b: 0.2,
    c: 0.45,
    d: 0.45,
};
const WEATHER_FAIR: MembershipFn = MembershipFn::Triangular {
    a: 0.35,
    b: 0.55,
    c: 0.75,
};
const WEATHER_GREAT: MembershipFn = MembershipFn::Trapezoidal {
    a: 0.6,
    b: 0.85,
    c: 1.0,
    d: 1.0,
};

// Distance axis in kilometres.
const DISTANCE_NEAR: MembershipFn = MembershipFn::Triangular {
    a: 0.0,
    b: 0.8,
    c: 1.6,
};
const DISTANCE_MODERATE: MembershipFn = MembershipFn::Triangular {
    a: 1.0,
    b: 2.5,
    c: 4.5,
};
const DISTANCE_FAR: MembershipFn = MembershipFn::Triangular {
    a: 3.5,
    b: 6.0,
    c: 8.0,
};

// Interest axis over the Jaccard overlap of interests and tags. "Strong"
// is a shoulder so a perfect overlap saturates at full membership.
const INTEREST_NONE: MembershipFn = MembershipFn::Triangular {
    a: 0.0,
    b: 0.0,
    c: 0.2,
};
const INTEREST_PARTIAL: MembershipFn = MembershipFn::Triangular {
    a: 0.15,
    b: 0.45,
    c: 0.75,
};
const INTEREST_STRONG: MembershipFn = MembershipFn::Trapezoidal {
    a: 0.6,
    b: 0.85,
    c: 1.0,
    d: 1.0,
};

/// Membership degrees for one `(candidate, traveller)` pair.
///
/// Exposed so callers and tests can inspect why a score came out the way
/// it did without re-deriving the fuzzy axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Memberships {
    /// Degree to which the traveller's budget reads as low.
    pub budget_low: f32,
    /// Degree to which the budget reads as mid-range.
    pub budget_mid: f32,
    /// Degree to which the budget reads as high.
    pub budget_high: f32,
    /// Degree to which the weather reads as poor.
    pub weather_poor: f32,
    /// Degree to which the weather reads as fair.
    pub weather_fair: f32,
    /// Degree to which the weather reads as great.
    pub weather_great: f32,
    /// Degree to which the place reads as near.
    pub near: f32,
    /// Degree to which the place reads as moderately distant.
    pub moderate: f32,
    /// Degree to which the place reads as far.
    pub far: f32,
    /// Degree to which the interest overlap reads as absent.
    pub interest_none: f32,
    /// Degree to which the interest overlap reads as partial.
    pub interest_partial: f32,
    /// Degree to which the interest overlap reads as strong.
    pub interest_strong: f32,
    /// Crisp indoor degree: 1 indoor, 0.5 mixed, 0 outdoor.
    pub indoor: f32,
    /// Crisp outdoor degree: 1 outdoor, 0.5 mixed, 0 indoor.
    pub outdoor: f32,
    /// Crisp season fit: 1 when the place suits the season (or all
    /// seasons), 0.5 otherwise.
    pub season_fit: f32,
}

impl Memberships {
    /// Evaluate every axis for the pair.
    #[must_use]
    pub fn evaluate(candidate: &Candidate, traveller: &TravellerProfile) -> Self {
        let place = &candidate.place;
        let interest = jaccard(traveller.interests(), &place.tags);
        Self {
            budget_low: BUDGET_LOW.degree(traveller.budget()),
            budget_mid: BUDGET_MID.degree(traveller.budget()),
            budget_high: BUDGET_HIGH.degree(traveller.budget()),
            weather_poor: WEATHER_POOR.degree(traveller.weather()),
            weather_fair: WEATHER_FAIR.degree(traveller.weather()),
            weather_great: WEATHER_GREAT.degree(traveller.weather()),
            near: DISTANCE_NEAR.degree(candidate.distance_km),
            moderate: DISTANCE_MODERATE.degree(candidate.distance_km),
            far: DISTANCE_FAR.degree(candidate.distance_km),
            interest_none: INTEREST_NONE.degree(interest),
            interest_partial: INTEREST_PARTIAL.degree(interest),
            interest_strong: INTEREST_STRONG.degree(interest),
            indoor: indoor_degree(place.setting),
            outdoor: outdoor_degree(place.setting),
            season_fit: season_fit(place, traveller.season()),
        }
    }
}

const fn indoor_degree(setting: Setting) -> f32 {
    match setting {
        Setting::Indoor => 1.0,
        Setting::Mixed => 0.5,
        Setting::Outdoor => 0.0,
    }
}

const fn outdoor_degree(setting: Setting) -> f32 {
    match setting {
        Setting::Outdoor => 1.0,
        Setting::Mixed => 0.5,
        Setting::Indoor => 0.0,
    }
}

fn season_fit(place: &sojourn_core::Place, season: Season) -> f32 {
    if place.season_best.contains("all") || place.season_best.contains(season.as_str()) {
        1.0
    } else {
        0.5
    }
}

const fn indicator(condition: bool) -> f32 {
    if condition { 1.0 } else { 0.0 }
}

/// Running confidence-weighted average over rule activations.
///
/// A rule with zero activation adds zero to both sums, so it neither
/// raises nor lowers the final average.
#[derive(Debug, Clone, Copy, Default)]
struct WeightedRules {
    numerator: f32,
    denominator: f32,
}

impl WeightedRules {
    #[expect(
        clippy::float_arithmetic,
        reason = "rule aggregation accumulates weighted confidences"
    )]
    fn fire(&mut self, weight: f32, confidence: f32) {
        self.numerator += weight * confidence;
        self.denominator += weight;
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the score is the weighted average of rule activations"
    )]
    fn average(self) -> f32 {
        if self.denominator > 0.0 {
            self.numerator / self.denominator
        } else {
            0.0
        }
    }
}

/// The primary scoring strategy: weighted fuzzy rules over the traveller
/// and place axes, scored on [`ScoreScale::Unit`].
///
/// The scorer is stateless; share it freely across threads.
///
/// # Examples
/// ```
/// use sojourn_core::{Candidate, DestinationScorer, Place, Reason, Setting, TravellerProfile};
/// use sojourn_scorer::WeightedFuzzyScorer;
///
/// let mut place = Place::default();
/// place.tags.insert("nature".to_owned());
/// place.setting = Setting::Outdoor;
/// let candidate = Candidate::new(place, 0.5);
///
/// let traveller = TravellerProfile::new()
///     .with_weather(0.9)
///     .with_interest("nature");
///
/// let evaluation = WeightedFuzzyScorer.evaluate(&candidate, &traveller);
/// assert!(evaluation.score > 0.5);
/// assert!(evaluation.reasons.contains(&Reason::StrongInterestMatch));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedFuzzyScorer;

impl WeightedFuzzyScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the rating confidence rescales the 0-5 rating"
    )]
    fn rating_confidence(rating: f32) -> f32 {
        (rating / RATING_FULL_SCALE).clamp(0.0, 1.0)
    }

    /// Fire the rule base in its fixed order.
    fn aggregate(memberships: &Memberships, candidate: &Candidate) -> f32 {
        let band = candidate.place.price_band;
        let mut rules = WeightedRules::default();
        rules.fire(
            memberships
                .budget_low
                .min(indicator(band == PriceBand::Budget)),
            HIGH,
        );
        rules.fire(
            memberships
                .budget_high
                .min(indicator(band == PriceBand::Premium)),
            HIGH,
        );
        rules.fire(memberships.interest_strong, HIGH);
        rules.fire(memberships.interest_partial, MED);
        rules.fire(memberships.near, HIGH);
        rules.fire(memberships.far.min(memberships.weather_great), MED);
        rules.fire(memberships.weather_poor.min(memberships.indoor), HIGH);
        rules.fire(memberships.weather_great.min(memberships.outdoor), HIGH);
        rules.fire(memberships.season_fit, MED);
        rules.fire(
            memberships.budget_low.min(indicator(band >= PriceBand::Mid)),
            LOW,
        );
        rules.fire(memberships.far.min(memberships.weather_poor), VLOW);
        rules.fire(
            RATING_WEIGHT,
            Self::rating_confidence(candidate.place.rating),
        );
        rules.average()
    }

    /// Collect explanation reasons in their fixed priority order.
    fn collect_reasons(memberships: &Memberships, band: PriceBand) -> Vec<Reason> {
        let mut reasons = Vec::new();
        if memberships.interest_strong > 0.5 {
            reasons.push(Reason::StrongInterestMatch);
        } else if memberships.interest_partial > 0.5 {
            reasons.push(Reason::PartialInterestMatch);
        }
        if memberships.near > 0.5 {
            reasons.push(Reason::Near);
        }
        if memberships.weather_great > 0.5 && memberships.outdoor > 0.5 {
            reasons.push(Reason::OutdoorGoodWeather);
        }
        if memberships.weather_poor > 0.5 && memberships.indoor > 0.5 {
            reasons.push(Reason::IndoorPoorWeather);
        }
        if memberships.season_fit > 0.7 {
            reasons.push(Reason::GoodForSeason);
        }
        if memberships.budget_low > 0.6 && band == PriceBand::Budget {
            reasons.push(Reason::FitsLowBudget);
        }
        if memberships.budget_high > 0.6 && band == PriceBand::Premium {
            reasons.push(Reason::PremiumOption);
        }
        reasons
    }
}

impl DestinationScorer for WeightedFuzzyScorer {
    fn evaluate(&self, candidate: &Candidate, traveller: &TravellerProfile) -> Evaluation {
        let memberships = Memberships::evaluate(candidate, traveller);
        let raw = Self::aggregate(&memberships, candidate);
        Evaluation {
            score: Self::sanitise(raw, ScoreScale::Unit),
            reasons: Self::collect_reasons(&memberships, candidate.place.price_band),
        }
    }

    fn scale(&self) -> ScoreScale {
        ScoreScale::Unit
    }
}
