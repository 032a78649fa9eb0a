//! Traveller preference snapshots.
//!
//! A profile captures the soft inputs to scoring: normalised budget and
//! weather comfort in `[0.0, 1.0]`, an interest set, a preferred travel
//! radius, and the current season. Setters clamp rather than error so a
//! profile is always usable.

use std::collections::BTreeSet;

use crate::place::canonical_tag;
use crate::season::Season;

/// A traveller's preferences at scoring time.
///
/// Interests pass through the same canonicalisation as place tags, so
/// overlap is case- and whitespace-insensitive by construction.
///
/// # Examples
/// ```
/// use sojourn_core::{Season, TravellerProfile};
///
/// let traveller = TravellerProfile::new()
///     .with_budget(0.9)
///     .with_weather(0.8)
///     .with_interest("Nature")
///     .with_season(Season::Dry);
///
/// assert_eq!(traveller.budget(), 0.9);
/// assert!(traveller.interests().contains("nature"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TravellerProfile {
    budget: f32,
    weather: f32,
    interests: BTreeSet<String>,
    pref_distance_km: f32,
    season: Season,
}

impl Default for TravellerProfile {
    /// A neutral profile: midpoint budget and weather, no interests, a
    /// 2 km comfortable radius, dry season.
    fn default() -> Self {
        Self {
            budget: 0.5,
            weather: 0.5,
            interests: BTreeSet::new(),
            pref_distance_km: 2.0,
            season: Season::Dry,
        }
    }
}

impl TravellerProfile {
    /// Construct the neutral profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalised budget in `[0.0, 1.0]`.
    pub const fn budget(&self) -> f32 {
        self.budget
    }

    /// Weather comfort in `[0.0, 1.0]` (0 = poor conditions, 1 = great).
    pub const fn weather(&self) -> f32 {
        self.weather
    }

    /// Canonicalised interest labels.
    pub const fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    /// The traveller's stated comfortable travel radius in kilometres.
    pub const fn pref_distance_km(&self) -> f32 {
        self.pref_distance_km
    }

    /// The traveller's current season.
    pub const fn season(&self) -> Season {
        self.season
    }

    /// Set the budget, clamping into `[0.0, 1.0]`; non-finite values reset
    /// to the neutral midpoint.
    pub fn set_budget(&mut self, budget: f32) {
        self.budget = clamp_unit(budget);
    }

    /// Set the weather comfort, with the same clamping as [`set_budget`].
    ///
    /// [`set_budget`]: Self::set_budget
    pub fn set_weather(&mut self, weather: f32) {
        self.weather = clamp_unit(weather);
    }

    /// Add one interest, canonicalised like a place tag. Empty labels are
    /// ignored.
    pub fn add_interest(&mut self, interest: &str) {
        let tag = canonical_tag(interest);
        if !tag.is_empty() {
            self.interests.insert(tag);
        }
    }

    /// Set the preferred radius; malformed values degrade to zero.
    pub fn set_pref_distance_km(&mut self, km: f32) {
        self.pref_distance_km = if km.is_finite() && km >= 0.0 { km } else { 0.0 };
    }

    /// Set the season.
    pub fn set_season(&mut self, season: Season) {
        self.season = season;
    }

    /// Builder-style [`set_budget`](Self::set_budget).
    #[must_use]
    pub fn with_budget(mut self, budget: f32) -> Self {
        self.set_budget(budget);
        self
    }

    /// Builder-style [`set_weather`](Self::set_weather).
    #[must_use]
    pub fn with_weather(mut self, weather: f32) -> Self {
        self.set_weather(weather);
        self
    }

    /// Builder-style [`add_interest`](Self::add_interest).
    #[must_use]
    pub fn with_interest(mut self, interest: &str) -> Self {
        self.add_interest(interest);
        self
    }

    /// Add several interests while consuming `self`.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for interest in interests {
            self.add_interest(interest.as_ref());
        }
        self
    }

    /// Builder-style [`set_pref_distance_km`](Self::set_pref_distance_km).
    #[must_use]
    pub fn with_pref_distance_km(mut self, km: f32) -> Self {
        self.set_pref_distance_km(km);
        self
    }

    /// Builder-style [`set_season`](Self::set_season).
    #[must_use]
    pub fn with_season(mut self, season: Season) -> Self {
        self.set_season(season);
        self
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.2, 1.0)]
    #[case(-0.5, 0.0)]
    #[case(f32::NAN, 0.5)]
    fn budget_clamps_out_of_range(#[case] input: f32, #[case] expected: f32) {
        let traveller = TravellerProfile::new().with_budget(input);
        assert_eq!(traveller.budget(), expected);
    }

    #[rstest]
    fn interests_are_canonicalised_and_deduplicated() {
        let traveller = TravellerProfile::new()
            .with_interest("Nature")
            .with_interest("nature")
            .with_interest("Night  Market");
        assert_eq!(traveller.interests().len(), 2);
        assert!(traveller.interests().contains("night_market"));
    }

    #[rstest]
    fn empty_interest_is_ignored() {
        let traveller = TravellerProfile::new().with_interest("   ");
        assert!(traveller.interests().is_empty());
    }

    #[rstest]
    fn negative_radius_degrades_to_zero() {
        let traveller = TravellerProfile::new().with_pref_distance_km(-1.0);
        assert_eq!(traveller.pref_distance_km(), 0.0);
    }
}
