//! Canonical destination records and their derived attributes.
//!
//! A [`Place`] is only ever produced by the normaliser (or built by hand in
//! tests): every field is populated, so downstream scoring never checks for
//! missing data. Coordinates are WGS84 with `x = longitude` and
//! `y = latitude`.

use std::collections::BTreeSet;

use geo::Coord;
use thiserror::Error;

/// Broad classification of a destination.
///
/// # Examples
/// ```
/// use sojourn_core::PlaceKind;
///
/// assert_eq!(PlaceKind::Restaurant.as_str(), "restaurant");
/// assert_eq!(PlaceKind::Shop.to_string(), "shop");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlaceKind {
    /// Somewhere to eat or drink.
    Restaurant,
    /// Retail venues, including malls.
    Shop,
    /// Everything else worth visiting.
    #[default]
    Activity,
}

impl PlaceKind {
    /// Return the kind as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Shop => "shop",
            Self::Activity => "activity",
        }
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse three-level price bucket derived from a raw cost figure.
///
/// Bands order naturally: `Budget < Mid < Premium`.
///
/// # Examples
/// ```
/// use sojourn_core::PriceBand;
///
/// assert_eq!(PriceBand::from_cost(100.0), PriceBand::Budget);
/// assert_eq!(PriceBand::from_cost(400.0), PriceBand::Mid);
/// assert_eq!(PriceBand::from_cost(401.0), PriceBand::Premium);
/// assert!(PriceBand::Budget < PriceBand::Premium);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PriceBand {
    /// Costs under 150 currency units (also the fallback for unknown costs).
    #[default]
    Budget,
    /// Costs between 150 and 400 inclusive.
    Mid,
    /// Costs above 400.
    Premium,
}

impl PriceBand {
    /// Derive the band from an ideal-cost figure.
    ///
    /// Unknown costs are represented as `0.0` upstream and land in
    /// [`PriceBand::Budget`]; non-finite values do too.
    pub fn from_cost(cost: f64) -> Self {
        if cost > 400.0 {
            Self::Premium
        } else if cost >= 150.0 {
            Self::Mid
        } else {
            Self::Budget
        }
    }

    /// Numeric band level, 1 through 3.
    ///
    /// # Examples
    /// ```
    /// use sojourn_core::PriceBand;
    ///
    /// assert_eq!(PriceBand::Premium.level(), 3);
    /// ```
    pub const fn level(self) -> u8 {
        match self {
            Self::Budget => 1,
            Self::Mid => 2,
            Self::Premium => 3,
        }
    }
}

/// Whether a destination is sheltered from the weather.
///
/// The normaliser only ever derives `Indoor` or `Mixed`; `Outdoor` arrives
/// on places deliberately curated upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Setting {
    /// Fully sheltered.
    Indoor,
    /// Fully exposed.
    Outdoor,
    /// Part sheltered, part exposed.
    #[default]
    Mixed,
}

impl Setting {
    /// Return the setting as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Setting`] from text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown setting '{0}'")]
pub struct ParseSettingError(String);

impl std::str::FromStr for Setting {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "indoor" => Ok(Self::Indoor),
            "outdoor" => Ok(Self::Outdoor),
            "mixed" => Ok(Self::Mixed),
            _ => Err(ParseSettingError(s.to_owned())),
        }
    }
}

/// Canonicalise a free-form tag or interest label.
///
/// Lower-cases, trims, and joins internal whitespace runs with a single
/// underscore so that `"Art  Museum"` and `"art museum"` collapse to the
/// same tag.
///
/// # Examples
/// ```
/// use sojourn_core::canonical_tag;
///
/// assert_eq!(canonical_tag("Art  Museum"), "art_museum");
/// assert_eq!(canonical_tag(" nature "), "nature");
/// ```
pub fn canonical_tag(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// A fully-populated destination, independent of its original storage shape.
///
/// # Examples
/// ```
/// use sojourn_core::{Place, PlaceKind};
///
/// let place = Place::default();
/// assert_eq!(place.kind, PlaceKind::Activity);
/// assert_eq!(place.rating, 4.0);
/// assert!(place.season_best.contains("all"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Stable identifier carried over from the source record.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description; empty when the source had none.
    pub description: String,
    /// WGS84 position (`x = longitude`, `y = latitude`); origin when unknown.
    pub location: Coord<f64>,
    /// Derived classification.
    pub kind: PlaceKind,
    /// Canonicalised, deduplicated tags.
    pub tags: BTreeSet<String>,
    /// Price bucket derived from the source cost figure.
    pub price_band: PriceBand,
    /// Shelter classification.
    pub setting: Setting,
    /// Seasons the place suits; `{"all"}` when unspecified.
    pub season_best: BTreeSet<String>,
    /// Visitor rating on a 0–5 scale; `4.0` when the source had none.
    pub rating: f32,
}

impl Default for Place {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            location: Coord { x: 0.0, y: 0.0 },
            kind: PlaceKind::default(),
            tags: BTreeSet::new(),
            price_band: PriceBand::default(),
            setting: Setting::default(),
            season_best: BTreeSet::from(["all".to_owned()]),
            rating: 4.0,
        }
    }
}

/// A place paired with its distance from the traveller.
///
/// Distance is a cross-cutting input owned by the caller's geolocation
/// layer, not a place attribute, so it is attached here at scoring time.
///
/// # Examples
/// ```
/// use sojourn_core::{Candidate, Place};
///
/// let candidate = Candidate::new(Place::default(), 1.2);
/// assert_eq!(candidate.distance_km, 1.2);
///
/// // Malformed distances degrade to zero rather than erroring.
/// let candidate = Candidate::new(Place::default(), f32::NAN);
/// assert_eq!(candidate.distance_km, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// The destination under consideration.
    pub place: Place,
    /// Distance from the traveller in kilometres.
    pub distance_km: f32,
}

impl Candidate {
    /// Pair a place with its distance, defaulting malformed distances to `0.0`.
    pub fn new(place: Place, distance_km: f32) -> Self {
        let distance_km = if distance_km.is_finite() && distance_km >= 0.0 {
            distance_km
        } else {
            0.0
        };
        Self { place, distance_km }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(0.0, PriceBand::Budget)]
    #[case(149.99, PriceBand::Budget)]
    #[case(150.0, PriceBand::Mid)]
    #[case(400.0, PriceBand::Mid)]
    #[case(400.01, PriceBand::Premium)]
    fn price_band_boundaries(#[case] cost: f64, #[case] expected: PriceBand) {
        assert_eq!(PriceBand::from_cost(cost), expected);
    }

    #[rstest]
    fn non_finite_cost_falls_back_to_budget() {
        assert_eq!(PriceBand::from_cost(f64::NAN), PriceBand::Budget);
    }

    #[rstest]
    fn bands_order_by_level() {
        assert!(PriceBand::Budget < PriceBand::Mid);
        assert!(PriceBand::Mid < PriceBand::Premium);
        assert_eq!(PriceBand::Mid.level(), 2);
    }

    #[rstest]
    #[case("Art Museum", "art_museum")]
    #[case("  NATURE ", "nature")]
    #[case("night\tmarket", "night_market")]
    fn canonical_tags_collapse_case_and_whitespace(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(canonical_tag(raw), expected);
    }

    #[rstest]
    fn setting_parsing_rejects_unknown() {
        let err = Setting::from_str("underwater").unwrap_err();
        assert_eq!(err.to_string(), "unknown setting 'underwater'");
    }

    #[rstest]
    #[case(-3.0)]
    #[case(f32::INFINITY)]
    fn candidate_defaults_bad_distance(#[case] distance: f32) {
        let candidate = Candidate::new(Place::default(), distance);
        assert_eq!(candidate.distance_km, 0.0);
    }
}
