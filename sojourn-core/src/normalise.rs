//! The normalisation boundary between external records and the engine.
//!
//! Validation and defaulting happen exactly once, here; the scorer trusts
//! every [`Place`] it receives. Normalisation never fails — each missing or
//! malformed field degrades to its documented default.

use std::collections::BTreeSet;

use geo::Coord;

use crate::place::{Place, PlaceKind, PriceBand, Setting, canonical_tag};
use crate::raw::RawPlaceRecord;

/// Convert a raw record into a canonical, fully-populated [`Place`].
///
/// Derivations:
/// - `kind`: case-insensitive substring match over the categories, first
///   match winning in the priority restaurant → shop (mall) → activity.
/// - `tags`: canonicalised categories, with synthetic `shopping` and
///   `indoor` tags added for malls.
/// - `price_band`: [`PriceBand::from_cost`] over the ideal cost, treating an
///   unknown cost as `0.0`.
/// - `setting`: malls are indoor; everything else is mixed. The normaliser
///   never infers outdoor — that classification only arrives on places
///   curated upstream.
/// - `rating`: `4.0` when absent, zero, negative, or non-finite.
/// - `season_best`: always `{"all"}` — no derivation source exists for it.
///
/// # Examples
/// ```
/// use sojourn_core::{PlaceKind, PriceBand, RawPlaceRecord, Setting, normalise_place};
///
/// let raw = RawPlaceRecord {
///     categories: vec!["Mall".to_owned()],
///     ideal_cost: Some(100.0),
///     ..RawPlaceRecord::default()
/// };
/// let place = normalise_place(raw);
///
/// assert_eq!(place.kind, PlaceKind::Shop);
/// assert_eq!(place.price_band, PriceBand::Budget);
/// assert_eq!(place.setting, Setting::Indoor);
/// assert!(place.tags.contains("shopping"));
/// ```
pub fn normalise_place(raw: RawPlaceRecord) -> Place {
    let is_mall = contains_category(&raw.categories, "mall");
    let location = raw.coordinates.map_or(Coord { x: 0.0, y: 0.0 }, |c| Coord {
        x: c.longitude,
        y: c.latitude,
    });

    Place {
        id: raw.id.unwrap_or_default(),
        name: raw.name.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        location,
        kind: derive_kind(&raw.categories),
        tags: derive_tags(&raw.categories, is_mall),
        price_band: PriceBand::from_cost(raw.ideal_cost.unwrap_or(0.0)),
        setting: if is_mall { Setting::Indoor } else { Setting::Mixed },
        season_best: BTreeSet::from(["all".to_owned()]),
        rating: derive_rating(raw.rating),
    }
}

fn contains_category(categories: &[String], needle: &str) -> bool {
    categories
        .iter()
        .any(|category| category.to_lowercase().contains(needle))
}

fn derive_kind(categories: &[String]) -> PlaceKind {
    if contains_category(categories, "restaurant") {
        PlaceKind::Restaurant
    } else if contains_category(categories, "mall") {
        PlaceKind::Shop
    } else {
        PlaceKind::Activity
    }
}

fn derive_tags(categories: &[String], is_mall: bool) -> BTreeSet<String> {
    let mut tags: BTreeSet<String> = categories
        .iter()
        .map(|category| canonical_tag(category))
        .filter(|tag| !tag.is_empty())
        .collect();
    if is_mall {
        tags.insert("shopping".to_owned());
        tags.insert("indoor".to_owned());
    }
    tags
}

fn derive_rating(rating: Option<f64>) -> f32 {
    match rating {
        Some(value) if value.is_finite() && value > 0.0 => value as f32,
        _ => 4.0,
    }
}
