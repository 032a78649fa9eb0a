//! Loosely-shaped external place records.
//!
//! Upstream storage provides records with no shape guarantees: identifier
//! fields vary (`id`, `_id`, `docId`), numeric fields may arrive as strings,
//! and any field may be missing or null. The only contract with that layer
//! is "accept any subset of the documented fields, never throw", so
//! deserialisation here is deliberately lenient and every oddity degrades to
//! `None` or an empty collection. The normaliser turns the result into a
//! canonical [`Place`](crate::Place).

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Latitude/longitude pair as stored upstream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct RawCoordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// An external place record prior to normalisation.
///
/// Every field is optional; [`normalise_place`](crate::normalise_place)
/// supplies the documented default for anything missing.
///
/// # Examples
/// ```
/// use sojourn_core::RawPlaceRecord;
///
/// let record: RawPlaceRecord = serde_json::from_str(
///     r#"{"docId": "p1", "name": "Riverside Mall", "idealCost": "120"}"#,
/// ).unwrap();
/// assert_eq!(record.id.as_deref(), Some("p1"));
/// assert_eq!(record.ideal_cost, Some(120.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct RawPlaceRecord {
    /// Source identifier, under whichever key the store used.
    #[cfg_attr(feature = "serde", serde(alias = "_id", alias = "docId"))]
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Category labels in whatever casing the source used.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_strings"))]
    pub categories: Vec<String>,
    /// Typical visit cost in currency units; may be a quoted number upstream.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "idealCost", deserialize_with = "lenient_number")
    )]
    pub ideal_cost: Option<f64>,
    /// Position, when the source recorded one.
    #[cfg_attr(feature = "serde", serde(alias = "Coordinates"))]
    pub coordinates: Option<RawCoordinates>,
    /// Visitor rating on a 0–5 scale; may be a quoted number upstream.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_number"))]
    pub rating: Option<f64>,
}

/// Accept a number, a quoted number, or anything else (treated as absent).
#[cfg(feature = "serde")]
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

/// Accept an array, keeping its string elements; anything else is empty.
#[cfg(feature = "serde")]
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
