//! Travel seasons in the tropical dry/wet sense.
//!
//! # Examples
//! ```
//! use sojourn_core::Season;
//!
//! assert_eq!(Season::Dry.as_str(), "dry");
//! assert_eq!(Season::Wet.to_string(), "wet");
//! ```

use thiserror::Error;

/// The traveller's current season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Season {
    /// The dry season.
    #[default]
    Dry,
    /// The wet season.
    Wet,
}

impl Season {
    /// Return the season as a lowercase `&str`.
    ///
    /// The string form is what [`Place::season_best`](crate::Place) entries
    /// are matched against.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Wet => "wet",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Season`] from text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown season '{0}'")]
pub struct ParseSeasonError(String);

impl std::str::FromStr for Season {
    type Err = ParseSeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dry" => Ok(Self::Dry),
            "wet" => Ok(Self::Wet),
            _ => Err(ParseSeasonError(s.to_owned())),
        }
    }
}
