//! Explanation tags attached to a scored place.
//!
//! Reasons are emitted by the fuzzy scorer in a fixed evaluation order
//! (interest, distance, weather/setting, season, budget) and are never
//! reordered downstream, so a ranked list reads consistently.
//!
//! # Examples
//! ```
//! use sojourn_core::Reason;
//!
//! assert_eq!(Reason::Near.as_str(), "Near");
//! assert_eq!(Reason::StrongInterestMatch.to_string(), "Strong interest match");
//! ```

/// Why a place scored the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reason {
    /// The traveller's interests overlap the place's tags strongly.
    #[cfg_attr(feature = "serde", serde(rename = "Strong interest match"))]
    StrongInterestMatch,
    /// The interests overlap the tags partially.
    #[cfg_attr(feature = "serde", serde(rename = "Partial interest match"))]
    PartialInterestMatch,
    /// The place is close by.
    #[cfg_attr(feature = "serde", serde(rename = "Near"))]
    Near,
    /// An outdoor place in great weather.
    #[cfg_attr(feature = "serde", serde(rename = "Outdoor & good weather"))]
    OutdoorGoodWeather,
    /// An indoor refuge from poor weather.
    #[cfg_attr(feature = "serde", serde(rename = "Indoor & poor weather"))]
    IndoorPoorWeather,
    /// The place suits the traveller's season.
    #[cfg_attr(feature = "serde", serde(rename = "Good for this season"))]
    GoodForSeason,
    /// A budget-band place for a budget traveller.
    #[cfg_attr(feature = "serde", serde(rename = "Fits low budget"))]
    FitsLowBudget,
    /// A premium-band place for a high-budget traveller.
    #[cfg_attr(feature = "serde", serde(rename = "Premium option"))]
    PremiumOption,
}

impl Reason {
    /// The human-readable form shown to travellers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrongInterestMatch => "Strong interest match",
            Self::PartialInterestMatch => "Partial interest match",
            Self::Near => "Near",
            Self::OutdoorGoodWeather => "Outdoor & good weather",
            Self::IndoorPoorWeather => "Indoor & poor weather",
            Self::GoodForSeason => "Good for this season",
            Self::FitsLowBudget => "Fits low budget",
            Self::PremiumOption => "Premium option",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
