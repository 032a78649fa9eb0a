//! Core domain types for the Sojourn recommendation engine.
//!
//! The crate owns the canonical data model — [`Place`], [`Candidate`],
//! [`TravellerProfile`] — together with the normalisation boundary that
//! turns loosely-shaped external records into fully-populated values, the
//! Jaccard similarity metric, and the [`DestinationScorer`] trait that
//! concrete scoring strategies implement.
//!
//! Everything here is a plain value object: no I/O, no shared state, no
//! panics on malformed input. External records degrade field-by-field to
//! documented defaults at the normalisation boundary and are never
//! re-checked deeper in the pipeline.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod normalise;
mod place;
mod raw;
mod reason;
mod scorer;
mod season;
mod similarity;
mod traveller;

pub use normalise::normalise_place;
pub use place::{Candidate, ParseSettingError, Place, PlaceKind, PriceBand, Setting, canonical_tag};
pub use raw::{RawCoordinates, RawPlaceRecord};
pub use reason::Reason;
pub use scorer::{DestinationScorer, Evaluation, ScoreScale, ScoredPlace};
pub use season::{ParseSeasonError, Season};
pub use similarity::jaccard;
pub use traveller::TravellerProfile;
