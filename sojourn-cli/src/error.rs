//! Error types emitted by the Sojourn CLI.
//!
//! Keep this error type reasonably small, as most CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use sojourn_core::ParseSeasonError;
use sojourn_scorer::LegacyCrispError;

/// Errors emitted by the Sojourn CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing CLI flag.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Name of the flag the path came from.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// Opening the places file failed.
    #[error("failed to open places file at {path:?}: {source}")]
    OpenPlaces {
        /// Path of the places file.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The places file JSON could not be decoded.
    #[error("failed to parse places JSON at {path:?}: {source}")]
    ParsePlaces {
        /// Path of the places file.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The requested season label is not recognised.
    #[error(transparent)]
    UnknownSeason(#[from] ParseSeasonError),
    /// The requested strategy label is not recognised.
    #[error("unknown strategy '{value}' (expected 'fuzzy' or 'crisp')")]
    UnknownStrategy {
        /// The offending label.
        value: String,
    },
    /// The legacy strategy rejected its configuration.
    #[error(transparent)]
    InvalidCrispConfig(#[from] LegacyCrispError),
    /// Serialising the recommendation report failed.
    #[error("failed to serialise recommendation report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the recommendation report failed.
    #[error("failed to write recommendation report: {0}")]
    WriteReport(#[source] std::io::Error),
}
