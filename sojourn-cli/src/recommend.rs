//! Recommend command implementation for the Sojourn CLI.

use std::fs::File;
use std::io::{BufReader, Write};
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sojourn_core::{
    Candidate, DestinationScorer, RawPlaceRecord, ScoredPlace, Season, TravellerProfile,
    normalise_place,
};
use sojourn_scorer::{LegacyCrispScorer, RecommendationRanker, WeightedFuzzyScorer};

use crate::CliError;

const ARG_PLACES: &str = "places";
const ARG_ORIGIN_LAT: &str = "origin-lat";
const ARG_ORIGIN_LNG: &str = "origin-lng";
const ENV_PLACES: &str = "SOJOURN_CMDS_RECOMMEND_PLACES";
const ENV_ORIGIN_LAT: &str = "SOJOURN_CMDS_RECOMMEND_ORIGIN_LAT";
const ENV_ORIGIN_LNG: &str = "SOJOURN_CMDS_RECOMMEND_ORIGIN_LNG";

// Rough kilometres per degree of latitude; good enough for ranking
// city-scale distances.
const DEG_TO_KM: f64 = 111.0;

const DEFAULT_BUDGET: f32 = 0.5;
const DEFAULT_WEATHER: f32 = 0.5;
const DEFAULT_PREF_DISTANCE_KM: f32 = 2.0;
const DEFAULT_CRISP_BUDGET: f32 = 5000.0;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a JSON array of raw place records for a traveller. \
                 Preferences can come from CLI flags, configuration files, \
                 or environment variables.",
    about = "Rank candidate places for a traveller"
)]
#[ortho_config(prefix = "SOJOURN")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing an array of raw place records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Normalised budget preference in 0-1.
    #[arg(long, value_name = "0..1")]
    #[serde(default)]
    pub(crate) budget: Option<f32>,
    /// Weather comfort in 0-1 (0 = poor conditions, 1 = great).
    #[arg(long, value_name = "0..1")]
    #[serde(default)]
    pub(crate) weather: Option<f32>,
    /// Current season: "dry" or "wet".
    #[arg(long, value_name = "season")]
    #[serde(default)]
    pub(crate) season: Option<String>,
    /// Interest label; repeat the flag for several interests.
    #[arg(long = "interest", value_name = "label")]
    #[serde(default)]
    pub(crate) interests: Vec<String>,
    /// Preferred travel radius in kilometres.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    pub(crate) pref_distance_km: Option<f32>,
    /// Traveller latitude, used to derive per-place distances.
    #[arg(long = ARG_ORIGIN_LAT, value_name = "deg")]
    #[serde(default)]
    pub(crate) origin_lat: Option<f64>,
    /// Traveller longitude, used to derive per-place distances.
    #[arg(long = ARG_ORIGIN_LNG, value_name = "deg")]
    #[serde(default)]
    pub(crate) origin_lng: Option<f64>,
    /// Scoring strategy: "fuzzy" (0-1 scale) or "crisp" (legacy 0-10).
    #[arg(long, value_name = "name")]
    #[serde(default)]
    pub(crate) strategy: Option<String>,
    /// Trip budget in currency units for the crisp strategy.
    #[arg(long, value_name = "amount")]
    #[serde(default)]
    pub(crate) crisp_budget: Option<f32>,
    /// Interest label for the crisp strategy; defaults to the first
    /// `--interest`.
    #[arg(long, value_name = "label")]
    #[serde(default)]
    pub(crate) crisp_interest: Option<String>,
    /// Keep only the best N places in the report.
    #[arg(long, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// The scoring strategy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Strategy {
    /// Weighted fuzzy scoring on the 0-1 scale.
    #[default]
    Fuzzy,
    /// The legacy crisp formula on the 0-10 scale.
    Crisp,
}

impl Strategy {
    fn parse(value: &str) -> Result<Self, CliError> {
        match value.to_lowercase().as_str() {
            "fuzzy" => Ok(Self::Fuzzy),
            "crisp" | "legacy" => Ok(Self::Crisp),
            _ => Err(CliError::UnknownStrategy {
                value: value.to_owned(),
            }),
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Fuzzy => "fuzzy",
            Self::Crisp => "crisp",
        }
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) places: Utf8PathBuf,
    pub(crate) budget: f32,
    pub(crate) weather: f32,
    pub(crate) season: Season,
    pub(crate) interests: Vec<String>,
    pub(crate) pref_distance_km: f32,
    pub(crate) origin: Option<Coord<f64>>,
    pub(crate) strategy: Strategy,
    pub(crate) crisp_budget: f32,
    pub(crate) crisp_interest: String,
    pub(crate) top: Option<usize>,
}

impl RecommendConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        if self.places.as_std_path().is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field: ARG_PLACES,
                path: self.places.clone(),
            })
        }
    }

    fn traveller_profile(&self) -> TravellerProfile {
        TravellerProfile::new()
            .with_budget(self.budget)
            .with_weather(self.weather)
            .with_interests(self.interests.iter().map(String::as_str))
            .with_pref_distance_km(self.pref_distance_km)
            .with_season(self.season)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_PLACES,
        })?;
        let season = args
            .season
            .as_deref()
            .map(Season::from_str)
            .transpose()?
            .unwrap_or_default();
        let strategy = args
            .strategy
            .as_deref()
            .map(Strategy::parse)
            .transpose()?
            .unwrap_or_default();
        let origin = match (args.origin_lat, args.origin_lng) {
            (Some(lat), Some(lng)) => Some(Coord { x: lng, y: lat }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_ORIGIN_LNG,
                    env: ENV_ORIGIN_LNG,
                });
            }
            (None, Some(_)) => {
                return Err(CliError::MissingArgument {
                    field: ARG_ORIGIN_LAT,
                    env: ENV_ORIGIN_LAT,
                });
            }
        };
        let crisp_interest = args
            .crisp_interest
            .or_else(|| args.interests.first().cloned())
            .unwrap_or_default();

        Ok(Self {
            places,
            budget: args.budget.unwrap_or(DEFAULT_BUDGET),
            weather: args.weather.unwrap_or(DEFAULT_WEATHER),
            season,
            interests: args.interests,
            pref_distance_km: args.pref_distance_km.unwrap_or(DEFAULT_PREF_DISTANCE_KM),
            origin,
            strategy,
            crisp_budget: args.crisp_budget.unwrap_or(DEFAULT_CRISP_BUDGET),
            crisp_interest,
            top: args.top,
        })
    }
}

/// JSON report written to stdout.
#[derive(Debug, Serialize)]
struct RecommendReport {
    strategy: &'static str,
    scale: String,
    results: Vec<ScoredPlace>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_recommend(&config, writer)
}

fn execute_recommend(config: &RecommendConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let records = load_places(&config.places)?;
    let candidates = build_candidates(records, config.origin);
    let traveller = config.traveller_profile();

    let report = match config.strategy {
        Strategy::Fuzzy => rank_report(
            &RecommendationRanker::new(WeightedFuzzyScorer),
            config,
            &candidates,
            &traveller,
        ),
        Strategy::Crisp => {
            let scorer = LegacyCrispScorer::new(config.crisp_budget, &config.crisp_interest)?;
            rank_report(
                &RecommendationRanker::new(scorer),
                config,
                &candidates,
                &traveller,
            )
        }
    };
    write_report(writer, &report)
}

/// Loads a JSON array of raw place records from disk.
fn load_places(path: &Utf8Path) -> Result<Vec<RawPlaceRecord>, CliError> {
    let file = File::open(path.as_std_path()).map_err(|source| CliError::OpenPlaces {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlaces {
        path: path.to_path_buf(),
        source,
    })
}

/// Normalise records and attach distances from the traveller's origin.
///
/// Without an origin every distance is zero; the engine treats distance as
/// a caller-supplied input, and no origin means no distance signal.
fn build_candidates(records: Vec<RawPlaceRecord>, origin: Option<Coord<f64>>) -> Vec<Candidate> {
    records
        .into_iter()
        .map(|record| {
            let place = normalise_place(record);
            let distance_km =
                origin.map_or(0.0, |origin| approx_distance_km(origin, place.location));
            Candidate::new(place, distance_km)
        })
        .collect()
}

/// Degree-space Euclidean distance scaled by ~111 km per degree.
fn approx_distance_km(origin: Coord<f64>, location: Coord<f64>) -> f32 {
    let dx = location.x - origin.x;
    let dy = location.y - origin.y;
    ((dx * dx + dy * dy).sqrt() * DEG_TO_KM) as f32
}

fn rank_report<S: DestinationScorer>(
    ranker: &RecommendationRanker<S>,
    config: &RecommendConfig,
    candidates: &[Candidate],
    traveller: &TravellerProfile,
) -> RecommendReport {
    let mut results = ranker.rank(candidates, traveller);
    if let Some(limit) = config.top {
        results.truncate(limit);
    }
    RecommendReport {
        strategy: config.strategy.as_str(),
        scale: ranker.scorer().scale().to_string(),
        results,
    }
}

fn write_report(writer: &mut dyn Write, report: &RecommendReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
