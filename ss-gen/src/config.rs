//! Run configuration: dataset dimensions, seed, output path and weight tables.
//!
//! Every field has a default, so an empty (or absent) config file reproduces the reference dataset.
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{
    Path,
    PathBuf,
};

use serde::Deserialize;
use ss_core::prelude::*;

use crate::distributions::{
    weight_table,
    Categorical,
};
use crate::errors::ConfigError;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;
/// Number of users in the reference dataset.
pub const DEFAULT_USERS: u32 = 2000;
/// Number of tracks in the reference dataset.
pub const DEFAULT_TRACKS: u32 = 5000;
/// Number of sessions in the reference dataset.
pub const DEFAULT_SESSIONS: u32 = 20000;
/// Where the event table is written when no path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "data/synthetic_sessions.csv";

/// Everything a generation run depends on.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed of the run's [`RandomSource`](crate::rng::RandomSource).
    pub seed: u64,
    /// Number of users to generate.
    pub n_users: u32,
    /// Number of tracks to generate.
    pub n_tracks: u32,
    /// Number of sessions to generate.
    pub n_sessions: u32,
    /// Destination of the exported event table.
    pub output_path: PathBuf,
    /// Categorical weight tables.
    pub weights: WeightTables,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            n_users: DEFAULT_USERS,
            n_tracks: DEFAULT_TRACKS,
            n_sessions: DEFAULT_SESSIONS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            weights: WeightTables::default(),
        }
    }
}

impl GeneratorConfig {
    /// Read a YAML config file.  Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("could not open config file {}", path.display()))?;
        serde_yaml::from_reader(file).with_context(|| format!("could not parse config file {}", path.display()))
    }

    /// Check dimensions and weight tables, returning the sampling distributions on success.
    ///
    /// This runs before any table is generated, so a bad configuration never produces partial
    /// output.
    pub fn validate(&self) -> Result<Distributions> {
        for (field, count) in [("n_users", self.n_users), ("n_tracks", self.n_tracks), ("n_sessions", self.n_sessions)] {
            if count == 0 {
                return Err(ConfigError::invalid_count(field));
            }
        }
        self.weights.distributions()
    }
}

/// Symbol -> weight maps for every categorical column.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs, clippy::missing_docs_in_private_items)]
pub struct WeightTables {
    pub age_group: BTreeMap<AgeGroup, f64>,
    pub gender: BTreeMap<Gender, f64>,
    pub country: BTreeMap<Country, f64>,
    pub subscription: BTreeMap<Subscription, f64>,
    pub platform: BTreeMap<Platform, f64>,
    pub skip_tendency: BTreeMap<SkipTendency, f64>,
    pub genre: BTreeMap<Genre, f64>,
    pub time_of_day: BTreeMap<TimeOfDay, f64>,
    pub day_type: BTreeMap<DayType, f64>,
    pub location: BTreeMap<Location, f64>,
}

impl Default for WeightTables {
    fn default() -> Self {
        use AgeGroup::*;
        use Country::*;
        use Genre::*;
        use Location::*;
        use Platform::*;
        use Subscription::*;
        use TimeOfDay::*;

        Self {
            age_group: weight_table(&[(Teen, 0.10), (YoungAdult, 0.35), (Adult, 0.30), (MiddleAged, 0.15), (Senior, 0.10)]),
            gender: weight_table(&[(Gender::Female, 0.48), (Gender::Male, 0.48), (Gender::NonBinary, 0.04)]),
            country: weight_table(&[(NorthAmerica, 0.20), (EuUk, 0.35), (Latam, 0.20), (Asia, 0.20), (Africa, 0.05)]),
            subscription: weight_table(&[(Free, 0.45), (Premium, 0.35), (Family, 0.10), (Student, 0.10)]),
            platform: weight_table(&[(Ios, 0.40), (Android, 0.40), (Desktop, 0.15), (Web, 0.05)]),
            skip_tendency: weight_table(&[
                (SkipTendency::Low, 0.30),
                (SkipTendency::Medium, 0.50),
                (SkipTendency::High, 0.20),
            ]),
            genre: weight_table(&[
                (Pop, 0.25),
                (HipHop, 0.20),
                (Electronic, 0.15),
                (Rock, 0.15),
                (Latin, 0.10),
                (Classical, 0.05),
                (Indie, 0.07),
                (Jazz, 0.03),
            ]),
            time_of_day: weight_table(&[(Morning, 0.20), (Afternoon, 0.35), (Evening, 0.30), (Night, 0.15)]),
            day_type: weight_table(&[(DayType::Weekday, 0.70), (DayType::Weekend, 0.30)]),
            location: weight_table(&[(Home, 0.50), (Commute, 0.25), (Work, 0.20), (Gym, 0.05)]),
        }
    }
}

impl WeightTables {
    /// Validate every table and build its distribution.
    pub fn distributions(&self) -> Result<Distributions> {
        Ok(Distributions {
            age_group: Categorical::from_weights(&self.age_group)?,
            gender: Categorical::from_weights(&self.gender)?,
            country: Categorical::from_weights(&self.country)?,
            subscription: Categorical::from_weights(&self.subscription)?,
            platform: Categorical::from_weights(&self.platform)?,
            skip_tendency: Categorical::from_weights(&self.skip_tendency)?,
            genre: Categorical::from_weights(&self.genre)?,
            time_of_day: Categorical::from_weights(&self.time_of_day)?,
            day_type: Categorical::from_weights(&self.day_type)?,
            location: Categorical::from_weights(&self.location)?,
        })
    }
}

/// Ready-to-sample distributions for every categorical column.
#[derive(Clone, Debug)]
#[allow(missing_docs, clippy::missing_docs_in_private_items)]
pub struct Distributions {
    pub age_group: Categorical<AgeGroup>,
    pub gender: Categorical<Gender>,
    pub country: Categorical<Country>,
    pub subscription: Categorical<Subscription>,
    pub platform: Categorical<Platform>,
    pub skip_tendency: Categorical<SkipTendency>,
    pub genre: Categorical<Genre>,
    pub time_of_day: Categorical<TimeOfDay>,
    pub day_type: Categorical<DayType>,
    pub location: Categorical<Location>,
}
