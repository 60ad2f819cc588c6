//! The exported event table.
//!
//! [`EventRecord`] is the single source of truth for the column layout of the generated file: the
//! generator serializes it and every reader deserializes it, so the header order in
//! [`EVENT_COLUMNS`] is the field order below.
use serde::{
    Deserialize,
    Serialize,
};

use crate::categories::*;

/// Column names of the exported table, in file order.
pub const EVENT_COLUMNS: [&str; 22] = [
    "session_id",
    "user_id",
    "position",
    "time_of_day",
    "day_type",
    "location",
    "track_id",
    "age_group",
    "gender",
    "country",
    "subscription",
    "platform",
    "skip_tendency",
    "genre",
    "popularity",
    "acousticness",
    "danceability",
    "energy",
    "tempo",
    "duration_sec",
    "skip_prob",
    "skip",
];

/// Columns that can be fed to a sequence model as-is.
pub const NUMERIC_FEATURES: [&str; 9] = [
    "position",
    "track_id",
    "popularity",
    "acousticness",
    "danceability",
    "energy",
    "tempo",
    "duration_sec",
    "skip_prob",
];

/// One fully denormalized, labeled listening event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub session_id: u32,
    pub user_id: u32,
    /// 1-based index of the play within its session.
    pub position: u32,
    pub time_of_day: TimeOfDay,
    pub day_type: DayType,
    pub location: Location,
    pub track_id: u32,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub country: Country,
    pub subscription: Subscription,
    pub platform: Platform,
    pub skip_tendency: SkipTendency,
    pub genre: Genre,
    pub popularity: u32,
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub tempo: u32,
    pub duration_sec: u32,
    pub skip_prob: f64,
    pub skip: bool,
}

impl EventRecord {
    /// Look up a numeric column by name; `None` for categorical or unknown columns.
    pub fn numeric_feature(&self, column: &str) -> Option<f64> {
        let value = match column {
            "position" => f64::from(self.position),
            "track_id" => f64::from(self.track_id),
            "popularity" => f64::from(self.popularity),
            "acousticness" => self.acousticness,
            "danceability" => self.danceability,
            "energy" => self.energy,
            "tempo" => f64::from(self.tempo),
            "duration_sec" => f64::from(self.duration_sec),
            "skip_prob" => self.skip_prob,
            _ => return None,
        };
        Some(value)
    }
}
