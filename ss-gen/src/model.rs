//! Entity and intermediate row types flowing through the generation pipeline.
use std::fmt;
use std::ops::RangeInclusive;

use ss_core::prelude::*;

/// Inclusive range of track popularity scores.
pub const POPULARITY: RangeInclusive<u32> = 0..=100;
/// Inclusive range of track tempos, in beats per minute.
pub const TEMPO_BPM: RangeInclusive<u32> = 60..=180;
/// Inclusive range of track durations, in seconds.
pub const DURATION_SEC: RangeInclusive<u32> = 120..=359;
/// Inclusive range of the number of plays in a session.
pub const SESSION_LENGTH: RangeInclusive<u32> = 5..=39;

/// A listener account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct User {
    /// Dense 1-based key.
    pub user_id: u32,
    /// Age bracket of the listener.
    pub age_group: AgeGroup,
    /// Self-reported gender.
    pub gender: Gender,
    /// Market region.
    pub country: Country,
    /// Plan the account is on.
    pub subscription: Subscription,
    /// Client the account mostly listens from.
    pub platform: Platform,
    /// Latent skip propensity.
    pub skip_tendency: SkipTendency,
}

/// A catalog track with its audio features.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    /// Dense 1-based key.
    pub track_id: u32,
    /// Primary genre.
    pub genre: Genre,
    /// Popularity score in [`POPULARITY`].
    pub popularity: u32,
    /// Acoustic confidence in `[0, 1)`.
    pub acousticness: f64,
    /// Danceability score in `[0, 1)`.
    pub danceability: f64,
    /// Perceived intensity in `[0, 1)`.
    pub energy: f64,
    /// Tempo in [`TEMPO_BPM`].
    pub tempo: u32,
    /// Length in [`DURATION_SEC`].
    pub duration_sec: u32,
}

/// A listening occasion; expands into `session_length` events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    /// Dense 1-based key.
    pub session_id: u32,
    /// The listener, always an existing user id.
    pub user_id: u32,
    /// When the session happens.
    pub time_of_day: TimeOfDay,
    /// Weekday or weekend.
    pub day_type: DayType,
    /// Where the session happens.
    pub location: Location,
    /// Number of plays, in [`SESSION_LENGTH`].
    pub session_length: u32,
}

/// One position within a session, before a track has been chosen for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    /// Owning session.
    pub session_id: u32,
    /// Owning session's user.
    pub user_id: u32,
    /// 1-based position within the session.
    pub position: u32,
    /// Copied from the session.
    pub time_of_day: TimeOfDay,
    /// Copied from the session.
    pub day_type: DayType,
    /// Copied from the session.
    pub location: Location,
}

impl Event {
    /// The composite identity of this event.
    #[must_use]
    pub const fn key(&self) -> EventKey {
        EventKey { session_id: self.session_id, position: self.position }
    }
}

/// An event with its randomly assigned track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayEvent {
    /// The positional event.
    pub event: Event,
    /// Foreign key into the tracks table.
    pub track_id: u32,
}

/// A play event with the user and track rows it references attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnrichedEvent {
    /// The positional event.
    pub event: Event,
    /// Snapshot of the session's user.
    pub user: User,
    /// Snapshot of the assigned track.
    pub track: Track,
}

impl EnrichedEvent {
    /// Flatten into the exported row shape.
    #[must_use]
    pub fn into_record(self, skip_prob: f64, skip: bool) -> EventRecord {
        let Self { event, user, track } = self;
        EventRecord {
            session_id: event.session_id,
            user_id: event.user_id,
            position: event.position,
            time_of_day: event.time_of_day,
            day_type: event.day_type,
            location: event.location,
            track_id: track.track_id,
            age_group: user.age_group,
            gender: user.gender,
            country: user.country,
            subscription: user.subscription,
            platform: user.platform,
            skip_tendency: user.skip_tendency,
            genre: track.genre,
            popularity: track.popularity,
            acousticness: track.acousticness,
            danceability: track.danceability,
            energy: track.energy,
            tempo: track.tempo,
            duration_sec: track.duration_sec,
            skip_prob,
            skip,
        }
    }
}

/// Composite identity of an event: `(session_id, position)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EventKey {
    /// Owning session.
    pub session_id: u32,
    /// 1-based position within the session.
    pub position: u32,
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session {} position {}", self.session_id, self.position)
    }
}
