//! Event expansion, track assignment and the denormalizing join.
use std::collections::HashMap;

use ss_core::prelude::*;

use crate::errors::{
    DanglingKey,
    JoinError,
};
use crate::model::{
    EnrichedEvent,
    Event,
    PlayEvent,
    Session,
    Track,
    User,
};
use crate::rng::RandomSource;

/// Expand every session into `session_length` positional events.
///
/// Output is ordered by session (input order), then by ascending position starting at 1.
#[instrument(skip_all, fields(sessions = sessions.len()))]
pub fn expand_sessions(sessions: &[Session]) -> Vec<Event> {
    let total: usize = sessions.iter().map(|s| s.session_length as usize).sum();
    let mut events = Vec::with_capacity(total);
    for session in sessions {
        events.extend((1..=session.session_length).map(|position| Event {
            session_id: session.session_id,
            user_id: session.user_id,
            position,
            time_of_day: session.time_of_day,
            day_type: session.day_type,
            location: session.location,
        }));
    }
    events
}

/// Give every event a track drawn uniformly from `1..=n_tracks`, one draw per event in order.
///
/// The choice is deliberately independent of the user, the session and every earlier play.
///
/// # Panics
///
/// Panics if `events` is non-empty and `n_tracks == 0`.
#[instrument(skip_all, fields(events = events.len(), n_tracks = n_tracks))]
pub fn assign_tracks(events: Vec<Event>, n_tracks: u32, rng: &mut RandomSource) -> Vec<PlayEvent> {
    events
        .into_iter()
        .map(|event| PlayEvent { event, track_id: rng.int_in(1..=n_tracks) })
        .collect()
}

/// Attach the user and track rows each event references.
///
/// Every event must resolve to exactly one user and one track; the first one that does not aborts
/// the join with a [`JoinError`].  Rows are never dropped.
#[instrument(skip_all, fields(events = plays.len(), users = users.len(), tracks = tracks.len()))]
pub fn denormalize(plays: Vec<PlayEvent>, users: &[User], tracks: &[Track]) -> Result<Vec<EnrichedEvent>> {
    let users_by_id: HashMap<u32, &User> = users.iter().map(|u| (u.user_id, u)).collect();
    let tracks_by_id: HashMap<u32, &Track> = tracks.iter().map(|t| (t.track_id, t)).collect();

    plays
        .into_iter()
        .map(|PlayEvent { event, track_id }| {
            let user = users_by_id
                .get(&event.user_id)
                .ok_or_else(|| JoinError::unknown_user(&DanglingKey { event: event.key(), id: event.user_id }))?;
            let track = tracks_by_id
                .get(&track_id)
                .ok_or_else(|| JoinError::unknown_track(&DanglingKey { event: event.key(), id: track_id }))?;
            Ok(EnrichedEvent { event, user: **user, track: **track })
        })
        .collect()
}
