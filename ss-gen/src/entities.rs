//! Generators for the three entity tables.
//!
//! Each table is sampled column by column: all `n` values of the first attribute, then all `n` of
//! the next, and so on.  Columns are independent of one another, and the column order here fixes
//! the order in which the shared random stream is consumed.
use tracing::instrument;

use crate::config::Distributions;
use crate::model::{
    Session,
    Track,
    User,
    DURATION_SEC,
    POPULARITY,
    SESSION_LENGTH,
    TEMPO_BPM,
};
use crate::rng::RandomSource;

/// Draw `n` values with `draw`, in order.
fn column<T>(n: u32, mut draw: impl FnMut() -> T) -> Vec<T> {
    (0..n).map(|_| draw()).collect()
}

/// Generate `n` users with dense ids `1..=n`.
#[instrument(skip(dists, rng))]
pub fn generate_users(n: u32, dists: &Distributions, rng: &mut RandomSource) -> Vec<User> {
    let age_group = column(n, || rng.pick(&dists.age_group));
    let gender = column(n, || rng.pick(&dists.gender));
    let country = column(n, || rng.pick(&dists.country));
    let subscription = column(n, || rng.pick(&dists.subscription));
    let platform = column(n, || rng.pick(&dists.platform));
    let skip_tendency = column(n, || rng.pick(&dists.skip_tendency));

    (0..n as usize)
        .map(|i| User {
            user_id: row_id(i),
            age_group: age_group[i],
            gender: gender[i],
            country: country[i],
            subscription: subscription[i],
            platform: platform[i],
            skip_tendency: skip_tendency[i],
        })
        .collect()
}

/// Generate `n` tracks with dense ids `1..=n`.
#[instrument(skip(dists, rng))]
pub fn generate_tracks(n: u32, dists: &Distributions, rng: &mut RandomSource) -> Vec<Track> {
    let genre = column(n, || rng.pick(&dists.genre));
    let popularity = column(n, || rng.int_in(POPULARITY));
    let acousticness = column(n, || rng.unit());
    let danceability = column(n, || rng.unit());
    let energy = column(n, || rng.unit());
    let tempo = column(n, || rng.int_in(TEMPO_BPM));
    let duration_sec = column(n, || rng.int_in(DURATION_SEC));

    (0..n as usize)
        .map(|i| Track {
            track_id: row_id(i),
            genre: genre[i],
            popularity: popularity[i],
            acousticness: acousticness[i],
            danceability: danceability[i],
            energy: energy[i],
            tempo: tempo[i],
            duration_sec: duration_sec[i],
        })
        .collect()
}

/// Generate `n` sessions with dense ids `1..=n`, each owned by a uniformly chosen user in
/// `1..=n_users`.
///
/// # Panics
///
/// Panics if `n > 0` and `n_users == 0`; [`GeneratorConfig::validate`](crate::GeneratorConfig::validate)
/// rules this out for configured runs.
#[instrument(skip(dists, rng))]
pub fn generate_sessions(n: u32, n_users: u32, dists: &Distributions, rng: &mut RandomSource) -> Vec<Session> {
    let user_id = column(n, || rng.int_in(1..=n_users));
    let time_of_day = column(n, || rng.pick(&dists.time_of_day));
    let day_type = column(n, || rng.pick(&dists.day_type));
    let location = column(n, || rng.pick(&dists.location));
    let session_length = column(n, || rng.int_in(SESSION_LENGTH));

    (0..n as usize)
        .map(|i| Session {
            session_id: row_id(i),
            user_id: user_id[i],
            time_of_day: time_of_day[i],
            day_type: day_type[i],
            location: location[i],
            session_length: session_length[i],
        })
        .collect()
}

/// 1-based id of the row at index `i`.
#[allow(clippy::cast_possible_truncation)] // row counts are bounded by a u32 count
const fn row_id(i: usize) -> u32 {
    i as u32 + 1
}
