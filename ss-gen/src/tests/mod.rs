mod config_test;
mod distributions_test;
mod export_test;

use rstest::*;
use ss_core::prelude::*;

use crate::config::*;
use crate::model::*;
use crate::rng::RandomSource;

pub const TEST_SEED: u64 = 1234;

#[fixture]
pub fn dists() -> Distributions {
    GeneratorConfig::default().validate().unwrap()
}

#[fixture]
pub fn rng() -> RandomSource {
    RandomSource::new(TEST_SEED)
}

#[fixture]
pub fn small_config() -> GeneratorConfig {
    GeneratorConfig {
        seed: TEST_SEED,
        n_users: 20,
        n_tracks: 50,
        n_sessions: 30,
        ..Default::default()
    }
}

// A row on which no skip rule fires, so its probability is exactly the baseline.
#[fixture]
pub fn neutral_row() -> EnrichedEvent {
    EnrichedEvent {
        event: Event {
            session_id: 1,
            user_id: 1,
            position: 1,
            time_of_day: TimeOfDay::Afternoon,
            day_type: DayType::Weekday,
            location: Location::Home,
        },
        user: User {
            user_id: 1,
            age_group: AgeGroup::Adult,
            gender: Gender::Female,
            country: Country::NorthAmerica,
            subscription: Subscription::Premium,
            platform: Platform::Desktop,
            skip_tendency: SkipTendency::Low,
        },
        track: Track {
            track_id: 1,
            genre: Genre::Rock,
            popularity: 50,
            acousticness: 0.5,
            danceability: 0.5,
            energy: 0.5,
            tempo: 120,
            duration_sec: 200,
        },
    }
}

pub fn any<T: Vocabulary>(rng: &mut RandomSource) -> T {
    #[allow(clippy::cast_possible_truncation)]
    let last = T::ALL.len() as u32 - 1;
    T::ALL[rng.int_in(0..=last) as usize]
}

// Uniformly random over every field the skip model can look at.
pub fn random_row(rng: &mut RandomSource) -> EnrichedEvent {
    let mut row = neutral_row();
    row.event.time_of_day = any(rng);
    row.event.day_type = any(rng);
    row.event.location = any(rng);
    row.user.age_group = any(rng);
    row.user.gender = any(rng);
    row.user.country = any(rng);
    row.user.subscription = any(rng);
    row.user.platform = any(rng);
    row.user.skip_tendency = any(rng);
    row.track.genre = any(rng);
    row.track.energy = rng.unit();
    row.track.danceability = rng.unit();
    row.track.acousticness = rng.unit();
    row
}
