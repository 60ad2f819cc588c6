mod categories_test;

use rstest::*;

use crate::prelude::*;

#[fixture]
pub fn record() -> EventRecord {
    EventRecord {
        session_id: 7,
        user_id: 3,
        position: 2,
        time_of_day: TimeOfDay::Afternoon,
        day_type: DayType::Weekday,
        location: Location::Home,
        track_id: 42,
        age_group: AgeGroup::Senior,
        gender: Gender::NonBinary,
        country: Country::Latam,
        subscription: Subscription::Free,
        platform: Platform::Ios,
        skip_tendency: SkipTendency::High,
        genre: Genre::Rock,
        popularity: 55,
        acousticness: 0.25,
        danceability: 0.5,
        energy: 0.5,
        tempo: 120,
        duration_sec: 200,
        skip_prob: 0.68,
        skip: true,
    }
}
