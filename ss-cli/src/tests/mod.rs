mod load_test;

use std::path::Path;

use rstest::*;
use ss_core::prelude::*;

pub fn event(session_id: u32, position: u32, skip: bool) -> EventRecord {
    EventRecord {
        session_id,
        user_id: session_id % 3 + 1,
        position,
        time_of_day: TimeOfDay::Evening,
        day_type: DayType::Weekday,
        location: Location::Home,
        track_id: position * 10,
        age_group: AgeGroup::YoungAdult,
        gender: Gender::Male,
        country: Country::EuUk,
        subscription: Subscription::Premium,
        platform: Platform::Android,
        skip_tendency: SkipTendency::Medium,
        genre: Genre::Pop,
        popularity: 70,
        acousticness: 0.1,
        danceability: 0.8,
        energy: 0.6,
        tempo: 128,
        duration_sec: 180 + position,
        skip_prob: 0.3,
        skip,
    }
}

// Two sessions, deliberately out of order: session 2 has 3 plays, session 1 has 4.
#[fixture]
pub fn shuffled_events() -> Vec<EventRecord> {
    vec![
        event(2, 3, true),
        event(1, 2, false),
        event(2, 1, false),
        event(1, 4, true),
        event(1, 1, true),
        event(2, 2, true),
        event(1, 3, false),
    ]
}

pub fn write_events(path: &Path, records: &[EventRecord]) {
    let mut writer = csv::Writer::from_path(path).unwrap();
    for record in records {
        writer.serialize(record).unwrap();
    }
    writer.flush().unwrap();
}
