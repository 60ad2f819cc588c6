//! The additive skip-probability model.
//!
//! A row's probability is [`BASELINE`] plus the delta of every rule in [`SKIP_RULES`] whose
//! predicate holds, clamped to `[0, 1]`.  Rules are independent and not mutually exclusive, so any
//! number of them may fire on the same row; because every term is additive their order has no
//! effect on the result.
use ss_core::prelude::*;

use crate::model::EnrichedEvent;

/// Skip probability before any adjustment.
pub const BASELINE: f64 = 0.25;

/// One `condition -> delta` entry of the model.
#[derive(Clone, Copy, Debug)]
pub struct SkipRule {
    /// Short human-readable description of the condition.
    pub name: &'static str,
    /// Whether the rule fires for a row.
    pub applies: fn(&EnrichedEvent) -> bool,
    /// Amount added to the probability when the rule fires.
    pub delta: f64,
}

/// The complete rule table.
pub static SKIP_RULES: &[SkipRule] = &[
    // user
    SkipRule {
        name: "skip_tendency == high",
        applies: |e| e.user.skip_tendency == SkipTendency::High,
        delta: 0.25,
    },
    SkipRule {
        name: "skip_tendency == medium",
        applies: |e| e.user.skip_tendency == SkipTendency::Medium,
        delta: 0.10,
    },
    SkipRule {
        name: "age_group in {13-17, 18-24}",
        applies: |e| matches!(e.user.age_group, AgeGroup::Teen | AgeGroup::YoungAdult),
        delta: 0.05,
    },
    SkipRule {
        name: "subscription == free",
        applies: |e| e.user.subscription == Subscription::Free,
        delta: 0.10,
    },
    SkipRule {
        name: "country == LATAM",
        applies: |e| e.user.country == Country::Latam,
        delta: 0.08,
    },
    SkipRule {
        name: "country == EU_UK",
        applies: |e| e.user.country == Country::EuUk,
        delta: -0.05,
    },
    // session
    SkipRule {
        name: "time_of_day == morning",
        applies: |e| e.event.time_of_day == TimeOfDay::Morning,
        delta: -0.05,
    },
    SkipRule {
        name: "location == gym",
        applies: |e| e.event.location == Location::Gym,
        delta: 0.10,
    },
    SkipRule {
        name: "day_type == weekend",
        applies: |e| e.event.day_type == DayType::Weekend,
        delta: 0.05,
    },
    // track
    SkipRule {
        name: "genre in {pop, latin}",
        applies: |e| matches!(e.track.genre, Genre::Pop | Genre::Latin),
        delta: -0.05,
    },
    SkipRule {
        name: "genre in {classical, jazz}",
        applies: |e| matches!(e.track.genre, Genre::Classical | Genre::Jazz),
        delta: 0.10,
    },
    SkipRule {
        name: "energy < 0.3",
        applies: |e| e.track.energy < 0.3,
        delta: 0.05,
    },
    SkipRule {
        name: "danceability > 0.7",
        applies: |e| e.track.danceability > 0.7,
        delta: -0.05,
    },
];

/// The rules that fire for `row`, in table order.
pub fn fired_rules(row: &EnrichedEvent) -> impl Iterator<Item = &'static SkipRule> + '_ {
    SKIP_RULES.iter().filter(move |rule| (rule.applies)(row))
}

/// Baseline plus every firing delta, before clamping.
#[must_use]
pub fn raw_skip_score(row: &EnrichedEvent) -> f64 {
    fired_rules(row).fold(BASELINE, |p, rule| p + rule.delta)
}

/// Skip probability of `row`, always within `[0, 1]`.
#[must_use]
pub fn skip_probability(row: &EnrichedEvent) -> f64 {
    raw_skip_score(row).clamp(0.0, 1.0)
}
