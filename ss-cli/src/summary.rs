use std::collections::{
    BTreeMap,
    BTreeSet,
};
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::Serialize;
use ss_core::prelude::*;

use crate::load::read_events;

// Multi-select flags take comma-separated symbols and may be repeated; leaving one out means
// "don't filter on this column".
#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, help = "exported event table to read")]
    pub input: PathBuf,

    #[arg(long, value_delimiter = ',')]
    pub country: Vec<Country>,

    #[arg(long, value_delimiter = ',')]
    pub platform: Vec<Platform>,

    #[arg(long, value_delimiter = ',')]
    pub age_group: Vec<AgeGroup>,

    #[arg(long, value_delimiter = ',')]
    pub subscription: Vec<Subscription>,

    #[arg(long, value_delimiter = ',')]
    pub genre: Vec<Genre>,

    #[arg(long, value_delimiter = ',')]
    pub time_of_day: Vec<TimeOfDay>,

    #[arg(long, value_delimiter = ',')]
    pub day_type: Vec<DayType>,

    #[arg(long, default_value_t = 0)]
    pub min_position: u32,

    #[arg(long, default_value_t = 40)]
    pub max_position: u32,

    #[arg(long, help = "print the report as JSON")]
    pub json: bool,
}

/// Which events a report covers.  Within a column any selected symbol matches; across columns every
/// non-empty selection must match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventFilter {
    pub country: BTreeSet<Country>,
    pub platform: BTreeSet<Platform>,
    pub age_group: BTreeSet<AgeGroup>,
    pub subscription: BTreeSet<Subscription>,
    pub genre: BTreeSet<Genre>,
    pub time_of_day: BTreeSet<TimeOfDay>,
    pub day_type: BTreeSet<DayType>,
    pub positions: RangeInclusive<u32>,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            country: BTreeSet::new(),
            platform: BTreeSet::new(),
            age_group: BTreeSet::new(),
            subscription: BTreeSet::new(),
            genre: BTreeSet::new(),
            time_of_day: BTreeSet::new(),
            day_type: BTreeSet::new(),
            positions: 0..=40,
        }
    }
}

impl From<&Args> for EventFilter {
    fn from(args: &Args) -> Self {
        Self {
            country: args.country.iter().copied().collect(),
            platform: args.platform.iter().copied().collect(),
            age_group: args.age_group.iter().copied().collect(),
            subscription: args.subscription.iter().copied().collect(),
            genre: args.genre.iter().copied().collect(),
            time_of_day: args.time_of_day.iter().copied().collect(),
            day_type: args.day_type.iter().copied().collect(),
            positions: args.min_position..=args.max_position,
        }
    }
}

fn selected<T: Ord>(selection: &BTreeSet<T>, value: &T) -> bool {
    selection.is_empty() || selection.contains(value)
}

impl EventFilter {
    pub fn matches(&self, r: &EventRecord) -> bool {
        selected(&self.country, &r.country)
            && selected(&self.platform, &r.platform)
            && selected(&self.age_group, &r.age_group)
            && selected(&self.subscription, &r.subscription)
            && selected(&self.genre, &r.genre)
            && selected(&self.time_of_day, &r.time_of_day)
            && selected(&self.day_type, &r.day_type)
            && self.positions.contains(&r.position)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupRate {
    pub key: String,
    pub events: usize,
    pub skip_rate: f64,
}

/// Skip rates over the events selected by an [`EventFilter`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkipReport {
    pub events: usize,
    /// `None` when the filter selects nothing.
    pub skip_rate: Option<f64>,
    pub by_age_group: Vec<GroupRate>,
    pub by_position: Vec<GroupRate>,
    pub by_time_of_day: Vec<GroupRate>,
    pub by_genre: Vec<GroupRate>,
}

#[allow(clippy::cast_precision_loss)]
fn rate(skips: usize, events: usize) -> f64 {
    skips as f64 / events as f64
}

// Groups come out in key order: declaration order for categorical columns, numeric for positions.
fn skip_rate_by<K: Ord + fmt::Display>(rows: &[&EventRecord], key: impl Fn(&EventRecord) -> K) -> Vec<GroupRate> {
    let mut groups: BTreeMap<K, (usize, usize)> = BTreeMap::new();
    for &row in rows {
        let (events, skips) = groups.entry(key(row)).or_default();
        *events += 1;
        *skips += usize::from(row.skip);
    }

    groups
        .into_iter()
        .map(|(k, (events, skips))| GroupRate { key: k.to_string(), events, skip_rate: rate(skips, events) })
        .collect()
}

impl SkipReport {
    pub fn build(records: &[EventRecord], filter: &EventFilter) -> Self {
        let rows: Vec<&EventRecord> = records.iter().filter(|r| filter.matches(r)).collect();
        let skips = rows.iter().filter(|r| r.skip).count();

        Self {
            events: rows.len(),
            skip_rate: (!rows.is_empty()).then(|| rate(skips, rows.len())),
            by_age_group: skip_rate_by(&rows, |r| r.age_group),
            by_position: skip_rate_by(&rows, |r| r.position),
            by_time_of_day: skip_rate_by(&rows, |r| r.time_of_day),
            by_genre: skip_rate_by(&rows, |r| r.genre),
        }
    }
}

impl fmt::Display for SkipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.skip_rate {
            Some(rate) => writeln!(f, "Overall skip rate: {:.2}% ({} events)", rate * 100.0, self.events)?,
            None => writeln!(f, "Overall skip rate: n/a (no events match the filters)")?,
        }

        for (title, groups) in [
            ("age group", &self.by_age_group),
            ("track position", &self.by_position),
            ("time of day", &self.by_time_of_day),
            ("genre", &self.by_genre),
        ] {
            if groups.is_empty() {
                continue;
            }
            writeln!(f, "\nSkip rate by {title}")?;
            for group in groups {
                writeln!(f, "  {:<12} {:>7.2}%  ({} events)", group.key, group.skip_rate * 100.0, group.events)?;
            }
        }
        Ok(())
    }
}

pub fn cmd(args: &Args) -> EmptyResult {
    ensure!(
        args.min_position <= args.max_position,
        "--min-position ({}) is greater than --max-position ({})",
        args.min_position,
        args.max_position,
    );
    let records = read_events(&args.input)?;
    let filter = EventFilter::from(args);
    let report = SkipReport::build(&records, &filter);
    debug!(selected = report.events, total = records.len(), "applied filters");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
