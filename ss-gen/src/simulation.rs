//! The end-to-end generation pipeline.
//!
//! Stages run strictly in sequence, each fully materializing its table before the next begins:
//! 1. entity generation (users, tracks, sessions)
//! 2. event expansion
//! 3. track assignment
//! 4. the denormalizing join
//! 5. skip probabilities and Bernoulli outcomes
//!
//! [`run`] adds the final export.
use ss_core::prelude::*;

use crate::config::GeneratorConfig;
use crate::entities::{
    generate_sessions,
    generate_tracks,
    generate_users,
};
use crate::events::{
    assign_tracks,
    denormalize,
    expand_sessions,
};
use crate::export::export_events;
use crate::model::EnrichedEvent;
use crate::rng::RandomSource;
use crate::skip_model::{
    fired_rules,
    skip_probability,
};

/// Generate the labeled event table described by `config` and write it to its output path.
#[instrument(skip_all, fields(seed = config.seed, output = %config.output_path.display()))]
pub fn run(config: &GeneratorConfig) -> EmptyResult {
    info!("Output will be saved to: {}", config.output_path.display());
    let records = generate(config)?;
    export_events(&config.output_path, &records)?;

    let skips = records.iter().filter(|r| r.skip).count();
    #[allow(clippy::cast_precision_loss)]
    let skip_rate = skips as f64 / records.len().max(1) as f64;
    info!(rows = records.len(), skip_rate, "Saved final dataset to {}", config.output_path.display());
    Ok(())
}

/// Generate the labeled event table without writing it anywhere.
///
/// The configuration is validated before the first random draw.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<EventRecord>> {
    let dists = config.validate()?;
    let mut rng = RandomSource::new(config.seed);

    let users = generate_users(config.n_users, &dists, &mut rng);
    info!("Generated users table with {} rows", users.len());
    let tracks = generate_tracks(config.n_tracks, &dists, &mut rng);
    info!("Generated tracks table with {} rows", tracks.len());
    let sessions = generate_sessions(config.n_sessions, config.n_users, &dists, &mut rng);
    info!("Generated sessions table with {} rows", sessions.len());

    let events = expand_sessions(&sessions);
    info!("Expanded sessions to {} events", events.len());

    let plays = assign_tracks(events, config.n_tracks, &mut rng);
    let enriched = denormalize(plays, &users, &tracks)?;
    info!("Merged user and track attributes onto {} events", enriched.len());

    let records = sample_outcomes(enriched, &mut rng);
    debug!(draws = rng.draws(), "Assigned skip labels");
    Ok(records)
}

/// Score every event, then draw one independent uniform value per event (in order) and mark it
/// skipped when the draw falls below its probability.
#[instrument(skip_all, fields(events = enriched.len()))]
pub fn sample_outcomes(enriched: Vec<EnrichedEvent>, rng: &mut RandomSource) -> Vec<EventRecord> {
    let probabilities: Vec<f64> = enriched.iter().map(skip_probability).collect();
    if let Some(first) = enriched.first() {
        let fired: Vec<_> = fired_rules(first).map(|rule| rule.name).collect();
        debug!(?fired, skip_prob = probabilities[0], "Scored first event");
    }

    enriched
        .into_iter()
        .zip(probabilities)
        .map(|(row, skip_prob)| {
            let skip = rng.unit() < skip_prob;
            row.into_record(skip_prob, skip)
        })
        .collect()
}
