#![deny(
    // Overly strict on purpose: the point is to force inline allows wherever we knowingly deviate,
    // so a reviewer can see where to take a second look.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # ss-gen – synthetic listening-session generator for SkipSim
//!
//! ss-gen builds a labeled, event-level dataset of music-streaming sessions for training and
//! evaluating skip-prediction models.  Everything is drawn from a single seeded
//! [`RandomSource`](rng::RandomSource), so a given configuration always yields the same file.
//!
//! ## Pipeline overview
//! 1. Entity generation ([`entities`]) – users, tracks and sessions, each attribute sampled from a
//!    fixed categorical or bounded numeric distribution.
//! 2. Event expansion ([`events::expand_sessions`]) – one row per position in each session.
//! 3. Track assignment ([`events::assign_tracks`]) – a uniformly random track per event.
//! 4. Join ([`events::denormalize`]) – user and track attributes copied onto each event.
//! 5. Labeling ([`skip_model`], [`simulation::sample_outcomes`]) – an additive, clamped skip
//!    probability and a Bernoulli outcome per event.
//! 6. Export ([`export`]) – the final table written as CSV.
//!
//! [`simulation::run`] orchestrates the whole pipeline.

pub mod config;
pub mod distributions;
pub mod entities;
#[allow(missing_docs, clippy::missing_docs_in_private_items)]
pub mod errors;
pub mod events;
pub mod export;
pub mod model;
pub mod rng;
pub mod simulation;
pub mod skip_model;

pub use config::GeneratorConfig;
pub use model::{
    EnrichedEvent,
    Event,
    EventKey,
    PlayEvent,
    Session,
    Track,
    User,
};
pub use rng::RandomSource;

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests;
