//! Shared vocabulary, schema and plumbing for the SkipSim crates.
pub mod categories;
pub mod errors;
pub mod logging;
pub mod prelude;
pub mod schema;

#[cfg(test)]
mod tests;
