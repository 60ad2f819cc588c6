//! Validated categorical distributions over the column vocabularies.
use std::collections::BTreeMap;

use rand::distributions::{
    Distribution,
    WeightedIndex,
};
use rand::Rng;
use ss_core::prelude::*;

use crate::errors::ConfigError;

/// Tolerance allowed when checking that a weight table sums to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A finite distribution over the symbols of one vocabulary.
///
/// Symbols are paired with weights in the vocabulary's declaration order, so the sampled stream
/// depends only on the weight values and never on map iteration details.
#[derive(Clone, Debug)]
pub struct Categorical<T> {
    /// Symbols in declaration order.
    symbols: Vec<T>,
    /// Index sampler over `symbols`.
    index: WeightedIndex<f64>,
}

impl<T: Vocabulary> Categorical<T> {
    /// Build a distribution from a symbol -> weight table.
    ///
    /// Every symbol of `T` must be present with a finite, non-negative weight, and the weights
    /// must sum to one within [`WEIGHT_SUM_TOLERANCE`].
    pub fn from_weights(weights: &BTreeMap<T, f64>) -> Result<Self> {
        let mut symbols = Vec::with_capacity(T::ALL.len());
        let mut values = Vec::with_capacity(T::ALL.len());
        for &symbol in T::ALL {
            let Some(&weight) = weights.get(&symbol) else {
                return Err(malformed::<T>(&format!("no weight given for {symbol:?}")));
            };
            if !weight.is_finite() || weight < 0.0 {
                return Err(malformed::<T>(&format!("weight {weight} for {symbol:?} is not a non-negative number")));
            }
            symbols.push(symbol);
            values.push(weight);
        }

        let total: f64 = values.iter().sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(malformed::<T>(&format!("weights sum to {total}, expected 1")));
        }

        let index = WeightedIndex::new(&values).map_err(|e| malformed::<T>(&e.to_string()))?;
        Ok(Self { symbols, index })
    }

    /// The symbols this distribution can produce.
    #[must_use]
    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }
}

impl<T: Copy> Distribution<T> for Categorical<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.symbols[self.index.sample(rng)]
    }
}

/// Shorthand for a [`ConfigError::MalformedWeights`] naming the offending column.
fn malformed<T: Vocabulary>(reason: &str) -> anyhow::Error {
    ConfigError::malformed_weights(&format!("{}: {reason}", T::COLUMN))
}

/// Build a weight table from `(symbol, weight)` pairs.
pub fn weight_table<T: Vocabulary>(pairs: &[(T, f64)]) -> BTreeMap<T, f64> {
    pairs.iter().copied().collect()
}
