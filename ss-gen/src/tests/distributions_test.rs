use std::collections::BTreeMap;

use assertables::*;

use super::*;
use crate::distributions::{
    weight_table,
    Categorical,
};

#[rstest]
fn test_symbols_follow_declaration_order(dists: Distributions) {
    assert_eq!(dists.skip_tendency.symbols(), SkipTendency::ALL);
    assert_eq!(dists.genre.symbols(), Genre::ALL);
}

#[rstest]
fn test_zero_weight_symbol_never_drawn(mut rng: RandomSource) {
    let dist = Categorical::from_weights(&weight_table(&[
        (Location::Home, 0.5),
        (Location::Commute, 0.5),
        (Location::Work, 0.0),
        (Location::Gym, 0.0),
    ]))
    .unwrap();

    for _ in 0..1000 {
        assert!(matches!(rng.pick(&dist), Location::Home | Location::Commute));
    }
}

#[rstest]
fn test_empirical_frequencies_match_weights(dists: Distributions, mut rng: RandomSource) {
    const DRAWS: usize = 20_000;
    let mut counts: BTreeMap<Genre, usize> = BTreeMap::new();
    for _ in 0..DRAWS {
        *counts.entry(rng.pick(&dists.genre)).or_default() += 1;
    }

    let weights = GeneratorConfig::default().weights.genre;
    for (genre, weight) in weights {
        #[allow(clippy::cast_precision_loss)]
        let observed = counts.get(&genre).copied().unwrap_or_default() as f64 / DRAWS as f64;
        assert_in_delta!(observed, weight, 0.015);
    }
}
