//! Shapley-value attribution against an all-zero reference input.
//!
//! Players are groups of columns in the transformed row (one group per input
//! field, so a one-hot block moves as a unit). A coalition's payoff is the model
//! output with its groups taken from the explained row and every other column
//! left at zero.
//!
//! Small games are solved exactly by enumerating every coalition. Larger ones use
//! seeded permutation sampling with antithetic (reversed) pairs; each sampled
//! permutation preserves efficiency, so the attributions always sum to
//! `f(x) - f(0)`.

use std::ops::Range;

use ndarray::{Array1, ArrayView1};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use thiserror::Error;

/// Largest player count solved by full enumeration (2^10 payoff evaluations).
pub const EXACT_PLAYER_LIMIT: usize = 10;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Error)]
pub enum AttributionError {
    #[error("no features to attribute")]
    NoFeatures,

    #[error("feature group {0:?} lies outside the input row")]
    GroupOutOfBounds(Range<usize>),

    #[error("model payoff is not finite")]
    NonFinite,
}

pub type Payoff<'a> = dyn Fn(&Array1<f64>) -> f64 + 'a;

/// Computes one attribution per group for the row `x`.
///
/// Carried in the explanation service as `Arc<dyn Attributor>`.
pub trait Attributor: Send + Sync {
    fn attribute(
        &self,
        payoff: &Payoff<'_>,
        x: ArrayView1<f64>,
        groups: &[Range<usize>],
    ) -> Result<Vec<f64>, AttributionError>;
}

#[derive(Debug, Clone)]
pub struct ShapleyAttributor {
    permutations: usize,
    seed: u64,
    exact_limit: usize,
}

impl ShapleyAttributor {
    pub fn new(permutations: usize, seed: u64) -> Self {
        Self {
            permutations: permutations.max(1),
            seed,
            exact_limit: EXACT_PLAYER_LIMIT,
        }
    }

    #[cfg(test)]
    pub fn with_exact_limit(mut self, limit: usize) -> Self {
        self.exact_limit = limit;
        self
    }
}

impl Attributor for ShapleyAttributor {
    fn attribute(
        &self,
        payoff: &Payoff<'_>,
        x: ArrayView1<f64>,
        groups: &[Range<usize>],
    ) -> Result<Vec<f64>, AttributionError> {
        if groups.is_empty() {
            return Err(AttributionError::NoFeatures);
        }
        if let Some(bad) = groups.iter().find(|g| g.end > x.len() || g.start > g.end) {
            return Err(AttributionError::GroupOutOfBounds(bad.clone()));
        }

        let mut game = Game {
            payoff,
            x: x.reborrow(),
            groups,
            scratch: Array1::zeros(x.len()),
        };

        if groups.len() <= self.exact_limit {
            exact(&mut game)
        } else {
            sampled(&mut game, self.permutations, self.seed)
        }
    }
}

struct Game<'a, 'p> {
    payoff: &'a Payoff<'p>,
    x: ArrayView1<'a, f64>,
    groups: &'a [Range<usize>],
    scratch: Array1<f64>,
}

impl Game<'_, '_> {
    fn reset(&mut self) {
        self.scratch.fill(0.0);
    }

    fn add(&mut self, player: usize) {
        let range = self.groups[player].clone();
        for i in range {
            self.scratch[i] = self.x[i];
        }
    }

    fn value(&self) -> Result<f64, AttributionError> {
        let v = (self.payoff)(&self.scratch);
        if v.is_finite() {
            Ok(v)
        } else {
            Err(AttributionError::NonFinite)
        }
    }
}

fn exact(game: &mut Game<'_, '_>) -> Result<Vec<f64>, AttributionError> {
    let m = game.groups.len();
    let coalitions = 1usize << m;

    let mut values = Vec::with_capacity(coalitions);
    for mask in 0..coalitions {
        game.reset();
        for player in 0..m {
            if mask & (1 << player) != 0 {
                game.add(player);
            }
        }
        values.push(game.value()?);
    }

    // weight[s] = s! (m - s - 1)! / m!
    let factorial = |n: usize| (1..=n).map(|k| k as f64).product::<f64>();
    let weights: Vec<f64> = (0..m)
        .map(|s| factorial(s) * factorial(m - s - 1) / factorial(m))
        .collect();

    let mut phi = vec![0.0; m];
    for mask in 0..coalitions {
        let size = mask.count_ones() as usize;
        for player in 0..m {
            let bit = 1 << player;
            if mask & bit == 0 {
                phi[player] += weights[size] * (values[mask | bit] - values[mask]);
            }
        }
    }
    Ok(phi)
}

fn sampled(
    game: &mut Game<'_, '_>,
    permutations: usize,
    seed: u64,
) -> Result<Vec<f64>, AttributionError> {
    let m = game.groups.len();
    let pairs = permutations.div_ceil(2);
    let mut rng = StdRng::seed_from_u64(seed);

    game.reset();
    let empty = game.value()?;

    let mut phi = vec![0.0; m];
    let mut order: Vec<usize> = (0..m).collect();
    for _ in 0..pairs {
        order.shuffle(&mut rng);
        for reversed in [false, true] {
            game.reset();
            let mut previous = empty;
            let sequence: Vec<usize> = if reversed {
                order.iter().rev().copied().collect()
            } else {
                order.clone()
            };
            for player in sequence {
                game.add(player);
                let current = game.value()?;
                phi[player] += current - previous;
                previous = current;
            }
        }
    }

    let n = (pairs * 2) as f64;
    Ok(phi.into_iter().map(|v| v / n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn singletons(n: usize) -> Vec<Range<usize>> {
        (0..n).map(|i| i..i + 1).collect()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_additive_model_exact() {
        let w = array![2.0, -1.0, 0.5];
        let payoff = |z: &Array1<f64>| z.dot(&w);
        let x = array![1.0, 3.0, 4.0];

        let phi = ShapleyAttributor::new(8, 1)
            .attribute(&payoff, x.view(), &singletons(3))
            .unwrap();
        assert_close(&phi, &[2.0, -3.0, 2.0]);
    }

    #[test]
    fn test_additive_model_sampled() {
        let w = array![2.0, -1.0, 0.5];
        let payoff = |z: &Array1<f64>| z.dot(&w);
        let x = array![1.0, 3.0, 4.0];

        let phi = ShapleyAttributor::new(4, 7)
            .with_exact_limit(0)
            .attribute(&payoff, x.view(), &singletons(3))
            .unwrap();
        assert_close(&phi, &[2.0, -3.0, 2.0]);
    }

    #[test]
    fn test_interaction_is_split_evenly() {
        let payoff = |z: &Array1<f64>| z[0] * z[1];
        let x = array![1.0, 1.0];

        let phi = ShapleyAttributor::new(8, 1)
            .attribute(&payoff, x.view(), &singletons(2))
            .unwrap();
        assert_close(&phi, &[0.5, 0.5]);
    }

    #[test]
    fn test_antithetic_pair_splits_two_player_interaction() {
        // With two players one permutation and its reverse are the whole game.
        let payoff = |z: &Array1<f64>| z[0] * z[1];
        let x = array![1.0, 1.0];

        let phi = ShapleyAttributor::new(2, 3)
            .with_exact_limit(0)
            .attribute(&payoff, x.view(), &singletons(2))
            .unwrap();
        assert_close(&phi, &[0.5, 0.5]);
    }

    #[test]
    fn test_sampled_attributions_are_efficient() {
        let payoff = |z: &Array1<f64>| (z[0] * z[1] + z[2]).tanh() + z[3].max(z[4]);
        let x = array![0.3, -1.2, 0.8, 2.0, 1.5];
        let groups = singletons(5);

        let phi = ShapleyAttributor::new(16, 9)
            .with_exact_limit(0)
            .attribute(&payoff, x.view(), &groups)
            .unwrap();
        let total: f64 = phi.iter().sum();
        let expected = payoff(&x) - payoff(&Array1::zeros(5));
        assert!((total - expected).abs() < 1e-9, "{total} vs {expected}");
    }

    #[test]
    fn test_groups_move_as_one_player() {
        let payoff = |z: &Array1<f64>| z.sum();
        let x = array![1.0, 2.0, 3.0];

        let phi = ShapleyAttributor::new(8, 1)
            .attribute(&payoff, x.view(), &[0..1, 1..3])
            .unwrap();
        assert_close(&phi, &[1.0, 5.0]);
    }

    #[test]
    fn test_sampling_is_deterministic_for_a_seed() {
        let payoff = |z: &Array1<f64>| (z[0] * z[1]).sin() + z[2] * z[3];
        let x = array![0.5, 1.5, -0.7, 2.2];
        let attributor = ShapleyAttributor::new(6, 42).with_exact_limit(0);

        let a = attributor.attribute(&payoff, x.view(), &singletons(4)).unwrap();
        let b = attributor.attribute(&payoff, x.view(), &singletons(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_finite_payoff_is_an_error() {
        let payoff = |_: &Array1<f64>| f64::NAN;
        let x = array![1.0];
        assert!(matches!(
            ShapleyAttributor::new(4, 1).attribute(&payoff, x.view(), &singletons(1)),
            Err(AttributionError::NonFinite)
        ));
    }

    #[test]
    fn test_empty_groups_is_an_error() {
        let payoff = |_: &Array1<f64>| 0.0;
        let x = array![1.0];
        assert!(matches!(
            ShapleyAttributor::new(4, 1).attribute(&payoff, x.view(), &[]),
            Err(AttributionError::NoFeatures)
        ));
    }

    #[test]
    fn test_group_out_of_bounds_is_an_error() {
        let payoff = |_: &Array1<f64>| 0.0;
        let x = array![1.0];
        assert!(matches!(
            ShapleyAttributor::new(4, 1).attribute(&payoff, x.view(), &[0..3]),
            Err(AttributionError::GroupOutOfBounds(_))
        ));
    }
}
