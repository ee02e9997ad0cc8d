//! The pseudo-random engine used for all stochastic sampling in this crate.
//!
//! Unlike the C++ original this is modeled after, the engine is not a
//! process-wide global: callers own an [`Rng`] and thread it through every
//! sampling call, which keeps propagation reproducible and lets each worker
//! of a parallel batch own an independent stream.

use rand::Rng as _;
use rand_distr::{Distribution, Exp, Normal, Poisson};
use rand_pcg::Pcg64;

/// The default seed used by a freshly constructed [`Rng`], matching the
/// fixed seed of the original Monte Carlo engine.
pub const DEFAULT_SEED: u64 = 999_983;

/// A seeded pseudo-random engine.
///
/// `Rng` is not thread-safe (it is not even `Sync`): callers either drive a
/// propagator sequentially or give each worker thread its own instance.
#[derive(Clone, Debug)]
pub struct Rng {
    seed: u64,
    inner: Pcg64,
}

impl Default for Rng {
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}

impl Rng {
    /// Construct a new engine from a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg64::new(u128::from(seed), 0xa02_bdbf_7bb3_c0a7),
        }
    }

    /// Reset this engine back to its original seed, reproducing the same
    /// stream of draws from the start.
    pub fn reset(&mut self) {
        *self = Self::seeded(self.seed);
    }

    /// A uniform draw in `[min, max)`.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.inner.gen_range(min..max)
    }

    /// A uniform integer draw in `[min, max]` (inclusive of both ends).
    pub fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        self.inner.gen_range(min..=max)
    }

    /// An exponential draw with mean `1 / lambda`.
    pub fn exponential(&mut self, lambda: f64) -> f64 {
        Exp::new(lambda)
            .expect("exponential rate must be positive")
            .sample(&mut self.inner)
    }

    /// A Poisson draw with mean `mu`.
    pub fn poisson(&mut self, mu: f64) -> f64 {
        Poisson::new(mu)
            .expect("poisson mean must be positive")
            .sample(&mut self.inner)
    }

    /// A Gaussian draw with the given mean and standard deviation.
    pub fn gaussian(&mut self, mean: f64, stdev: f64) -> f64 {
        Normal::new(mean, stdev)
            .expect("gaussian standard deviation must be non-negative")
            .sample(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn reset_reproduces_the_same_stream() {
        let mut rng = Rng::default();
        let first: Vec<f64> = (0..10).map(|_| rng.uniform(0., 1.)).collect();
        rng.reset();
        let second: Vec<f64> = (0..10).map(|_| rng.uniform(0., 1.)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn uniform_int_is_inclusive() {
        let mut rng = Rng::default();
        for _ in 0..1000 {
            let draw = rng.uniform_int(3, 3);
            assert_eq!(draw, 3);
        }
    }

    #[test]
    fn exponential_has_the_expected_mean() {
        let mut rng = Rng::default();
        let lambda = 2.0;
        let n = 200_000;
        let mean: f64 = (0..n).map(|_| rng.exponential(lambda)).sum::<f64>() / f64::from(n);
        assert_approx_eq!(f64, mean, 1. / lambda, epsilon = 0.01);
    }
}
