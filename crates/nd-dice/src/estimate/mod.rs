//! Monte Carlo estimation of roll probabilities.
//!
//! An [`Estimator`] rolls a pool `batch_size` times per batch, counts the
//! rolls whose [`Tally`](crate::dice::Tally) matches the [`Query`], and
//! averages the per-batch hit rates over `num_batches` batches. Several
//! small batches give a spread to judge stability by; one large batch
//! answers faster. Cost is linear in the total number of rolls.

pub mod config;
pub mod query;
pub mod record;

pub use config::EstimateConfig;
pub use query::Query;
pub use record::{EstimateLog, EstimateRecord, NoLog, TracingLog};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::dice::DicePool;
use crate::error::DiceResult;

/// The outcome of one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Mean of the batch estimates, in `[0, 1]`.
    pub probability: f64,
    /// Hit rate of each batch, in the order drawn.
    pub batch_estimates: Vec<f64>,
    /// Samples per batch.
    pub batch_size: u32,
}

impl Estimate {
    /// Number of batches drawn.
    pub fn num_batches(&self) -> u32 {
        u32::try_from(self.batch_estimates.len()).unwrap_or(u32::MAX)
    }

    /// Total number of pools rolled.
    pub fn total_samples(&self) -> u64 {
        u64::from(self.batch_size) * self.batch_estimates.len() as u64
    }

    /// Standard error of the estimate.
    ///
    /// With several batches this is the spread of the batch means; a single
    /// batch falls back to the binomial error of its hit rate.
    pub fn std_error(&self) -> f64 {
        let k = self.batch_estimates.len();
        if k > 1 {
            let variance = self
                .batch_estimates
                .iter()
                .map(|p| (p - self.probability).powi(2))
                .sum::<f64>()
                / (k - 1) as f64;
            (variance / k as f64).sqrt()
        } else {
            let p = self.probability;
            (p * (1.0 - p) / f64::from(self.batch_size.max(1))).sqrt()
        }
    }

    /// The probability as a percentage string with the given decimals.
    pub fn percent(&self, decimals: usize) -> String {
        format_percent(self.probability, decimals)
    }
}

/// Render a probability as a percentage, e.g. `0.4567` at one decimal is
/// `"45.7%"`.
pub fn format_percent(probability: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, probability * 100.0)
}

/// Runs batched Monte Carlo estimates and reports them to a log.
#[derive(Debug, Clone)]
pub struct Estimator<L = TracingLog> {
    config: EstimateConfig,
    log: L,
}

impl Estimator<TracingLog> {
    /// Create an estimator that logs through `tracing`.
    pub fn new(config: EstimateConfig) -> Self {
        Self::with_log(config, TracingLog)
    }
}

impl<L: EstimateLog> Estimator<L> {
    /// Create an estimator with a custom log collaborator.
    pub fn with_log(config: EstimateConfig, log: L) -> Self {
        Self { config, log }
    }

    /// The sampling configuration.
    pub fn config(&self) -> &EstimateConfig {
        &self.config
    }

    /// Estimate the chance that rolling `pool` matches `query`.
    ///
    /// Fails before rolling anything if the configuration is invalid.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        pool: &DicePool,
        query: &Query,
        rng: &mut R,
    ) -> DiceResult<Estimate> {
        self.config.validate()?;
        let batch_size = self.config.batch_size;

        let batch_estimates: Vec<f64> = (0..self.config.num_batches)
            .map(|_| sample_batch(pool, query, batch_size, rng))
            .collect();
        let probability = batch_estimates.iter().sum::<f64>() / batch_estimates.len() as f64;

        let estimate = Estimate {
            probability,
            batch_estimates,
            batch_size,
        };

        if self.config.log {
            self.log
                .record(&EstimateRecord::new(pool, query, &estimate));
        }
        Ok(estimate)
    }

    /// Estimate using an RNG built from the configured seed, or from OS
    /// entropy when no seed is set.
    pub fn run(&self, pool: &DicePool, query: &Query) -> DiceResult<Estimate> {
        self.estimate(pool, query, &mut seeded_rng(self.config.seed))
    }
}

/// An RNG seeded for reproducibility, or from OS entropy when `seed` is
/// `None`.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Estimate a probability with the given configuration, logging through
/// `tracing` when the configuration asks for it.
pub fn estimate_probability(
    pool: &DicePool,
    query: &Query,
    config: EstimateConfig,
) -> DiceResult<f64> {
    Estimator::new(config)
        .run(pool, query)
        .map(|estimate| estimate.probability)
}

/// Hit rate of one batch of fresh rolls.
fn sample_batch<R: Rng + ?Sized>(
    pool: &DicePool,
    query: &Query,
    batch_size: u32,
    rng: &mut R,
) -> f64 {
    let hits = (0..batch_size)
        .filter(|_| query.matches(&pool.roll(rng)))
        .count();
    hits as f64 / f64::from(batch_size)
}
