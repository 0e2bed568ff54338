//! Sampling configuration for the estimator.

use crate::error::{DiceError, DiceResult};

/// Samples per batch on the interactive path.
pub const DEFAULT_BATCH_SIZE: u32 = 100;
/// Batches on the interactive path.
pub const DEFAULT_NUM_BATCHES: u32 = 10;
/// Samples per batch on the fast path.
pub const FAST_BATCH_SIZE: u32 = 1000;

/// How many samples the estimator draws, and whether it reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateConfig {
    /// Samples rolled per batch.
    pub batch_size: u32,
    /// Independent batches averaged into the final estimate.
    pub num_batches: u32,
    /// Emit a record through the estimator's log after each run.
    pub log: bool,
    /// RNG seed for reproducible runs. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            num_batches: DEFAULT_NUM_BATCHES,
            log: false,
            seed: None,
        }
    }
}

impl EstimateConfig {
    /// One large batch: quicker to answer, no spread between batches.
    pub fn fast() -> Self {
        Self {
            batch_size: FAST_BATCH_SIZE,
            num_batches: 1,
            ..Self::default()
        }
    }

    /// Set the number of samples per batch.
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the number of batches.
    pub fn with_num_batches(mut self, num_batches: u32) -> Self {
        self.num_batches = num_batches;
        self
    }

    /// Enable or disable the run record.
    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of pools rolled by one run.
    pub fn total_rolls(&self) -> u64 {
        u64::from(self.batch_size) * u64::from(self.num_batches)
    }

    /// Check that the configuration can produce an estimate.
    pub fn validate(&self) -> DiceResult<()> {
        if self.batch_size == 0 {
            return Err(DiceError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.num_batches == 0 {
            return Err(DiceError::InvalidConfig(
                "num_batches must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
