//! Run records and the log collaborators that receive them.

use serde::Serialize;

use super::{Estimate, Query, format_percent};
use crate::dice::DicePool;

/// A summary of one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRecord {
    /// The pool, as `"Ability: 2, Proficiency: 1, ..."`.
    pub pool: String,
    /// The query, as `"success and advantage"`.
    pub query: String,
    /// Number of batches drawn.
    pub num_batches: u32,
    /// Samples per batch.
    pub batch_size: u32,
    /// The estimated probability.
    pub probability: f64,
}

impl EstimateRecord {
    /// Summarize a finished run.
    pub fn new(pool: &DicePool, query: &Query, estimate: &Estimate) -> Self {
        Self {
            pool: pool.to_string(),
            query: query.to_string(),
            num_batches: estimate.num_batches(),
            batch_size: estimate.batch_size,
            probability: estimate.probability,
        }
    }

    /// The probability as a whole percentage, e.g. `"46%"`.
    pub fn percent(&self) -> String {
        format_percent(self.probability, 0)
    }
}

/// Receives a record after each logged estimation run.
pub trait EstimateLog {
    /// Handle one run record.
    fn record(&self, record: &EstimateRecord);
}

/// Emits records as `tracing` events at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl EstimateLog for TracingLog {
    fn record(&self, record: &EstimateRecord) {
        tracing::info!(
            pool = %record.pool,
            query = %record.query,
            num_batches = record.num_batches,
            batch_size = record.batch_size,
            probability = record.probability,
            "mean probability of {} on the roll \"{}\" with {} batches of size {} is {}",
            record.query,
            record.pool,
            record.num_batches,
            record.batch_size,
            record.percent(),
        );
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLog;

impl EstimateLog for NoLog {
    fn record(&self, _record: &EstimateRecord) {}
}
