//! Narrative dice probability engine.
//!
//! Models the six narrative dice (Ability, Proficiency, Difficulty,
//! Challenge, Boost, Setback), the way their symbols cancel across a
//! pool, and a batched Monte Carlo estimator for the chance that a roll
//! matches a query such as "success and advantage".

pub mod dice;
pub mod error;
pub mod estimate;

pub use dice::{Attribute, DicePool, DieKind, Face, Symbol, Tally};
pub use error::{DiceError, DiceResult};
pub use estimate::{
    Estimate, EstimateConfig, EstimateLog, EstimateRecord, Estimator, NoLog, Query, TracingLog,
    estimate_probability, seeded_rng,
};
