pub mod dice;
pub mod estimate;
pub mod roll;

use clap::Args;
use nd_dice::{DicePool, EstimateConfig};

/// Number of dice of each kind in the pool.
#[derive(Args, Debug)]
pub struct PoolArgs {
    /// Ability dice (green d8)
    #[arg(short = 'a', long, default_value_t = 0)]
    pub ability: u32,

    /// Proficiency dice (yellow d12)
    #[arg(short = 'p', long, default_value_t = 0)]
    pub proficiency: u32,

    /// Difficulty dice (purple d8)
    #[arg(short = 'd', long, default_value_t = 0)]
    pub difficulty: u32,

    /// Challenge dice (red d12)
    #[arg(short = 'c', long, default_value_t = 0)]
    pub challenge: u32,

    /// Boost dice (blue d6)
    #[arg(short = 'b', long, default_value_t = 0)]
    pub boost: u32,

    /// Setback dice (black d6)
    #[arg(short = 's', long, default_value_t = 0)]
    pub setback: u32,
}

impl PoolArgs {
    /// Build the pool through the same name-checked path any caller uses.
    pub fn to_pool(&self) -> Result<DicePool, String> {
        DicePool::from_named([
            ("Ability", self.ability),
            ("Proficiency", self.proficiency),
            ("Difficulty", self.difficulty),
            ("Challenge", self.challenge),
            ("Boost", self.boost),
            ("Setback", self.setback),
        ])
        .map_err(|e| e.to_string())
    }
}

/// How many samples to draw.
#[derive(Args, Debug)]
pub struct SamplingArgs {
    /// Samples per batch (default: 100, or 1000 with --fast)
    #[arg(long)]
    pub batch_size: Option<u32>,

    /// Number of batches (default: 10, or 1 with --fast)
    #[arg(long)]
    pub batches: Option<u32>,

    /// Use one large batch instead of several small ones
    #[arg(long)]
    pub fast: bool,

    /// RNG seed for a reproducible estimate
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log a summary of the run to stderr
    #[arg(long)]
    pub log: bool,
}

impl SamplingArgs {
    pub fn to_config(&self) -> EstimateConfig {
        let mut config = if self.fast {
            EstimateConfig::fast()
        } else {
            EstimateConfig::default()
        };
        if let Some(batch_size) = self.batch_size {
            config = config.with_batch_size(batch_size);
        }
        if let Some(batches) = self.batches {
            config = config.with_num_batches(batches);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.with_log(self.log)
    }
}
