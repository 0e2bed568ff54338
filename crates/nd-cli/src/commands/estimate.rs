use colored::Colorize;
use nd_dice::{Estimator, Query};

use super::{PoolArgs, SamplingArgs};

pub fn run(pool: &PoolArgs, query: &str, sampling: &SamplingArgs, json: bool) -> Result<(), String> {
    let pool = pool.to_pool()?;
    let query = Query::parse(query).map_err(|e| e.to_string())?;
    let estimator = Estimator::new(sampling.to_config());

    let estimate = estimator
        .run(&pool, &query)
        .map_err(|e| e.to_string())?;

    if json {
        let body = serde_json::json!({
            "estimate": estimate.percent(1),
            "query_str": query.to_string(),
        });
        println!("{body}");
        return Ok(());
    }

    println!(
        "  Probability of {} is: {}",
        query,
        estimate.percent(1).bold()
    );
    if estimate.num_batches() > 1 {
        println!(
            "  {}",
            format!(
                "(std. error {:.1}% over {} batches of {})",
                estimate.std_error() * 100.0,
                estimate.num_batches(),
                estimate.batch_size
            )
            .dimmed()
        );
    }
    Ok(())
}
