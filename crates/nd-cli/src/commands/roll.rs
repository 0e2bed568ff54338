use colored::Colorize;
use nd_dice::seeded_rng;
use nd_dice::{Attribute, Tally};

use super::PoolArgs;

const COUNTERS: [Attribute; 4] = [
    Attribute::Success,
    Attribute::Advantage,
    Attribute::Triumph,
    Attribute::Despair,
];

pub fn run(pool: &PoolArgs, seed: Option<u64>) -> Result<(), String> {
    let pool = pool.to_pool()?;
    let mut rng = seeded_rng(seed);
    let tally = pool.roll(&mut rng);

    println!("  {} {}", "Rolled".bold(), pool);
    println!();
    let values = tally.extract(&COUNTERS).map_err(|e| e.to_string())?;
    for (attr, value) in &values {
        println!("  {:<10} {:>3}", attr.name(), value);
    }
    println!();

    let shown = shown_attributes(&tally);
    if shown.is_empty() {
        println!("  Shows: {}", "nothing".dimmed());
    } else {
        println!("  Shows: {}", shown.join(", ").green());
    }
    Ok(())
}

fn shown_attributes(tally: &Tally) -> Vec<&'static str> {
    Attribute::ALL
        .into_iter()
        .filter(|attr| tally.has(*attr))
        .map(Attribute::name)
        .collect()
}
