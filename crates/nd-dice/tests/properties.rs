//! Property tests for pool rolling and estimation.

use nd_dice::{Attribute, DicePool, DieKind, EstimateConfig, Estimator, NoLog, Query};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pool_strategy() -> impl Strategy<Value = DicePool> {
    prop::array::uniform6(0u32..4).prop_map(|counts| {
        DieKind::ALL
            .into_iter()
            .zip(counts)
            .fold(DicePool::new(), |pool, (kind, count)| pool.add(kind, count))
    })
}

fn query_strategy() -> impl Strategy<Value = Query> {
    prop::collection::vec(prop::sample::select(Attribute::ALL.to_vec()), 1..4).prop_map(Query::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn estimate_stays_in_unit_interval(
        pool in pool_strategy(),
        query in query_strategy(),
        seed in any::<u64>(),
    ) {
        let config = EstimateConfig::default()
            .with_batch_size(20)
            .with_num_batches(3)
            .with_seed(seed);
        let estimate = Estimator::with_log(config, NoLog).run(&pool, &query).unwrap();
        prop_assert!((0.0..=1.0).contains(&estimate.probability));
        for p in &estimate.batch_estimates {
            prop_assert!((0.0..=1.0).contains(p));
        }
    }

    #[test]
    fn seeded_runs_repeat(
        pool in pool_strategy(),
        query in query_strategy(),
        seed in any::<u64>(),
    ) {
        let config = EstimateConfig::default()
            .with_batch_size(25)
            .with_num_batches(2)
            .with_seed(seed);
        let estimator = Estimator::with_log(config, NoLog);
        let a = estimator.run(&pool, &query).unwrap();
        let b = estimator.run(&pool, &query).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn tally_bounded_by_pool(pool in pool_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let tally = pool.roll(&mut rng);
        let positive = pool.count(DieKind::Ability)
            + pool.count(DieKind::Proficiency)
            + pool.count(DieKind::Boost);
        let negative = pool.count(DieKind::Difficulty)
            + pool.count(DieKind::Challenge)
            + pool.count(DieKind::Setback);
        let (positive, negative) = (2 * positive as i32, 2 * negative as i32);
        prop_assert!(tally.success <= positive && tally.success >= -negative);
        prop_assert!(tally.advantage <= positive && tally.advantage >= -negative);
        prop_assert!(tally.triumph >= 0 && tally.triumph <= pool.count(DieKind::Proficiency) as i32);
        prop_assert!(tally.despair >= 0 && tally.despair <= pool.count(DieKind::Challenge) as i32);
    }

    #[test]
    fn unknown_kind_never_builds_a_pool(name in "[a-z]{3,10}", count in 0u32..5) {
        prop_assume!(name.parse::<DieKind>().is_err());
        prop_assert!(DicePool::from_named([("Ability", 1), (name.as_str(), count)]).is_err());
    }
}
