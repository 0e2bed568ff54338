//! Dice pool construction and rolling.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{DieKind, Tally};
use crate::error::DiceResult;

/// How many dice of each kind to roll together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    counts: [u32; 6],
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` dice of the given kind.
    pub fn add(mut self, kind: DieKind, count: u32) -> Self {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(count);
        self
    }

    /// Build a pool from die-kind names and counts.
    ///
    /// Every name is checked before the pool is returned, so an unknown
    /// kind never yields a partial pool.
    pub fn from_named<I, S>(counts: I) -> DiceResult<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        counts
            .into_iter()
            .try_fold(Self::new(), |pool, (name, count)| {
                let kind: DieKind = name.as_ref().parse()?;
                Ok(pool.add(kind, count))
            })
    }

    /// Returns how many dice of the given kind are in the pool.
    pub fn count(&self, kind: DieKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Returns how many dice are in the pool.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| u64::from(*c)).sum()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|c| *c == 0)
    }

    /// Iterate over every kind with its count, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (DieKind, u32)> + '_ {
        DieKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
    }

    /// Roll all dice in the pool into a fresh tally.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Tally {
        let mut tally = Tally::new();
        for (kind, count) in self.iter() {
            for _ in 0..count {
                tally = tally.apply(kind.roll(rng));
            }
        }
        tally
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(kind, count)| format!("{kind}: {count}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Attribute;
    use crate::error::DiceError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.total(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new()
            .add(DieKind::Ability, 2)
            .add(DieKind::Difficulty, 3)
            .add(DieKind::Ability, 1);
        assert_eq!(pool.count(DieKind::Ability), 3);
        assert_eq!(pool.count(DieKind::Difficulty), 3);
        assert_eq!(pool.count(DieKind::Boost), 0);
        assert_eq!(pool.total(), 6);
        assert!(!pool.is_empty());
    }

    #[test]
    fn huge_counts_do_not_overflow_total() {
        let pool = DicePool::new()
            .add(DieKind::Ability, u32::MAX)
            .add(DieKind::Ability, 1)
            .add(DieKind::Boost, 1);
        assert_eq!(pool.count(DieKind::Ability), u32::MAX);
        assert_eq!(pool.total(), u64::from(u32::MAX) + 1);
        assert!(!pool.is_empty());
    }

    #[test]
    fn from_named_counts() {
        let pool = DicePool::from_named([
            ("Ability", 2),
            ("Proficiency", 1),
            ("Difficulty", 1),
            ("Challenge", 0),
            ("Boost", 0),
            ("Setback", 0),
        ])
        .unwrap();
        assert_eq!(pool.count(DieKind::Ability), 2);
        assert_eq!(pool.count(DieKind::Proficiency), 1);
        assert_eq!(pool.total(), 4);
    }

    #[test]
    fn from_named_rejects_unknown_kind() {
        let result = DicePool::from_named([("Ability", 2), ("Wildcard", 1)]);
        assert!(matches!(
            result,
            Err(DiceError::InvalidDieKind(ref name)) if name == "Wildcard"
        ));
    }

    #[test]
    fn zero_pool_rolls_zero_tally() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = DicePool::from_named(DieKind::ALL.map(|k| (k.name(), 0))).unwrap();
        for _ in 0..10 {
            let tally = pool.roll(&mut rng);
            assert_eq!(tally, Tally::new());
            assert!(tally.matches(&[Attribute::Failure]));
            assert!(!tally.matches(&[Attribute::Success]));
        }
    }

    #[test]
    fn positive_pool_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = DicePool::new()
            .add(DieKind::Ability, 3)
            .add(DieKind::Proficiency, 2)
            .add(DieKind::Boost, 2);
        for _ in 0..200 {
            let tally = pool.roll(&mut rng);
            assert!(tally.success >= 0);
            assert!(tally.advantage >= 0);
            assert_eq!(tally.despair, 0);
            assert!(tally.triumph <= 2);
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::new()
            .add(DieKind::Proficiency, 2)
            .add(DieKind::Challenge, 2);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(pool.roll(&mut rng1), pool.roll(&mut rng2));
        }
    }

    #[test]
    fn display() {
        let pool = DicePool::new()
            .add(DieKind::Ability, 2)
            .add(DieKind::Setback, 1);
        assert_eq!(
            pool.to_string(),
            "Ability: 2, Proficiency: 0, Difficulty: 0, Challenge: 0, Boost: 0, Setback: 1"
        );
    }
}
