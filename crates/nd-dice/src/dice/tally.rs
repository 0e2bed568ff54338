//! Aggregated symbol counters for a single roll.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Attribute, Face, Symbol};
use crate::error::{DiceError, DiceResult};

/// Net symbol counts of one rolled pool.
///
/// Opposed symbols cancel: failures subtract from `success`, threats from
/// `advantage`. A triumph also adds a success and a despair also adds a
/// failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Successes minus failures.
    pub success: i32,
    /// Advantages minus threats.
    pub advantage: i32,
    /// Number of triumphs.
    pub triumph: i32,
    /// Number of despairs.
    pub despair: i32,
}

impl Tally {
    /// A fresh tally with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one symbol into the tally.
    #[must_use]
    pub fn apply_symbol(mut self, symbol: Symbol) -> Self {
        match symbol {
            Symbol::Success => self.success += 1,
            Symbol::Failure => self.success -= 1,
            Symbol::Advantage => self.advantage += 1,
            Symbol::Threat => self.advantage -= 1,
            Symbol::Triumph => {
                self.success += 1;
                self.triumph += 1;
            }
            Symbol::Despair => {
                self.success -= 1;
                self.despair += 1;
            }
        }
        self
    }

    /// Fold every symbol of a rolled face into the tally.
    #[must_use]
    pub fn apply(self, face: Face) -> Self {
        face.iter().fold(self, |tally, symbol| tally.apply_symbol(*symbol))
    }

    /// Whether this roll shows the given attribute.
    pub fn has(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Success => self.success > 0,
            Attribute::Failure => self.success <= 0,
            Attribute::Advantage => self.advantage > 0,
            Attribute::Threat => self.advantage < 0,
            Attribute::Triumph => self.triumph > 0,
            Attribute::Despair => self.despair > 0,
        }
    }

    /// Whether this roll shows every one of the given attributes.
    ///
    /// An empty list always matches.
    pub fn matches(&self, attributes: &[Attribute]) -> bool {
        attributes.iter().all(|attr| self.has(*attr))
    }

    /// Read the raw counter behind an attribute.
    ///
    /// `failure` and `threat` have no counter of their own and are rejected.
    pub fn value(&self, attribute: Attribute) -> DiceResult<i32> {
        match attribute {
            Attribute::Success => Ok(self.success),
            Attribute::Advantage => Ok(self.advantage),
            Attribute::Triumph => Ok(self.triumph),
            Attribute::Despair => Ok(self.despair),
            Attribute::Failure | Attribute::Threat => {
                Err(DiceError::UnknownAttribute(attribute.to_string()))
            }
        }
    }

    /// Read the counters for several attributes at once.
    pub fn extract(&self, attributes: &[Attribute]) -> DiceResult<BTreeMap<Attribute, i32>> {
        attributes
            .iter()
            .map(|attr| Ok((*attr, self.value(*attr)?)))
            .collect()
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "success {}, advantage {}, triumph {}, despair {}",
            self.success, self.advantage, self.triumph, self.despair
        )
    }
}
