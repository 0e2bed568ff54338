//! Attributes that a query can ask about.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiceError;

/// A qualitative outcome of a roll.
///
/// All six attributes can be tested against a [`Tally`](super::Tally); only
/// success, advantage, triumph and despair name a counter that can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Net successes are positive.
    Success,
    /// Net successes are zero or negative.
    Failure,
    /// Net advantage is positive.
    Advantage,
    /// Net advantage is negative.
    Threat,
    /// At least one triumph was rolled.
    Triumph,
    /// At least one despair was rolled.
    Despair,
}

impl Attribute {
    /// All attributes.
    pub const ALL: [Self; 6] = [
        Self::Success,
        Self::Failure,
        Self::Advantage,
        Self::Threat,
        Self::Triumph,
        Self::Despair,
    ];

    /// The lowercase name used in queries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Advantage => "advantage",
            Self::Threat => "threat",
            Self::Triumph => "triumph",
            Self::Despair => "despair",
        }
    }
}

impl FromStr for Attribute {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DiceError::UnknownAttribute(s.to_string()))
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_names() {
        for attr in Attribute::ALL {
            assert_eq!(attr.name().parse::<Attribute>().unwrap(), attr);
        }
        assert_eq!("Triumph".parse::<Attribute>().unwrap(), Attribute::Triumph);
    }

    #[test]
    fn unknown_attribute_is_rejected() {
        let err = "explode".parse::<Attribute>().unwrap_err();
        assert!(matches!(err, DiceError::UnknownAttribute(ref name) if name == "explode"));
        assert_eq!(err.to_string(), "unknown attribute: explode");
    }
}
