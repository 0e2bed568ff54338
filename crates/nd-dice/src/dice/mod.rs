//! Narrative dice, their faces, and pool rolling.
//!
//! Each die face carries zero, one or two symbols. Symbols cancel in
//! opposed pairs (success against failure, advantage against threat), while
//! triumph and despair also count as a success or a failure respectively.

pub mod attribute;
pub mod faces;
pub mod pool;
pub mod tally;

pub use attribute::Attribute;
pub use pool::DicePool;
pub use tally::Tally;

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DiceError;

/// A symbol printed on a die face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Cancels one failure.
    Success,
    /// Cancels one threat.
    Advantage,
    /// Counts as a success and is tracked on its own.
    Triumph,
    /// Cancels one success.
    Failure,
    /// Cancels one advantage.
    Threat,
    /// Counts as a failure and is tracked on its own.
    Despair,
}

impl Symbol {
    /// The single-letter code used in face tables.
    pub fn code(self) -> char {
        match self {
            Self::Success => 'S',
            Self::Advantage => 'A',
            Self::Triumph => 'C',
            Self::Failure => 'F',
            Self::Threat => 'T',
            Self::Despair => 'D',
        }
    }

    /// Parse a symbol from its single-letter code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'S' => Some(Self::Success),
            'A' => Some(Self::Advantage),
            'C' => Some(Self::Triumph),
            'F' => Some(Self::Failure),
            'T' => Some(Self::Threat),
            'D' => Some(Self::Despair),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The symbols on one die face.
pub type Face = &'static [Symbol];

/// Render a face as its symbol codes, with `-` for a blank face.
pub fn face_code(face: Face) -> String {
    if face.is_empty() {
        "-".to_string()
    } else {
        face.iter().map(|s| s.code()).collect()
    }
}

/// One of the six narrative dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DieKind {
    /// Green d8, the basic positive die.
    Ability,
    /// Yellow d12, the upgraded positive die.
    Proficiency,
    /// Purple d8, the basic negative die.
    Difficulty,
    /// Red d12, the upgraded negative die.
    Challenge,
    /// Blue d6, a situational bonus.
    Boost,
    /// Black d6, a situational penalty.
    Setback,
}

impl DieKind {
    /// All kinds in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Ability,
        Self::Proficiency,
        Self::Difficulty,
        Self::Challenge,
        Self::Boost,
        Self::Setback,
    ];

    /// The display name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ability => "Ability",
            Self::Proficiency => "Proficiency",
            Self::Difficulty => "Difficulty",
            Self::Challenge => "Challenge",
            Self::Boost => "Boost",
            Self::Setback => "Setback",
        }
    }

    /// The face table of this kind, one entry per physical face.
    pub fn faces(self) -> &'static [Face] {
        match self {
            Self::Ability => &faces::ABILITY,
            Self::Proficiency => &faces::PROFICIENCY,
            Self::Difficulty => &faces::DIFFICULTY,
            Self::Challenge => &faces::CHALLENGE,
            Self::Boost => &faces::BOOST,
            Self::Setback => &faces::SETBACK,
        }
    }

    /// Returns the number of faces on this die.
    pub fn sides(self) -> usize {
        self.faces().len()
    }

    /// Roll this die once, choosing a face uniformly by index.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> Face {
        self.faces()[rng.random_range(0..self.sides())]
    }

    /// A one-line summary of the die and its faces.
    pub fn describe(self) -> String {
        let faces: Vec<String> = self.faces().iter().map(|f| face_code(*f)).collect();
        format!("{}: {} faces [{}]", self.name(), self.sides(), faces.join(", "))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for DieKind {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DiceError::InvalidDieKind(s.to_string()))
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
