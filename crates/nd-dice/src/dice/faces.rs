//! Face tables for the six narrative dice.
//!
//! Duplicate faces are listed with their natural multiplicity so that a
//! uniform draw over face indices reproduces the physical die.

use super::Face;
use super::Symbol::{
    Advantage as A, Despair as D, Failure as F, Success as S, Threat as T, Triumph as C,
};

/// Ability die (d8).
pub const ABILITY: [Face; 8] = [&[], &[S], &[S], &[S, S], &[A], &[A], &[S, A], &[A, A]];

/// Proficiency die (d12).
pub const PROFICIENCY: [Face; 12] = [
    &[],
    &[S],
    &[S],
    &[S, S],
    &[S, S],
    &[A],
    &[S, A],
    &[S, A],
    &[S, A],
    &[A, A],
    &[A, A],
    &[C],
];

/// Difficulty die (d8).
pub const DIFFICULTY: [Face; 8] = [&[], &[F], &[F, F], &[T], &[T], &[T], &[T, T], &[F, T]];

/// Challenge die (d12).
pub const CHALLENGE: [Face; 12] = [
    &[],
    &[F],
    &[F],
    &[F, F],
    &[F, F],
    &[T],
    &[T],
    &[F, T],
    &[F, T],
    &[T, T],
    &[T, T],
    &[D],
];

/// Boost die (d6).
pub const BOOST: [Face; 6] = [&[], &[], &[S], &[S, A], &[A, A], &[A]];

/// Setback die (d6).
pub const SETBACK: [Face; 6] = [&[], &[], &[F], &[F], &[T], &[T]];
