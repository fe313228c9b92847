//! Fitness strategies for ranking scored guesses.
//!
//! A strategy is a total-ordering comparator over [`GuessScore`] pairs; the
//! search keeps whichever candidate the strategy orders strictly greater.
//! All built-in strategies are deterministic given identical inputs.

use crate::engine::GuessScore;
use std::cmp::Ordering;

/// Ranks candidate guesses by their aggregated trial statistics.
///
/// Implementations must define a strict weak ordering: equal scores compare
/// `Equal`, and the ordering is transitive and consistent, so that the search
/// selects the same guess on every run over identical inputs.
pub trait FitnessStrategy {
    /// Orders two scores. `Ordering::Greater` means `a` is the better guess.
    fn compare(&self, a: &GuessScore, b: &GuessScore) -> Ordering;
}

/// Prefers the guess that leaves the fewest remaining answers on average.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageRemainingStrategy;

impl FitnessStrategy for AverageRemainingStrategy {
    fn compare(&self, a: &GuessScore, b: &GuessScore) -> Ordering {
        b.average_remaining.total_cmp(&a.average_remaining)
    }
}

/// Bounds the damage first: prefers the lower worst-case remaining count,
/// then the higher immediate win rate, then the lower average remaining
/// count.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridStrategy;

impl FitnessStrategy for HybridStrategy {
    fn compare(&self, a: &GuessScore, b: &GuessScore) -> Ordering {
        b.worst_case
            .cmp(&a.worst_case)
            .then_with(|| a.win_rate().total_cmp(&b.win_rate()))
            .then_with(|| b.average_remaining.total_cmp(&a.average_remaining))
    }
}

/// Prefers the guess with the highest estimated probability of solving the
/// puzzle within two further moves (see [`GuessScore::two_move_win_rate`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoMoveWinRateStrategy;

impl FitnessStrategy for TwoMoveWinRateStrategy {
    fn compare(&self, a: &GuessScore, b: &GuessScore) -> Ordering {
        a.two_move_win_rate().total_cmp(&b.two_move_win_rate())
    }
}
