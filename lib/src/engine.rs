use crate::data::WordPool;
use crate::restrictions::Constraint;
use crate::results::{Feedback, SolverError};
use crate::scorers::FitnessStrategy;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// The outcome of testing one candidate guess against one assumed solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessTrial {
    /// How many legal answers would remain after this guess and its feedback.
    pub remaining: usize,
    /// Whether the guess exactly matches the assumed solution.
    pub is_win: bool,
}

/// Aggregate statistics for one candidate guess over every plausible
/// remaining solution.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessScore {
    pub guess: Arc<str>,
    /// The remaining-answer count averaged over all trials.
    pub average_remaining: f64,
    /// The largest remaining-answer count seen in any trial.
    pub worst_case: usize,
    /// How many assumed solutions were tried, i.e. the current remaining
    /// answer count.
    pub num_trials: usize,
    /// Whether any trial was an outright win.
    pub can_win: bool,
}

impl GuessScore {
    /// Aggregates a candidate's trials, or `None` if there were none.
    pub fn from_trials(guess: Arc<str>, trials: &[GuessTrial]) -> Option<GuessScore> {
        if trials.is_empty() {
            return None;
        }
        let total_remaining: usize = trials.iter().map(|trial| trial.remaining).sum();
        Some(GuessScore {
            guess,
            average_remaining: total_remaining as f64 / trials.len() as f64,
            worst_case: trials.iter().map(|trial| trial.remaining).max().unwrap_or(0),
            num_trials: trials.len(),
            can_win: trials.iter().any(|trial| trial.is_win),
        })
    }

    /// The probability of winning with this guess outright: one over the
    /// current remaining-answer count if a win is achievable, else zero.
    pub fn win_rate(&self) -> f64 {
        if self.can_win {
            1.0 / self.num_trials as f64
        } else {
            0.0
        }
    }

    /// The estimated probability of solving the puzzle with this guess or the
    /// one after it: `p1 + (1 - p1) * p2`, with `p2` taken as one over the
    /// average remaining count.
    ///
    /// The `p2` term assumes a best-case follow-up guess rather than running
    /// a nested search, so this is a heuristic estimate, not a two-ply
    /// optimum.
    pub fn two_move_win_rate(&self) -> f64 {
        let this_move = self.win_rate();
        let next_move = 1.0 / self.average_remaining;
        this_move + (1.0 - this_move) * next_move
    }
}

impl fmt::Display for GuessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (avg: {:.2} worst: {} win rate: {:.3})",
            self.guess,
            self.average_remaining,
            self.worst_case,
            self.win_rate()
        )
    }
}

/// Finds the best-ranked next guess, splitting the candidate list into twice
/// as many batches as there are available workers.
///
/// See [`best_guess_with_batches`] for the search itself.
pub fn best_guess(
    pool: &WordPool,
    known_constraint: &Constraint,
    strategy: &dyn FitnessStrategy,
) -> Result<GuessScore, SolverError> {
    best_guess_with_batches(pool, known_constraint, strategy, default_num_batches())
}

/// Finds the best-ranked next guess using `num_batches` parallel batches.
///
/// Every word in the pool's guess vocabulary is evaluated against every
/// answer the known constraint still allows: the feedback the candidate
/// would receive is simulated, the resulting constraint is merged with the
/// known one, and the surviving answers are counted as one [`GuessTrial`].
/// Each candidate's trials are aggregated into a [`GuessScore`] and the
/// strategy picks the best score across all batches.
///
/// Batches share only read-only inputs and are reduced in batch order with
/// first-seen-wins tie-breaking, so the selected guess is deterministic for
/// identical inputs regardless of `num_batches`.
///
/// Fails with [`SolverError::NoCandidateFound`] if the guess vocabulary is
/// empty or no answer remains.
pub fn best_guess_with_batches(
    pool: &WordPool,
    known_constraint: &Constraint,
    strategy: &dyn FitnessStrategy,
    num_batches: usize,
) -> Result<GuessScore, SolverError> {
    let remaining: Vec<Arc<str>> = pool.filter(known_constraint).cloned().collect();
    let candidates = pool.guesses();
    if candidates.is_empty() || remaining.is_empty() {
        return Err(SolverError::NoCandidateFound);
    }

    let batch_size = candidates.len().div_ceil(num_batches.max(1));
    let batch_scores: Vec<Vec<GuessScore>> = candidates
        .par_chunks(batch_size)
        .map(|batch| score_batch(batch, pool, known_constraint, &remaining))
        .collect();

    let mut best: Option<GuessScore> = None;
    for score in batch_scores.into_iter().flatten() {
        best = match best {
            None => Some(score),
            Some(current) => {
                if strategy.compare(&score, &current) == Ordering::Greater {
                    debug!("{} improves on {}", score, current);
                    Some(score)
                } else {
                    Some(current)
                }
            }
        };
    }
    best.ok_or(SolverError::NoCandidateFound)
}

fn score_batch(
    batch: &[Arc<str>],
    pool: &WordPool,
    known_constraint: &Constraint,
    remaining: &[Arc<str>],
) -> Vec<GuessScore> {
    let mut scores = Vec::with_capacity(batch.len());
    for candidate in batch {
        let mut trials = Vec::with_capacity(remaining.len());
        for assumed_solution in remaining {
            let feedback = Feedback::simulate(candidate, assumed_solution);
            let is_win = feedback.is_win();
            let trial_constraint =
                Constraint::from_feedback(candidate, &feedback).merge(known_constraint);
            trials.push(GuessTrial {
                remaining: pool.filter(&trial_constraint).count(),
                is_win,
            });
        }
        if let Some(score) = GuessScore::from_trials(Arc::clone(candidate), &trials) {
            scores.push(score);
        }
    }
    scores
}

fn default_num_batches() -> usize {
    thread::available_parallelism()
        .map(|parallelism| parallelism.get() * 2)
        .unwrap_or(2)
}
