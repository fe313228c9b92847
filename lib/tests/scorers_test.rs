use rs_wordle_search::scorers::*;
use rs_wordle_search::*;
use std::cmp::Ordering;
use std::sync::Arc;

fn score(
    guess: &str,
    average_remaining: f64,
    worst_case: usize,
    num_trials: usize,
    can_win: bool,
) -> GuessScore {
    GuessScore {
        guess: Arc::from(guess),
        average_remaining,
        worst_case,
        num_trials,
        can_win,
    }
}

#[test]
fn average_remaining_prefers_fewer_remaining_answers() {
    let strategy = AverageRemainingStrategy;
    let better = score("abbey", 1.5, 3, 4, true);
    let worse = score("raise", 2.5, 3, 4, true);

    assert_eq!(strategy.compare(&better, &worse), Ordering::Greater);
    assert_eq!(strategy.compare(&worse, &better), Ordering::Less);
}

#[test]
fn average_remaining_equal_is_a_tie() {
    let strategy = AverageRemainingStrategy;
    let first = score("abbey", 1.5, 2, 4, true);
    let second = score("raise", 1.5, 3, 4, false);

    assert_eq!(strategy.compare(&first, &second), Ordering::Equal);
}

#[test]
fn hybrid_prefers_lower_worst_case() {
    let strategy = HybridStrategy;
    let better = score("abbey", 3.0, 4, 10, false);
    let worse = score("raise", 1.5, 5, 10, true);

    assert_eq!(strategy.compare(&better, &worse), Ordering::Greater);
}

#[test]
fn hybrid_breaks_worst_case_tie_by_win_rate() {
    let strategy = HybridStrategy;
    let better = score("abbey", 2.0, 4, 10, true);
    let worse = score("raise", 1.5, 4, 10, false);

    assert_eq!(strategy.compare(&better, &worse), Ordering::Greater);
}

#[test]
fn hybrid_falls_back_to_average_remaining() {
    let strategy = HybridStrategy;
    let better = score("abbey", 1.5, 4, 10, true);
    let worse = score("raise", 2.0, 4, 10, true);

    assert_eq!(strategy.compare(&better, &worse), Ordering::Greater);
}

#[test]
fn hybrid_full_tie_is_equal() {
    let strategy = HybridStrategy;
    let first = score("abbey", 1.5, 4, 10, true);
    let second = score("raise", 1.5, 4, 10, true);

    assert_eq!(strategy.compare(&first, &second), Ordering::Equal);
}

#[test]
fn two_move_win_rate_combines_both_moves() {
    // 1/4 chance now, else a 1-in-2 follow-up: 0.25 + 0.75 * 0.5.
    let this = score("abbey", 2.0, 3, 4, true);
    assert_eq!(this.two_move_win_rate(), 0.625);

    let cannot_win = score("raise", 2.0, 3, 4, false);
    assert_eq!(cannot_win.two_move_win_rate(), 0.5);
}

#[test]
fn two_move_strategy_prefers_higher_combined_rate() {
    let strategy = TwoMoveWinRateStrategy;
    let better = score("abbey", 2.0, 3, 4, true);
    let worse = score("raise", 2.0, 3, 4, false);

    assert_eq!(strategy.compare(&better, &worse), Ordering::Greater);
    assert_eq!(strategy.compare(&worse, &better), Ordering::Less);
    assert_eq!(strategy.compare(&better, &better.clone()), Ordering::Equal);
}

#[test]
fn win_rate_is_zero_when_guess_is_not_an_answer() {
    assert_eq!(score("abbey", 2.0, 3, 4, false).win_rate(), 0.0);
    assert_eq!(score("abbey", 2.0, 3, 4, true).win_rate(), 0.25);
}
