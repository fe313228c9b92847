#[macro_use]
extern crate assert_matches;

use rs_wordle_search::*;

const WORDS: &[&str] = &[
    "abbey", "raise", "enter", "speed", "creep", "snarl", "renal", "below", "endow",
];

#[test]
fn simulate_single_present_letters() {
    let feedback = Feedback::simulate("raise", "abbey");

    assert_eq!(feedback, Feedback::parse("xyxxy", 5).unwrap());
    assert!(!feedback.is_win());
}

#[test]
fn simulate_duplicate_guess_letter_gets_one_hint() {
    // The guess has two 'e's but the solution only one, so exactly one 'e'
    // position is non-absent.
    let feedback = Feedback::simulate("enter", "abbey");

    assert_eq!(feedback, Feedback::parse("xxxgx", 5).unwrap());

    let num_non_absent_e = "enter"
        .chars()
        .zip(feedback.hints())
        .filter(|(letter, hint)| *letter == 'e' && **hint != Hint::Absent)
        .count();
    assert_eq!(num_non_absent_e, 1);
}

#[test]
fn simulate_duplicate_letters_both_sides() {
    let feedback = Feedback::simulate("speed", "creep");

    assert_eq!(feedback, Feedback::parse("xyggx", 5).unwrap());
}

#[test]
fn simulate_exact_match_is_win() {
    let feedback = Feedback::simulate("abbey", "abbey");

    assert_eq!(feedback, Feedback::parse("ggggg", 5).unwrap());
    assert!(feedback.is_win());
}

#[test]
fn simulate_shared_letters_bounded_by_occurrence_counts() {
    // Every shared character earns exactly one Exact or Present hint per
    // occurrence, bounded by its count in the guess and in the solution.
    for guess in WORDS {
        for solution in WORDS {
            let feedback = Feedback::simulate(guess, solution);
            for letter in 'a'..='z' {
                let count_in_guess = guess.chars().filter(|c| *c == letter).count();
                let count_in_solution = solution.chars().filter(|c| *c == letter).count();
                let num_non_absent = guess
                    .chars()
                    .zip(feedback.hints())
                    .filter(|(c, hint)| *c == letter && **hint != Hint::Absent)
                    .count();
                assert_eq!(
                    num_non_absent,
                    count_in_guess.min(count_in_solution),
                    "guess {} against {} letter {}",
                    guess,
                    solution,
                    letter
                );
            }
        }
    }
}

#[test]
fn parse_rejects_wrong_length() {
    assert_matches!(
        Feedback::parse("xyxx", 5),
        Err(SolverError::InvalidEncoding { .. })
    );
    assert_matches!(
        Feedback::parse("xyxxyy", 5),
        Err(SolverError::InvalidEncoding { .. })
    );
}

#[test]
fn parse_rejects_unknown_symbol() {
    assert_matches!(
        Feedback::parse("xyzxy", 5),
        Err(SolverError::InvalidEncoding { .. })
    );
}

#[test]
fn parse_trims_surrounding_whitespace() {
    assert_eq!(
        Feedback::parse(" xyxxy\n", 5).unwrap(),
        Feedback::parse("xyxxy", 5).unwrap()
    );
}
