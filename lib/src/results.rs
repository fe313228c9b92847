use std::fmt;
use std::iter::zip;
use thiserror::Error;

/// Indicates that an error occurred in the solver core.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SolverError {
    /// Indicates that a textual feedback response could not be decoded.
    #[error("invalid feedback encoding: {reason}")]
    InvalidEncoding { reason: String },
    /// Indicates that a word-list entry does not fit the configured word
    /// length or alphabet.
    #[error("invalid word list entry {word:?}: {reason}")]
    InvalidWordList { word: String, reason: String },
    /// Indicates that the search had nothing to score: either the guess
    /// vocabulary was empty, or no possible answers remained.
    #[error("no candidate guess could be scored")]
    NoCandidateFound,
}

/// The feedback for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// The letter matches the solution at this position.
    Exact,
    /// The letter occurs in the solution, but at a different position.
    Present,
    /// The letter does not occur in the solution, net of occurrences already
    /// accounted for by `Exact` or `Present` hints.
    Absent,
}

impl Hint {
    fn from_encoding(symbol: char) -> Option<Hint> {
        match symbol {
            'x' => Some(Hint::Absent),
            'y' => Some(Hint::Present),
            'g' => Some(Hint::Exact),
            _ => None,
        }
    }

    fn to_encoding(self) -> char {
        match self {
            Hint::Absent => 'x',
            Hint::Present => 'y',
            Hint::Exact => 'g',
        }
    }
}

/// The whole-guess feedback: one [`Hint`] per guess position.
///
/// A `Feedback` is built either by simulating a guess against a known
/// solution, or by parsing the textual encoding a puzzle reports back
/// (`'x'` = absent, `'y'` = present, `'g'` = exact). It is immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    hints: Vec<Hint>,
}

impl Feedback {
    /// Determines the feedback the given guess would receive if the solution
    /// were `solution`.
    ///
    /// Duplicate letters follow the standard rules: every `Exact` match is
    /// accounted first, then remaining occurrences earn `Present` hints in
    /// left-to-right position order until the solution's occurrences are
    /// exhausted. Extra copies of the letter in the guess come back `Absent`.
    ///
    /// ```
    /// use rs_wordle_search::Feedback;
    ///
    /// let feedback = Feedback::simulate("raise", "abbey");
    /// assert_eq!(feedback, Feedback::parse("xyxxy", 5).unwrap());
    /// ```
    pub fn simulate(guess: &str, solution: &str) -> Feedback {
        let guess = guess.as_bytes();
        let solution = solution.as_bytes();
        debug_assert_eq!(guess.len(), solution.len());

        let mut hints = vec![Hint::Absent; guess.len()];
        let mut unmatched = [0u8; 256];
        for &letter in solution {
            unmatched[letter as usize] += 1;
        }
        for (hint, (&guessed, &actual)) in zip(hints.iter_mut(), zip(guess, solution)) {
            if guessed == actual {
                *hint = Hint::Exact;
                unmatched[guessed as usize] -= 1;
            }
        }
        for (hint, &guessed) in zip(hints.iter_mut(), guess) {
            if *hint != Hint::Exact && unmatched[guessed as usize] > 0 {
                *hint = Hint::Present;
                unmatched[guessed as usize] -= 1;
            }
        }
        Feedback { hints }
    }

    /// Decodes a feedback string of exactly `word_length` symbols from
    /// `{x, y, g}`.
    pub fn parse(encoding: &str, word_length: usize) -> Result<Feedback, SolverError> {
        let encoding = encoding.trim();
        let num_symbols = encoding.chars().count();
        if num_symbols != word_length {
            return Err(SolverError::InvalidEncoding {
                reason: format!("expected {} symbols but got {}", word_length, num_symbols),
            });
        }
        let hints = encoding
            .chars()
            .map(|symbol| {
                Hint::from_encoding(symbol).ok_or_else(|| SolverError::InvalidEncoding {
                    reason: format!("'{}' is not one of 'x', 'y', or 'g'", symbol),
                })
            })
            .collect::<Result<Vec<Hint>, SolverError>>()?;
        Ok(Feedback { hints })
    }

    /// Returns `true` iff every hint is [`Hint::Exact`].
    pub fn is_win(&self) -> bool {
        self.hints.iter().all(|hint| *hint == Hint::Exact)
    }

    /// The per-position hints, in guess order.
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in &self.hints {
            write!(f, "{}", hint.to_encoding())?;
        }
        Ok(())
    }
}
