use crate::results::{Feedback, Hint, SolverError};
use std::collections::HashMap;
use std::iter::zip;

/// The supported alphabet is the lowercase ASCII letters.
pub const ALPHABET_SIZE: usize = 26;

const FULL_MASK: u32 = (1 << ALPHABET_SIZE) - 1;

fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(letter as usize - 'a' as usize)
    } else {
        None
    }
}

/// The set of characters still allowed at one position of the word.
///
/// This is a pure value type: every operation returns a new constraint and
/// never mutates in place, so constraints can be copied and reused cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionConstraint {
    allowed: u32,
}

impl PositionConstraint {
    /// A constraint that allows the full alphabet.
    pub fn any() -> PositionConstraint {
        PositionConstraint { allowed: FULL_MASK }
    }

    /// Removes the given letter from the allowed set.
    ///
    /// Once the set has collapsed to a single letter the position is pinned,
    /// and forbidding is a no-op: an exact match must never be weakened.
    pub fn forbid(self, letter: char) -> PositionConstraint {
        if self.allowed.count_ones() == 1 {
            return self;
        }
        match letter_index(letter) {
            Some(index) => PositionConstraint {
                allowed: self.allowed & !(1 << index),
            },
            None => self,
        }
    }

    /// Collapses the allowed set to exactly the given letter.
    pub fn pin(self, letter: char) -> PositionConstraint {
        match letter_index(letter) {
            Some(index) => PositionConstraint { allowed: 1 << index },
            None => self,
        }
    }

    /// Returns `true` iff the given letter is still allowed at this position.
    pub fn allows(self, letter: char) -> bool {
        letter_index(letter).is_some_and(|index| self.allowed & (1 << index) != 0)
    }

    /// The set allowing only letters allowed by both inputs.
    pub fn intersect(self, other: PositionConstraint) -> PositionConstraint {
        PositionConstraint {
            allowed: self.allowed & other.allowed,
        }
    }
}

/// The admissible occurrence interval `[min, max]` for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    min: u8,
    max: u8,
}

impl CountRange {
    /// The unconstrained range `[0, word_length]`.
    pub fn new(word_length: usize) -> CountRange {
        CountRange {
            min: 0,
            max: word_length as u8,
        }
    }

    /// Raises the lower bound by one.
    ///
    /// If this pushes the minimum above the maximum, the maximum collapses up
    /// to meet it. This covers the case where an `Absent` hint capped the
    /// count before a later `Exact` or `Present` hint for the same character
    /// was processed: the cap reflects the confirmed count, so the range must
    /// stay at exactly that count rather than reject everything.
    pub fn raise_min(self) -> CountRange {
        let min = self.min + 1;
        CountRange {
            min,
            max: self.max.max(min),
        }
    }

    /// Caps the upper bound at the current lower bound.
    pub fn cap_max(self) -> CountRange {
        CountRange {
            min: self.min,
            max: self.min,
        }
    }

    /// Returns `true` iff `min <= count <= max`.
    pub fn contains(self, count: usize) -> bool {
        count >= self.min as usize && count <= self.max as usize
    }

    /// Takes the tighter bound on each side.
    pub fn merge(self, other: CountRange) -> CountRange {
        CountRange {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}

/// Everything known about the solution from accumulated feedback: one
/// [`PositionConstraint`] per position plus a [`CountRange`] per observed
/// character.
///
/// A `Constraint` is immutable once derived. Knowledge from a new round is
/// folded in with [`Constraint::merge`], which returns a fresh constraint
/// that is the logical AND of both inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    positions: Vec<PositionConstraint>,
    counts: HashMap<char, CountRange>,
}

impl Constraint {
    /// A constraint of the given word length that accepts every legal word.
    pub fn empty(word_length: usize) -> Constraint {
        Constraint {
            positions: vec![PositionConstraint::any(); word_length],
            counts: HashMap::new(),
        }
    }

    /// The word length this constraint applies to.
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }

    /// Derives the constraint imposed by one guess and its feedback.
    ///
    /// Per position: `Exact` pins the position to the guessed letter and
    /// raises that letter's minimum count; `Present` forbids the letter at
    /// that position and raises its minimum count; `Absent` caps the letter's
    /// maximum count at the confirmed minimum and, if the letter is thereby
    /// confirmed entirely absent, forbids it at every position.
    pub fn from_feedback(guess: &str, feedback: &Feedback) -> Constraint {
        let word_length = feedback.hints().len();
        debug_assert_eq!(guess.chars().count(), word_length);

        let mut constraint = Constraint::empty(word_length);
        for ((position, letter), hint) in zip(guess.chars().enumerate(), feedback.hints()) {
            let range = constraint
                .counts
                .entry(letter)
                .or_insert_with(|| CountRange::new(word_length));
            match hint {
                Hint::Exact => {
                    *range = range.raise_min();
                    constraint.positions[position] = constraint.positions[position].pin(letter);
                }
                Hint::Present => {
                    *range = range.raise_min();
                    constraint.positions[position] = constraint.positions[position].forbid(letter);
                }
                Hint::Absent => {
                    *range = range.cap_max();
                    if !range.contains(1) {
                        for position_constraint in &mut constraint.positions {
                            *position_constraint = position_constraint.forbid(letter);
                        }
                    }
                }
            }
        }
        constraint
    }

    /// Builds a constraint from a guess and its textual feedback encoding.
    ///
    /// Fails with [`SolverError::InvalidEncoding`] if the guess contains a
    /// character outside the alphabet, or if the encoding has the wrong
    /// length or a symbol outside `{x, y, g}`.
    pub fn parse_response(guess: &str, encoding: &str) -> Result<Constraint, SolverError> {
        if let Some(unsupported) = guess.chars().find(|letter| !letter.is_ascii_lowercase()) {
            return Err(SolverError::InvalidEncoding {
                reason: format!("guess contains unsupported character '{}'", unsupported),
            });
        }
        let feedback = Feedback::parse(encoding, guess.chars().count())?;
        Ok(Constraint::from_feedback(guess, &feedback))
    }

    /// Returns the logical AND of both constraints.
    ///
    /// Positions intersect their allowed sets and count ranges take the
    /// tighter bound on each side, so the merged constraint rejects every
    /// word either input would reject. Merging is commutative, associative,
    /// and idempotent with respect to [`Constraint::matches`].
    pub fn merge(&self, other: &Constraint) -> Constraint {
        debug_assert_eq!(self.word_length(), other.word_length());
        let positions = zip(self.positions.iter(), other.positions.iter())
            .map(|(ours, theirs)| ours.intersect(*theirs))
            .collect();
        let mut counts = self.counts.clone();
        for (letter, range) in &other.counts {
            counts
                .entry(*letter)
                .and_modify(|known| *known = known.merge(*range))
                .or_insert(*range);
        }
        Constraint { positions, counts }
    }

    /// Returns `true` iff the given word could still be the solution.
    ///
    /// A word is rejected if its length differs, if any position holds a
    /// disallowed character, or if any tracked character occurs a number of
    /// times outside its count range.
    pub fn matches(&self, word: &str) -> bool {
        let mut length = 0;
        for (position, letter) in word.chars().enumerate() {
            if position >= self.positions.len() || !self.positions[position].allows(letter) {
                return false;
            }
            length += 1;
        }
        if length != self.word_length() {
            return false;
        }
        self.counts.iter().all(|(letter, range)| {
            let occurrences = word.chars().filter(|other| other == letter).count();
            range.contains(occurrences)
        })
    }
}
