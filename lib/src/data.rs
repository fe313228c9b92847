use crate::restrictions::Constraint;
use crate::results::SolverError;
use std::collections::HashSet;
use std::sync::Arc;

/// The two vocabularies for a puzzle: the words the solution may be drawn
/// from, and the (super)set of words that may legally be guessed.
///
/// Both lists are validated, lowercased, and deduplicated on construction and
/// never mutated afterwards. Extra guess words are appended after the
/// answers, so iteration order is stable across runs.
#[derive(Debug)]
pub struct WordPool {
    answers: Vec<Arc<str>>,
    guesses: Vec<Arc<str>>,
    word_length: usize,
}

impl WordPool {
    /// Builds a `WordPool` from a list of legal answers plus any additional
    /// legal guesses.
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped and
    /// duplicates are dropped. Fails with [`SolverError::InvalidWordList`] if
    /// any remaining entry differs from `word_length` or contains a character
    /// outside `a..=z`.
    ///
    /// ```
    /// use rs_wordle_search::WordPool;
    ///
    /// let pool = WordPool::from_lists(5, ["abbey", "raise"], ["crane"]).unwrap();
    /// assert_eq!(pool.answers().len(), 2);
    /// assert_eq!(pool.guesses().len(), 3);
    /// ```
    pub fn from_lists<A, G>(
        word_length: usize,
        answers: A,
        extra_guesses: G,
    ) -> Result<WordPool, SolverError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut answer_words: Vec<Arc<str>> = Vec::new();
        for entry in answers {
            if let Some(word) = normalize(entry.as_ref(), word_length)? {
                if seen.insert(Arc::clone(&word)) {
                    answer_words.push(word);
                }
            }
        }

        let mut guess_words = answer_words.clone();
        for entry in extra_guesses {
            if let Some(word) = normalize(entry.as_ref(), word_length)? {
                if seen.insert(Arc::clone(&word)) {
                    guess_words.push(word);
                }
            }
        }

        Ok(WordPool {
            answers: answer_words,
            guesses: guess_words,
            word_length,
        })
    }

    /// The words the solution may be drawn from.
    pub fn answers(&self) -> &[Arc<str>] {
        &self.answers
    }

    /// Every word that may legally be guessed.
    pub fn guesses(&self) -> &[Arc<str>] {
        &self.guesses
    }

    /// The configured word length.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Lazily yields every legal answer the given constraint still allows.
    ///
    /// Iteration is stateless over the fixed answer list, so the filter can
    /// be restarted at any time by calling this again.
    pub fn filter<'a>(
        &'a self,
        constraint: &'a Constraint,
    ) -> impl Iterator<Item = &'a Arc<str>> + 'a {
        self.answers.iter().filter(|word| constraint.matches(word))
    }
}

fn normalize(entry: &str, word_length: usize) -> Result<Option<Arc<str>>, SolverError> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let word = trimmed.to_lowercase();
    if word.chars().count() != word_length {
        return Err(SolverError::InvalidWordList {
            word,
            reason: format!("expected exactly {} characters", word_length),
        });
    }
    if let Some(unsupported) = word.chars().find(|letter| !letter.is_ascii_lowercase()) {
        return Err(SolverError::InvalidWordList {
            word: word.clone(),
            reason: format!("unsupported character '{}'", unsupported),
        });
    }
    Ok(Some(Arc::from(word.as_str())))
}
