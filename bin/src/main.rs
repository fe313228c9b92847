use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, ValueEnum};
use rs_wordle_search::scorers::*;
use rs_wordle_search::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Interactive helper that searches for the strongest next Wordle guess.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file with one possible answer per line.
    #[clap(short = 'a', long)]
    answers_file: String,

    /// Optional path to a file with additional legal guesses, one per line.
    #[clap(short = 'g', long)]
    guesses_file: Option<String>,

    /// How many letters each word has.
    #[clap(short = 'l', long, default_value_t = 5)]
    word_length: usize,

    /// How candidate guesses are ranked against each other.
    #[clap(short = 's', long, value_enum, default_value_t = StrategyChoice::Average)]
    strategy: StrategyChoice,

    /// How many parallel batches to split the search into. Defaults to twice
    /// the available parallelism.
    #[clap(short = 'b', long)]
    batches: Option<usize>,

    /// Rounds already played, as alternating guess and response words, e.g.
    /// `raise xyxxy crane`. A trailing guess without a response is prompted
    /// for. Defaults to opening with "raise".
    rounds: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyChoice {
    /// Minimize the average number of remaining answers.
    Average,
    /// Minimize the worst case, then maximize win rate, then the average.
    Hybrid,
    /// Maximize the estimated chance of winning within two guesses.
    TwoMove,
}

impl StrategyChoice {
    fn as_strategy(&self) -> Box<dyn FitnessStrategy> {
        match self {
            StrategyChoice::Average => Box::new(AverageRemainingStrategy),
            StrategyChoice::Hybrid => Box::new(HybridStrategy),
            StrategyChoice::TwoMove => Box::new(TwoMoveWinRateStrategy),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let answers = read_words(&args.answers_file)?;
    let extra_guesses = match &args.guesses_file {
        Some(path) => read_words(path)?,
        None => Vec::new(),
    };
    let pool = WordPool::from_lists(args.word_length, answers, extra_guesses)?;
    println!(
        "Loaded {} possible answers and {} legal guesses.",
        pool.answers().len(),
        pool.guesses().len()
    );

    let strategy = args.strategy.as_strategy();
    let mut constraint = Constraint::empty(args.word_length);

    let rounds = if args.rounds.is_empty() && args.word_length == 5 {
        vec!["raise".to_string()]
    } else {
        args.rounds.clone()
    };
    for seed in rounds.chunks(2) {
        let guess = seed[0].to_lowercase();
        ensure!(
            guess.chars().count() == args.word_length,
            "the guess '{}' has {} letters but the word length is {}",
            guess,
            guess.chars().count(),
            args.word_length
        );
        let response = match seed.get(1) {
            Some(response) => response.clone(),
            None => {
                println!("For the opening guess, play: {}", guess);
                read_response(&guess)?
            }
        };
        constraint = apply_round(&constraint, &guess, &response)?;
    }

    loop {
        let num_remaining = pool.filter(&constraint).count();
        match num_remaining {
            0 => bail!("No possible answer matches the responses so far."),
            1 => {
                let answer = pool.filter(&constraint).next().unwrap();
                println!("The answer is: {}", answer);
                return Ok(());
            }
            2..=10 => {
                println!("{} possible answers remain:", num_remaining);
                for word in pool.filter(&constraint) {
                    println!("\t{}", word);
                }
            }
            _ => println!("{} possible answers remain.", num_remaining),
        }

        let best = match args.batches {
            Some(num_batches) => {
                best_guess_with_batches(&pool, &constraint, strategy.as_ref(), num_batches)?
            }
            None => best_guess(&pool, &constraint, strategy.as_ref())?,
        };
        println!("Next guess: {}", best);

        let response = read_response(&best.guess)?;
        let feedback = Feedback::parse(&response, pool.word_length())?;
        if feedback.is_win() {
            println!("Solved it!");
            return Ok(());
        }
        constraint = constraint.merge(&Constraint::from_feedback(&best.guess, &feedback));
    }
}

fn read_words(path: &str) -> Result<Vec<String>> {
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("could not open word list {}", path))?,
    );
    reader
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .with_context(|| format!("could not read word list {}", path))
}

/// Folds one played round into the accumulated constraint.
///
/// The guess length is checked against the constraint up front; merging
/// constraints of different word lengths would silently drop positions.
fn apply_round(constraint: &Constraint, guess: &str, response: &str) -> Result<Constraint> {
    ensure!(
        guess.chars().count() == constraint.word_length(),
        "the guess '{}' has {} letters but the word length is {}",
        guess,
        guess.chars().count(),
        constraint.word_length()
    );
    let next = Constraint::parse_response(guess, response)
        .with_context(|| format!("invalid round '{} {}'", guess, response))?;
    Ok(constraint.merge(&next))
}

/// Prompts until the player enters a well-formed response for `guess`.
fn read_response(guess: &str) -> Result<String> {
    let stdin = io::stdin();
    loop {
        print!("Enter result: x = 'black', y = 'yellow', g = 'green': ");
        io::stdout().flush()?;
        let mut buffer = String::new();
        if stdin.read_line(&mut buffer)? == 0 {
            bail!("Ran out of input before the puzzle was solved.");
        }
        match Feedback::parse(&buffer, guess.chars().count()) {
            Ok(_) => return Ok(buffer.trim().to_string()),
            Err(error) => println!("{}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_round_tightens_the_constraint() {
        let constraint = apply_round(&Constraint::empty(5), "raise", "xyxxy").unwrap();

        assert!(constraint.matches("abbey"));
        assert!(!constraint.matches("raise"));
    }

    #[test]
    fn apply_round_rejects_wrong_length_guess() {
        let error = apply_round(&Constraint::empty(5), "rise", "xyxx").unwrap_err();

        assert!(error.to_string().contains("4 letters"));
        assert!(error.to_string().contains("word length is 5"));
    }

    #[test]
    fn apply_round_rejects_bad_response() {
        let error = apply_round(&Constraint::empty(5), "raise", "xyxxq").unwrap_err();

        assert!(error.to_string().contains("invalid round"));
    }
}
