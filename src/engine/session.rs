//! Per-game state machine
//!
//! A session is either classic (one fixed target) or adversarial (a shrinking
//! pool of candidates that are all consistent with the feedback given so far).

use super::error::GameError;
use super::oracle::select_worst_case_bucket;
use super::partition::partition;
use crate::core::{Pattern, WORD_LEN, Word, WordList};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::{Duration, Instant};

pub type SessionId = String;

/// Attempts allowed when nothing else is configured
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

const WIN_MESSAGE: &str = "Congratulations! You guessed the word!";

/// How the hidden answer is held
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Answer fixed when the game starts
    Classic { target: Word },
    /// Answer undecided; every word still consistent with the feedback
    Adversarial { pool: Vec<Word> },
}

impl Mode {
    #[must_use]
    pub const fn is_adversarial(&self) -> bool {
        matches!(self, Self::Adversarial { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    New,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Won,
    Lost,
}

/// Everything a caller needs after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub guesses: Vec<String>,
    pub game_over: bool,
    pub message: String,
    pub letter_statuses: Pattern,
    pub status: GameStatus,
    pub host_cheating: bool,
}

/// Requested settings change; `None` fields keep the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub max_attempts: Option<usize>,
    pub word_list: Option<Vec<String>>,
    pub host_cheating: bool,
}

/// Read-only view of a session for front ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub guesses: Vec<String>,
    pub max_attempts: usize,
    pub status: GameStatus,
    pub message: String,
    pub host_cheating: bool,
    pub word_count: usize,
    /// Candidates still alive; `None` in classic mode
    pub pool_size: Option<usize>,
}

/// One player's game
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    max_attempts: usize,
    word_list: WordList,
    mode: Mode,
    guesses: Vec<Word>,
    outcome: Option<Outcome>,
    message: String,
    rng: StdRng,
    last_active: Instant,
}

impl GameSession {
    /// Start an adversarial game whose pool is the whole word list
    ///
    /// # Errors
    /// `EmptyWordSource` if `word_list` has no words.
    pub fn new(
        id: SessionId,
        word_list: WordList,
        max_attempts: usize,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        if word_list.is_empty() {
            return Err(GameError::EmptyWordSource);
        }

        let pool = word_list.as_slice().to_vec();
        Ok(Self {
            id,
            max_attempts: max_attempts.max(1),
            word_list,
            mode: Mode::Adversarial { pool },
            guesses: Vec::new(),
            outcome: None,
            message: String::new(),
            rng,
            last_active: Instant::now(),
        })
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    #[must_use]
    pub const fn word_list(&self) -> &WordList {
        &self.word_list
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status().is_terminal()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.outcome {
            Some(Outcome::Won) => GameStatus::Won,
            Some(Outcome::Lost) => GameStatus::Lost,
            None if self.guesses.is_empty() => GameStatus::New,
            None => GameStatus::InProgress,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            guesses: self.guess_texts(),
            max_attempts: self.max_attempts,
            status: self.status(),
            message: self.message.clone(),
            host_cheating: self.mode.is_adversarial(),
            word_count: self.word_list.len(),
            pool_size: match &self.mode {
                Mode::Classic { .. } => None,
                Mode::Adversarial { pool } => Some(pool.len()),
            },
        }
    }

    pub(crate) fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    pub(crate) fn is_expired(&self, ttl: Duration) -> bool {
        self.last_active.elapsed() > ttl
    }

    /// Play one guess
    ///
    /// Checks run in order and the first failure returns without touching any
    /// state: game over, length, word list membership.
    ///
    /// # Errors
    /// `GameAlreadyOver`, `InvalidGuessLength` or `GuessNotInWordList`.
    pub fn submit_guess(&mut self, guess_text: &str) -> Result<GuessResult, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let normalized = guess_text.to_uppercase();
        let len = normalized.chars().count();
        if len != WORD_LEN {
            return Err(GameError::InvalidGuessLength(len));
        }

        let guess = match Word::new(&normalized) {
            Ok(word) if self.word_list.contains(&word) => word,
            _ => return Err(GameError::GuessNotInWordList(normalized)),
        };

        let pattern = match &mut self.mode {
            Mode::Classic { target } => Pattern::calculate(&guess, target),
            Mode::Adversarial { pool } => {
                // A non-empty pool always yields at least one bucket
                let (pattern, survivors) = select_worst_case_bucket(partition(pool, &guess))
                    .ok_or(GameError::EmptyWordSource)?;
                *pool = survivors;
                pattern
            }
        };
        self.guesses.push(guess.clone());

        let won = match &self.mode {
            Mode::Classic { target } => *target == guess,
            Mode::Adversarial { pool } => pool.len() == 1 && pool[0] == guess,
        };

        if won {
            self.outcome = Some(Outcome::Won);
            self.message = WIN_MESSAGE.to_string();
        } else if self.guesses.len() >= self.max_attempts {
            let answer = self.reveal_answer();
            self.outcome = Some(Outcome::Lost);
            self.message = format!("Game over! The word was {answer}");
        }

        Ok(GuessResult {
            guesses: self.guess_texts(),
            game_over: self.is_game_over(),
            message: self.message.clone(),
            letter_statuses: pattern,
            status: self.status(),
            host_cheating: self.mode.is_adversarial(),
        })
    }

    /// Apply new settings and restart the game
    ///
    /// A non-empty word list replaces both the validation list and the answer
    /// source. Classic mode draws a fresh target; adversarial mode restores
    /// the full pool. Nothing changes if the resulting word source is empty.
    ///
    /// # Errors
    /// `EmptyWordSource` if a word list was given but held no valid words, or
    /// if the session would be left without any words.
    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<(), GameError> {
        let replacement = match update.word_list {
            Some(raw) if !raw.is_empty() => {
                let list = WordList::from_strs(&raw);
                if list.is_empty() {
                    return Err(GameError::EmptyWordSource);
                }
                Some(list)
            }
            _ => None,
        };

        let source = replacement.as_ref().unwrap_or(&self.word_list);
        let mode = if update.host_cheating {
            if source.is_empty() {
                return Err(GameError::EmptyWordSource);
            }
            Mode::Adversarial {
                pool: source.as_slice().to_vec(),
            }
        } else {
            let target = source
                .choose(&mut self.rng)
                .cloned()
                .ok_or(GameError::EmptyWordSource)?;
            Mode::Classic { target }
        };

        if let Some(max_attempts) = update.max_attempts.filter(|&n| n > 0) {
            self.max_attempts = max_attempts;
        }
        if let Some(list) = replacement {
            self.word_list = list;
        }
        self.mode = mode;
        self.guesses.clear();
        self.outcome = None;
        self.message.clear();

        Ok(())
    }

    fn reveal_answer(&mut self) -> String {
        match &self.mode {
            Mode::Classic { target } => target.text().to_string(),
            Mode::Adversarial { pool } => pool
                .choose(&mut self.rng)
                .map(|w| w.text().to_string())
                .unwrap_or_default(),
        }
    }

    fn guess_texts(&self) -> Vec<String> {
        self.guesses.iter().map(|w| w.text().to_string()).collect()
    }
}
