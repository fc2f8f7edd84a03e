//! Benchmark command
//!
//! Plays many games in parallel against one shared session store, with a
//! player that always guesses some word consistent with all feedback so far.

use crate::core::{Pattern, Word, WordList};
use crate::engine::{GameError, GameStatus, SessionStore, SettingsUpdate};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// How each benchmark game is set up
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub games: usize,
    pub seed: u64,
    pub host_cheating: bool,
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub guesses: usize,
    pub won: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub games_won: usize,
    /// Average guesses over won games (0 if none were won)
    pub average_guesses: f64,
    /// Won games keyed by the number of guesses taken
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
    pub host_cheating: bool,
}

/// Run `config.games` games concurrently against `store`
///
/// # Errors
///
/// Returns the first session error any game hits.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(
    store: &SessionStore,
    config: BenchmarkConfig,
) -> Result<BenchmarkResult, GameError> {
    let pb = ProgressBar::new(config.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let records = (0..config.games)
        .into_par_iter()
        .map(|game| {
            let record = play_one(store, config, config.seed.wrapping_add(game as u64));
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&records, start.elapsed(), config.host_cheating))
}

/// Play a single game in a fresh session, removing it afterwards
///
/// # Errors
///
/// Propagates any session error.
pub fn play_one(
    store: &SessionStore,
    config: BenchmarkConfig,
    player_seed: u64,
) -> Result<GameRecord, GameError> {
    let id = store.new_session()?.session_id;
    let result = play_session(store, &id, config.host_cheating, player_seed);
    store.remove_session(&id);
    result
}

fn play_session(
    store: &SessionStore,
    id: &str,
    host_cheating: bool,
    player_seed: u64,
) -> Result<GameRecord, GameError> {
    store.update_settings(
        id,
        SettingsUpdate {
            host_cheating,
            ..SettingsUpdate::default()
        },
    )?;

    let mut rng = StdRng::seed_from_u64(player_seed);
    let mut candidates: Vec<Word> = WordList::from_strs(store.get_word_list(id)?)
        .as_slice()
        .to_vec();

    loop {
        let Some(guess) = candidates.choose(&mut rng).cloned() else {
            return Err(GameError::EmptyWordSource);
        };

        let result = store.submit_guess(id, guess.text())?;
        match result.status {
            GameStatus::Won => {
                return Ok(GameRecord {
                    guesses: result.guesses.len(),
                    won: true,
                });
            }
            GameStatus::Lost => {
                return Ok(GameRecord {
                    guesses: result.guesses.len(),
                    won: false,
                });
            }
            GameStatus::New | GameStatus::InProgress => {}
        }

        let pattern = result.letter_statuses;
        candidates.retain(|c| Pattern::calculate(&guess, c) == pattern);
    }
}

fn summarize(records: &[GameRecord], duration: Duration, host_cheating: bool) -> BenchmarkResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut won_guesses = 0;
    let mut games_won = 0;

    for record in records.iter().filter(|r| r.won) {
        games_won += 1;
        won_guesses += record.guesses;
        *distribution.entry(record.guesses).or_insert(0) += 1;
    }

    let average_guesses = if games_won > 0 {
        won_guesses as f64 / games_won as f64
    } else {
        0.0
    };

    BenchmarkResult {
        total_games: records.len(),
        games_won,
        average_guesses,
        distribution,
        duration,
        games_per_second: records.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
        host_cheating,
    }
}
