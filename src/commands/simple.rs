//! Simple interactive CLI mode
//!
//! Line-based game client without TUI

use crate::config::GameConfig;
use crate::engine::{GameError, GuessResult, SessionId, SessionStore, SettingsUpdate};
use crate::output::display::{print_guess_result, print_welcome};
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input turned into
#[derive(Debug)]
pub enum Action {
    Guessed(GuessResult),
    Rejected(GameError),
    Settings(String),
    Words(Vec<String>),
    NewGame,
    Help,
    Quit,
}

/// A game session driven by text commands
pub struct SimpleGame<'a> {
    store: &'a SessionStore,
    session_id: SessionId,
    host_cheating: bool,
}

impl<'a> SimpleGame<'a> {
    /// Start a session configured from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot create or configure a session.
    pub fn start(store: &'a SessionStore, config: &GameConfig) -> Result<Self, GameError> {
        let mut game = Self {
            store,
            session_id: SessionId::new(),
            host_cheating: config.host_cheating(),
        };
        game.restart()?;
        Ok(game)
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Interpret one line of input
    ///
    /// # Errors
    ///
    /// Returns an error only when the session itself is gone; guess
    /// validation failures come back as `Action::Rejected`.
    pub fn handle_line(&mut self, line: &str) -> Result<Action, GameError> {
        let line = line.trim();
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some(":quit" | ":q") => Ok(Action::Quit),
            Some(":help" | ":h") => Ok(Action::Help),
            Some(":new" | ":n") => {
                self.restart()?;
                Ok(Action::NewGame)
            }
            Some(":words") => Ok(Action::Words(self.store.get_word_list(&self.session_id)?)),
            Some(":settings") => {
                let mut update = SettingsUpdate {
                    host_cheating: self.host_cheating,
                    ..SettingsUpdate::default()
                };
                for arg in parts {
                    match arg {
                        "classic" => update.host_cheating = false,
                        "adversarial" => update.host_cheating = true,
                        n => match n.parse::<usize>() {
                            Ok(attempts) => update.max_attempts = Some(attempts),
                            Err(_) => return Ok(Action::Settings(format!("Unknown setting '{n}'"))),
                        },
                    }
                }
                self.host_cheating = update.host_cheating;
                self.store.update_settings(&self.session_id, update)?;
                Ok(Action::Settings(self.describe_settings()?))
            }
            _ => match self.store.submit_guess(&self.session_id, line) {
                Ok(result) => Ok(Action::Guessed(result)),
                Err(e @ GameError::SessionNotFound(_)) => Err(e),
                Err(e) => Ok(Action::Rejected(e)),
            },
        }
    }

    fn restart(&mut self) -> Result<(), GameError> {
        if !self.session_id.is_empty() {
            self.store.remove_session(&self.session_id);
        }
        self.session_id = self.store.new_session()?.session_id;
        if !self.host_cheating {
            self.store.update_settings(
                &self.session_id,
                SettingsUpdate {
                    host_cheating: false,
                    ..SettingsUpdate::default()
                },
            )?;
        }
        Ok(())
    }

    fn describe_settings(&self) -> Result<String, GameError> {
        let snapshot = self.store.snapshot(&self.session_id)?;
        Ok(format!(
            "Mode: {}, attempts: {}, words: {}",
            if snapshot.host_cheating { "adversarial" } else { "classic" },
            snapshot.max_attempts,
            snapshot.word_count
        ))
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// session store cannot create a game.
pub fn run_simple(store: &SessionStore, config: &GameConfig) -> Result<(), String> {
    let mut game = SimpleGame::start(store, config).map_err(|e| e.to_string())?;
    print_welcome(config.host_cheating(), config.max_attempts);

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        if input.is_empty() {
            continue;
        }

        match game.handle_line(&input).map_err(|e| e.to_string())? {
            Action::Guessed(result) => {
                print_guess_result(&result);
                if result.game_over {
                    println!("Type :new to play again or :quit to exit.\n");
                }
            }
            Action::Rejected(err) => println!("{} {err}\n", "❌".red()),
            Action::Settings(summary) => println!("⚙  {summary}\n"),
            Action::Words(words) => {
                println!("{} words:", words.len());
                for chunk in words.chunks(10) {
                    println!("  {}", chunk.join(" "));
                }
                println!();
            }
            Action::NewGame => println!("\n🔄 New game started!\n"),
            Action::Help => print_help(),
            Action::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <word>                         submit a five-letter guess");
    println!("  :settings [classic|adversarial] [attempts]");
    println!("  :words                         list the session's words");
    println!("  :new                           start a new game");
    println!("  :quit                          exit\n");
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
