//! Game configuration
//!
//! Shared by every front end. Each option can come from the command line or
//! from its environment variable.

use crate::core::WordList;
use crate::engine::{DEFAULT_MAX_ATTEMPTS, SessionStore};
use crate::wordlists::{default_word_list, loader::load_from_file};
use anyhow::{Context, Result, bail};
use clap::Args;

/// Settings for new sessions
#[derive(Debug, Clone, Args)]
pub struct GameConfig {
    /// Attempts per game
    #[arg(
        short = 'm',
        long,
        env = "WORDLE_MAX_ATTEMPTS",
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS
    )]
    pub max_attempts: usize,

    /// Play with a fixed target instead of the adversarial host
    #[arg(long, env = "WORDLE_CLASSIC", global = true)]
    pub classic: bool,

    /// Seed for reproducible games
    #[arg(long, env = "WORDLE_SEED", global = true)]
    pub seed: Option<u64>,

    /// Word source: 'embedded' (default) or path to a file with one word per line
    #[arg(
        short = 'w',
        long,
        env = "WORDLE_WORDLIST",
        global = true,
        default_value = "embedded"
    )]
    pub wordlist: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            classic: false,
            seed: None,
            wordlist: "embedded".to_string(),
        }
    }
}

impl GameConfig {
    /// Adversarial unless `--classic` was given
    #[must_use]
    pub const fn host_cheating(&self) -> bool {
        !self.classic
    }

    /// Check option values that clap cannot
    ///
    /// # Errors
    /// Fails if `max_attempts` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            bail!("max attempts must be at least 1");
        }
        Ok(())
    }

    /// Resolve the configured word source
    ///
    /// # Errors
    /// Fails if the file cannot be read or yields no valid words.
    pub fn load_words(&self) -> Result<WordList> {
        let words = match self.wordlist.as_str() {
            "embedded" => default_word_list(),
            path => {
                load_from_file(path).with_context(|| format!("failed to read word list {path}"))?
            }
        };

        if words.is_empty() {
            bail!("word source '{}' contains no valid words", self.wordlist);
        }
        Ok(words)
    }

    /// Build a session store from this configuration
    ///
    /// # Errors
    /// Fails on invalid options or an unusable word source.
    pub fn build_store(&self) -> Result<SessionStore> {
        self.validate()?;
        let words = self.load_words()?;

        let store = match self.seed {
            Some(seed) => SessionStore::with_seed(words, seed),
            None => SessionStore::new(words),
        };
        Ok(store.with_max_attempts(self.max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_adversarial_with_six_attempts() {
        let config = GameConfig::default();
        assert!(config.host_cheating());
        assert_eq!(config.max_attempts, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_attempts_rejected() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(config.build_store().is_err());
    }

    #[test]
    fn embedded_source_loads() {
        let words = GameConfig::default().load_words().unwrap();
        assert!(!words.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let config = GameConfig {
            wordlist: "no/such/list.txt".to_string(),
            ..GameConfig::default()
        };
        assert!(config.load_words().is_err());
    }

    #[test]
    fn file_without_valid_words_is_rejected() {
        let path = std::env::temp_dir().join(format!("wordle_host_cfg_{}.txt", std::process::id()));
        fs::write(&path, "# nothing here\nabc\ntoolong\n").unwrap();

        let config = GameConfig {
            wordlist: path.display().to_string(),
            ..GameConfig::default()
        };
        let result = config.load_words();
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn store_uses_configured_attempts() {
        let config = GameConfig {
            max_attempts: 4,
            seed: Some(3),
            ..GameConfig::default()
        };
        let store = config.build_store().unwrap();
        assert_eq!(store.new_session().unwrap().max_attempts, 4);
    }
}
