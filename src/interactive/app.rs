//! TUI application state and logic

use crate::core::{LetterStatus, Pattern, WORD_LEN};
use crate::engine::{GameError, GameStatus, SessionId, SessionStore, SettingsUpdate};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Attempts the settings keys can raise to, unless launched with more
const MAX_CONFIGURABLE_ATTEMPTS: usize = 10;

/// Application state
pub struct App<'a> {
    pub store: &'a SessionStore,
    pub session_id: SessionId,
    pub host_cheating: bool,
    pub max_attempts: usize,
    /// Highest attempts the settings keys may reach
    pub attempts_ceiling: usize,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub keyboard: FxHashMap<char, LetterStatus>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: String,
    pub pattern: Pattern,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    /// Wins by guess count, e.g. "3:2 4:1"
    #[must_use]
    pub fn distribution_line(&self) -> String {
        let mut counts: Vec<_> = self.guess_distribution.iter().collect();
        counts.sort_unstable();
        counts
            .into_iter()
            .map(|(guesses, wins)| format!("{guesses}:{wins}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> App<'a> {
    /// Open a session on `store`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot create or configure a session.
    pub fn new(
        store: &'a SessionStore,
        host_cheating: bool,
        max_attempts: usize,
    ) -> Result<Self, GameError> {
        let mut app = Self {
            store,
            session_id: SessionId::new(),
            host_cheating,
            max_attempts,
            attempts_ceiling: max_attempts.max(MAX_CONFIGURABLE_ATTEMPTS),
            history: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            keyboard: FxHashMap::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.start_session()?;
        app.add_message(
            "Welcome! Type a five-letter word and press Enter.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    fn start_session(&mut self) -> Result<(), GameError> {
        if !self.session_id.is_empty() {
            self.store.remove_session(&self.session_id);
        }
        self.session_id = self.store.new_session()?.session_id;
        self.store.update_settings(
            &self.session_id,
            SettingsUpdate {
                max_attempts: Some(self.max_attempts),
                host_cheating: self.host_cheating,
                ..SettingsUpdate::default()
            },
        )?;
        self.reset_board();
        Ok(())
    }

    fn reset_board(&mut self) {
        self.history.clear();
        self.input_buffer.clear();
        self.keyboard.clear();
        self.input_mode = InputMode::Guessing;
    }

    pub fn new_game(&mut self) {
        match self.start_session() {
            Ok(()) => self.add_message("New game started!", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Apply the current mode and attempts to the session, restarting it
    fn apply_settings(&mut self) {
        let update = SettingsUpdate {
            max_attempts: Some(self.max_attempts),
            host_cheating: self.host_cheating,
            ..SettingsUpdate::default()
        };
        match self.store.update_settings(&self.session_id, update) {
            Ok(()) => {
                self.reset_board();
                let mode = if self.host_cheating { "adversarial" } else { "classic" };
                self.add_message(
                    &format!("Restarted: {mode} mode, {} attempts", self.max_attempts),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_mode(&mut self) {
        self.host_cheating = !self.host_cheating;
        self.apply_settings();
    }

    pub fn change_attempts(&mut self, delta: isize) {
        let attempts = self
            .max_attempts
            .saturating_add_signed(delta)
            .clamp(1, self.attempts_ceiling);
        if attempts != self.max_attempts {
            self.max_attempts = attempts;
            self.apply_settings();
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.store.submit_guess(&self.session_id, &guess) {
            Ok(result) => {
                let word = result.guesses.last().cloned().unwrap_or(guess);
                self.record_letters(&word, result.letter_statuses);
                self.history.push(HistoryEntry {
                    guess: word,
                    pattern: result.letter_statuses,
                });
                self.input_buffer.clear();

                match result.status {
                    GameStatus::Won => {
                        self.finish_game(true);
                        self.add_message(&result.message, MessageStyle::Success);
                    }
                    GameStatus::Lost => {
                        self.finish_game(false);
                        self.add_message(&result.message, MessageStyle::Error);
                    }
                    GameStatus::New | GameStatus::InProgress => {}
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            *self
                .stats
                .guess_distribution
                .entry(self.history.len())
                .or_insert(0) += 1;
        }
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Remember the best status seen for each letter
    fn record_letters(&mut self, guess: &str, pattern: Pattern) {
        for (letter, &status) in guess.chars().zip(pattern.statuses()) {
            let entry = self.keyboard.entry(letter).or_insert(status);
            *entry = (*entry).max(status);
        }
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    /// Candidates the host still holds, if adversarial
    #[must_use]
    pub fn pool_size(&self) -> Option<usize> {
        self.store
            .snapshot(&self.session_id)
            .ok()
            .and_then(|s| s.pool_size)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Tab => self.toggle_mode(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.toggle_mode(),
                KeyCode::Up => self.change_attempts(1),
                KeyCode::Down => self.change_attempts(-1),
                KeyCode::F(2) => self.new_game(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LEN {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    app.store.remove_session(&app.session_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;

    fn store() -> SessionStore {
        SessionStore::with_seed(WordList::from_strs(["react", "swift", "scala", "unity"]), 4)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    #[test]
    fn typed_guess_lands_in_history() {
        let store = store();
        let mut app = App::new(&store, true, 6).unwrap();

        type_word(&mut app, "react");

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].guess, "REACT");
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.attempts_left(), 5);
    }

    #[test]
    fn input_is_capped_at_word_length() {
        let store = store();
        let mut app = App::new(&store, true, 6).unwrap();

        for c in "reacts".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        assert_eq!(app.input_buffer, "REACT");

        app.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "REAC");
    }

    #[test]
    fn rejected_guess_keeps_board() {
        let store = store();
        let mut app = App::new(&store, true, 6).unwrap();

        type_word(&mut app, "crane");

        assert!(app.history.is_empty());
        assert_eq!(app.input_buffer, "CRANE");
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn losing_ends_the_game_and_counts_it() {
        let store = store();
        let mut app = App::new(&store, true, 1).unwrap();

        type_word(&mut app, "react");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        app.handle_key(KeyEvent::from(KeyCode::Char('n')));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
        assert_eq!(store.active_sessions().len(), 1);
    }

    #[test]
    fn settings_keys_restart_the_session() {
        let store = store();
        let mut app = App::new(&store, true, 6).unwrap();
        type_word(&mut app, "react");

        app.handle_key(KeyEvent::from(KeyCode::Tab));
        assert!(!app.host_cheating);
        assert!(app.history.is_empty());
        assert_eq!(app.pool_size(), None);

        app.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(app.max_attempts, 5);
        assert_eq!(store.snapshot(&app.session_id).unwrap().max_attempts, 5);
    }

    #[test]
    fn attempts_above_the_key_limit_step_down_by_one() {
        let store = store();
        let mut app = App::new(&store, true, 20).unwrap();

        app.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(app.max_attempts, 19);

        app.handle_key(KeyEvent::from(KeyCode::Up));
        app.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(app.max_attempts, 20);
        assert_eq!(store.snapshot(&app.session_id).unwrap().max_attempts, 20);
    }

    #[test]
    fn attempts_stay_within_bounds() {
        let store = store();
        let mut app = App::new(&store, true, 1).unwrap();

        app.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(app.max_attempts, 1);

        for _ in 0..15 {
            app.handle_key(KeyEvent::from(KeyCode::Up));
        }
        assert_eq!(app.max_attempts, MAX_CONFIGURABLE_ATTEMPTS);
    }

    #[test]
    fn win_is_recorded_in_distribution() {
        let store = SessionStore::with_seed(WordList::from_strs(["react"]), 4);
        let mut app = App::new(&store, true, 6).unwrap();

        type_word(&mut app, "react");

        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.distribution_line(), "1:1");
    }

    #[test]
    fn keyboard_keeps_best_status() {
        let store = store();
        let mut app = App::new(&store, false, 6).unwrap();

        app.record_letters("AABCD", Pattern::parse("-G---").unwrap());
        assert_eq!(app.keyboard[&'A'], LetterStatus::Correct);
        assert_eq!(app.keyboard[&'B'], LetterStatus::Absent);
    }

    #[test]
    fn escape_quits() {
        let store = store();
        let mut app = App::new(&store, true, 6).unwrap();
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
