//! TUI application state and logic

use crate::core::Country;
use crate::game::{GameSession, GuessOutcome};
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
use std::io;
use tracing::info;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    pub input_buffer: String,
    /// Highlighted suggestion, an index into `suggestions()`
    pub selected: Option<usize>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results for this process; nothing is persisted
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// `tries_distribution[n]` counts games won in `n + 1` tries
    pub tries_distribution: Vec<usize>,
}

impl Statistics {
    pub fn record_win(&mut self, tries: usize) {
        self.games_played += 1;
        self.games_won += 1;

        let slot = tries.saturating_sub(1);
        if self.tries_distribution.len() <= slot {
            self.tries_distribution.resize(slot + 1, 0);
        }
        self.tries_distribution[slot] += 1;
    }

    pub fn record_abandoned(&mut self) {
        self.games_played += 1;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.games_played as f64 * 100.0
    }

    /// Mean tries over won games
    #[must_use]
    pub fn average_tries(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .tries_distribution
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}

impl App {
    /// Wrap a started session
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            selected: None,
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden country.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Each miss reveals a clue. ↑/↓ pick a suggestion, Tab completes."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Autocomplete entries for the current input
    #[must_use]
    pub fn suggestions(&self) -> Vec<&Country> {
        self.session.suggestions(&self.input_buffer)
    }

    /// Submit the highlighted suggestion, or the typed text if none is highlighted
    pub fn submit(&mut self) {
        let query = self
            .selected
            .and_then(|i| self.suggestions().get(i).map(|c| c.common_name().to_string()))
            .unwrap_or_else(|| self.input_buffer.clone());

        match self.session.submit_guess(&query) {
            GuessOutcome::Unmatched => {
                self.add_message(&format!("No country matches '{}'", query.trim()), MessageStyle::Error);
            }
            GuessOutcome::AlreadyGuessed(name) => {
                self.add_message(&format!("You already guessed {name}"), MessageStyle::Error);
            }
            GuessOutcome::Miss { country, revealed } => {
                let text = revealed.map_or_else(
                    || format!("Not {country}. No clues left!"),
                    |category| format!("Not {country}. New clue: {category}"),
                );
                self.add_message(&text, MessageStyle::Info);
                self.clear_input();
            }
            GuessOutcome::Correct { country, tries } => {
                self.stats.record_win(tries);
                self.input_mode = InputMode::WinCelebration;

                let celebration = match tries {
                    1 => "🎯 FIRST TRY! Incredible! 🌟",
                    2..=3 => "🔥 MAGNIFICENT! 🔥",
                    4..=6 => "✨ SPLENDID! ✨",
                    7..=8 => "👏 GREAT JOB! 👏",
                    _ => "🎊 FOUND IT! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    &format!("It was {country} ({tries} {})", if tries == 1 { "try" } else { "tries" }),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.clear_input();
            }
            GuessOutcome::NotStarted | GuessOutcome::AlreadyWon => {}
        }
    }

    /// Replace the input with the highlighted (or first) suggestion
    pub fn complete(&mut self) {
        let index = self.selected.unwrap_or(0);
        if let Some(name) = self.suggestions().get(index).map(|c| c.common_name().to_string()) {
            self.input_buffer = name;
            self.selected = None;
        }
    }

    pub fn select_next(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % count));
    }

    pub fn select_previous(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(count - 1, |i| (i + count - 1) % count));
    }

    pub fn new_game(&mut self) {
        if !self.session.is_won() && self.session.tries() > 0 {
            self.stats.record_abandoned();
        }

        match self.session.restart() {
            Ok(()) => {
                self.clear_input();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started! A new country is hidden.", MessageStyle::Info);
                info!(played = self.stats.games_played, "new game");
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Tell the player the game runs on the embedded snapshot
    pub fn notify_roster_fallback(&mut self, reason: &str) {
        self.add_message(
            &format!("Playing with the offline country list ({reason})"),
            MessageStyle::Error,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.selected = None;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => self.complete(),
                KeyCode::Down => self.select_next(),
                KeyCode::Up => self.select_previous(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    self.selected = None;
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                    self.selected = None;
                }
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
    let restored = restore_terminal(&mut terminal);

    first_failure(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// The game loop's error wins over a failure to restore the terminal
fn first_failure(res: Result<()>, restored: Result<()>) -> Result<()> {
    res.and(restored)
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

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{country, france, germany};

    fn app_on_france() -> App {
        let mut session = GameSession::with_seed(3);
        session
            .start_with_target(
                vec![france(), germany(), country("Georgia", "Georgia", 42.0, 43.5)],
                "French Republic",
            )
            .unwrap();
        App::new(session)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_q_and_n_goes_into_input() {
        let mut app = app_on_france();
        type_text(&mut app, "qn");

        assert_eq!(app.input_buffer, "qn");
        assert!(!app.should_quit);
    }

    #[test]
    fn wrong_guess_clears_input_and_reveals() {
        let mut app = app_on_france();
        type_text(&mut app, "germ");
        press(&mut app, KeyCode::Enter);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.tries(), 1);
        assert_eq!(app.session.revealed_clues().len(), 2);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn unmatched_guess_keeps_input() {
        let mut app = app_on_france();
        type_text(&mut app, "atlantis");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_buffer, "atlantis");
        assert_eq!(app.session.tries(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn selection_wraps_and_submits() {
        let mut app = app_on_france();
        type_text(&mut app, "g");
        // Georgia, Germany
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, Some(0));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, Some(1));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.guessed_countries()[0].common_name(), "Germany");
    }

    #[test]
    fn tab_completes_first_suggestion() {
        let mut app = app_on_france();
        type_text(&mut app, "fra");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_buffer, "France");
    }

    #[test]
    fn win_then_new_game() {
        let mut app = app_on_france();
        type_text(&mut app, "France");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.tries_distribution, vec![1]);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(!app.session.is_won());
        assert_eq!(app.session.tries(), 0);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app_on_france();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_on_france();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn game_loop_error_is_returned() {
        let failed = first_failure(Err(anyhow::anyhow!("read failed")), Ok(()));
        assert_eq!(failed.unwrap_err().to_string(), "read failed");

        let both = first_failure(
            Err(anyhow::anyhow!("read failed")),
            Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(both.unwrap_err().to_string(), "read failed");

        let restore = first_failure(Ok(()), Err(anyhow::anyhow!("restore failed")));
        assert_eq!(restore.unwrap_err().to_string(), "restore failed");
        assert!(first_failure(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn roster_fallback_notice_is_shown() {
        let mut app = app_on_france();
        app.notify_roster_fallback("online roster unavailable: timed out");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("offline country list"));
        assert!(last.text.contains("timed out"));
    }

    #[test]
    fn statistics_rates() {
        let mut stats = Statistics::default();
        assert!(stats.average_tries().is_none());

        stats.record_win(2);
        stats.record_win(4);
        stats.record_abandoned();

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.tries_distribution, vec![0, 1, 0, 1]);
        assert!((stats.average_tries().unwrap() - 3.0).abs() < 1e-9);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
