//! TUI application state and logic

use crate::dictionary::SpellChecker;
use crate::game::{GameSession, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D: SpellChecker> {
    pub session: GameSession<'a, D>,
    pub should_quit: bool,
    /// Word accepted by the most recent submission, for highlighting
    pub last_accepted: Option<String>,
}

impl<'a, D: SpellChecker> App<'a, D> {
    #[must_use]
    pub fn new(session: GameSession<'a, D>) -> Self {
        Self {
            session,
            should_quit: false,
            last_accepted: None,
        }
    }

    /// Whether the error alert is showing
    #[must_use]
    pub const fn showing_error(&self) -> bool {
        self.session.last_error().is_some()
    }

    pub fn submit(&mut self) {
        match self.session.submit_current_input() {
            Ok(SubmitOutcome::Accepted(word)) => self.last_accepted = Some(word),
            // Rejections are kept on the session and shown as an alert
            Ok(SubmitOutcome::Ignored) | Err(_) => {}
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.last_accepted = None;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('r') => self.restart(),
                _ => {}
            }
            return;
        }

        if self.showing_error() {
            // The alert is modal: it has to be closed before typing resumes
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.session.dismiss_error();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.session.current_input_mut().pop();
            }
            KeyCode::Char(c) => self.session.current_input_mut().push(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: SpellChecker>(app: App<'_, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, D: SpellChecker>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
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
    use crate::core::Rejection;
    use crate::dictionary::{ENGLISH, WordListDictionary};
    use crate::wordlists::RootWordCatalog;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_word<D: SpellChecker>(app: &mut App<'_, D>, word: &str) {
        for c in word.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn app(catalog: &RootWordCatalog) -> App<'_, WordListDictionary> {
        let dictionary = WordListDictionary::new(ENGLISH, ["bored", "road"]);
        App::new(GameSession::with_root_word(catalog, dictionary, "keyboard"))
    }

    #[test]
    fn typing_and_enter_submits() {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let mut app = app(&catalog);

        type_word(&mut app, "Bored");
        assert_eq!(app.session.current_input(), "Bored");
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.session.used_words(), ["bored"]);
        assert_eq!(app.last_accepted.as_deref(), Some("bored"));
        assert!(app.session.current_input().is_empty());
    }

    #[test]
    fn backspace_edits_input() {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let mut app = app(&catalog);

        type_word(&mut app, "roads");
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.session.current_input(), "road");
    }

    #[test]
    fn rejection_opens_modal_alert() {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let mut app = app(&catalog);

        type_word(&mut app, "xyz");
        app.handle_key(press(KeyCode::Enter));
        assert!(app.showing_error());
        assert_eq!(app.session.last_error(), Some(&Rejection::TooShort));

        // typing is blocked while the alert is open
        app.handle_key(press(KeyCode::Char('a')));
        assert_eq!(app.session.current_input(), "xyz");

        app.handle_key(press(KeyCode::Enter));
        assert!(!app.showing_error());
        assert!(!app.should_quit);
    }

    #[test]
    fn esc_closes_alert_before_quitting() {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let mut app = app(&catalog);

        type_word(&mut app, "keyboard");
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Esc));
        assert!(!app.showing_error());
        assert!(!app.should_quit);

        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_r_restarts() {
        let catalog = RootWordCatalog::from_slice(&["airplane"]);
        let mut app = app(&catalog);

        type_word(&mut app, "road");
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(ctrl('r'));

        assert!(app.session.used_words().is_empty());
        assert_eq!(app.session.root_word(), "airplane");
        assert!(app.last_accepted.is_none());
    }

    #[test]
    fn ctrl_c_quits() {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let mut app = app(&catalog);

        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let mut app = app(&catalog);

        let mut release = press(KeyCode::Char('r'));
        release.kind = KeyEventKind::Release;
        app.handle_key(release);
        assert!(app.session.current_input().is_empty());
    }
}
