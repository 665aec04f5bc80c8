//! TUI application state and logic

use crate::game::{RoundResult, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest word the input box accepts
pub const MAX_INPUT_LEN: usize = 30;

/// Number of messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_best: bool,
    pub should_quit: bool,
    rng: StdRng,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        Self::with_rng(session, StdRng::from_os_rng())
    }

    /// Build an app drawing new rounds from the given generator
    #[must_use]
    pub fn with_rng(session: Session<'a>, rng: StdRng) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            show_best: false,
            should_quit: false,
            rng,
        };
        app.add_message(
            "Welcome! Find a word using as many drawn letters as possible.",
            MessageStyle::Info,
        );
        app.add_message(
            "Letters in draw order with no gaps score best.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the word in the input buffer
    pub fn submit_word(&mut self) {
        let word = std::mem::take(&mut self.input_buffer);
        let (text, style) = describe_result(self.session.submit(&word));
        self.add_message(&text, style);
    }

    /// Start a new round with a fresh draw
    pub fn new_draw(&mut self) {
        self.session.new_draw(&mut self.rng);
        self.input_buffer.clear();
        self.show_best = false;
        let text = format!("New draw: {}", self.session.draw());
        self.add_message(&text, MessageStyle::Info);
    }

    /// Reveal the best word for the current draw
    pub fn reveal_best(&mut self) {
        self.show_best = true;
        let text = match self.session.best_solution() {
            Some(best) => format!(
                "Best word: {} ({} points)",
                best.word.to_uppercase(),
                best.total()
            ),
            None => "No word in the dictionary".to_string(),
        };
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply a key press to the app state
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.new_draw();
            }
            KeyCode::Char('?') => {
                self.reveal_best();
            }
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN && !c.is_control() {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_word();
            }
            _ => {}
        }
    }
}

fn describe_result(result: &RoundResult) -> (String, MessageStyle) {
    match (result.score(), result.invalid_reason()) {
        (Some(score), _) => (
            format!("{}: {} points", score.word, score.total),
            MessageStyle::Success,
        ),
        (None, Some(reason)) => (
            format!("Invalid word: {}", reason.describe()),
            MessageStyle::Error,
        ),
        (None, None) => (String::new(), MessageStyle::Info),
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

    Ok(())
}
