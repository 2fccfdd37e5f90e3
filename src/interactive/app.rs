//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::output::formatters::pluralize;
use crate::session::{Game, Stats};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, Dictionary>,
    /// Covering word count for today's rack, if known
    pub par: Option<usize>,
    pub stats: Stats,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    /// Whether the last finish set a new fewest-words record
    pub new_best: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Complete,
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
    Magic,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a, Dictionary>, par: Option<usize>) -> Self {
        let mut stats = Stats::new();
        stats.refresh(game.date());

        let input_mode = if game.is_done() {
            InputMode::Complete
        } else {
            InputMode::Playing
        };

        Self {
            game,
            par,
            stats,
            messages: vec![Message {
                text: "Type letters to spell a word, Enter to add it.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode,
            should_quit: false,
            new_best: false,
        }
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

    /// Submit the current selection
    pub fn submit(&mut self) {
        match self.game.submit() {
            Ok(outcome) => {
                let text = format!(
                    "{} added. {} remaining.",
                    outcome.word,
                    pluralize(outcome.remaining, "letter")
                );
                let style = if outcome.magic {
                    MessageStyle::Magic
                } else {
                    MessageStyle::Success
                };
                self.add_message(&text, style);

                if outcome.completed {
                    self.complete();
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Take back the newest word
    pub fn undo_word(&mut self) {
        if let Some(word) = self.game.remove_word(0) {
            self.add_message(&format!("{word} removed"), MessageStyle::Info);
        } else {
            self.add_message("No words to take back", MessageStyle::Error);
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.add_message("Starting over with the same letters", MessageStyle::Info);
    }

    /// Stop with letters left over
    pub fn finish(&mut self) {
        self.game.finish();
        self.complete();
    }

    pub fn replay(&mut self) {
        self.game.replay();
        self.new_best = false;
        self.input_mode = InputMode::Playing;
        self.messages.clear();
        self.add_message("Same letters, fresh board. Can you beat it?", MessageStyle::Info);
    }

    fn complete(&mut self) {
        let words = self.game.words().len();
        let all_used = self.game.all_used();

        self.new_best = all_used && self.stats.is_new_best(words);
        self.stats.record(self.game.date(), words, all_used);
        self.input_mode = InputMode::Complete;

        if all_used {
            self.add_message(
                &format!("Puzzle complete in {}!", pluralize(words, "word")),
                MessageStyle::Success,
            );
        } else {
            self.add_message("Puzzle finished", MessageStyle::Info);
        }
        self.add_message("Press 'r' to replay or 'q' to quit.", MessageStyle::Info);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Complete => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') => self.replay(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Char('q') if ctrl => self.should_quit = true,
                KeyCode::Char('z') if ctrl => self.undo_word(),
                KeyCode::Char('r') if ctrl => self.reset(),
                KeyCode::Char('f') if ctrl => self.finish(),
                KeyCode::Char(c) if !ctrl => {
                    // Letters not on the rack are ignored
                    self.game.select_letter(c);
                }
                KeyCode::Backspace => {
                    self.game.delete_letter();
                }
                KeyCode::Esc => self.game.clear_selection(),
                KeyCode::Enter => self.submit(),
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
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
