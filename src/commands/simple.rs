//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a word to play it, or a command.

use crate::dictionary::Lexicon;
use crate::output::display::{print_board, print_completion};
use crate::output::formatters::pluralize;
use crate::session::{Game, Stats, SubmitOutcome};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    Help,
    Reset,
    Replay,
    Finish,
    /// Take back the word at this 1-based position on the board
    Remove(usize),
    Play(String),
    Invalid(String),
}

impl SimpleCommand {
    /// Parse one line of input
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let lower = input.to_lowercase();
        let mut parts = lower.split_whitespace();

        match (parts.next(), parts.next()) {
            (Some("quit" | "exit" | ":q"), None) => Self::Quit,
            (Some("help" | "?"), None) => Self::Help,
            (Some("reset"), None) => Self::Reset,
            (Some("replay"), None) => Self::Replay,
            (Some("finish" | "done"), None) => Self::Finish,
            (Some("remove" | "rm"), Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Self::Remove(n),
                _ => Self::Invalid(format!("'{n}' is not a word number")),
            },
            (Some(word), None) if word.bytes().all(|b| b.is_ascii_alphabetic()) => {
                Self::Play(word.to_ascii_uppercase())
            }
            (None, _) => Self::Invalid("Type a word or 'help'".to_string()),
            _ => Self::Invalid(format!("Unknown input '{input}'")),
        }
    }
}

/// Select the letters of `word` on the rack and submit them
///
/// # Errors
///
/// Returns a message if the word cannot be spelled from the free tiles or the
/// game rejects it. The selection is cleared either way.
pub fn play_word<L: Lexicon>(game: &mut Game<'_, L>, word: &str) -> Result<SubmitOutcome, String> {
    game.clear_selection();
    if !word.chars().all(|ch| game.select_letter(ch)) {
        game.clear_selection();
        return Err(format!(
            "{} can't be spelled from the remaining letters",
            word.to_ascii_uppercase()
        ));
    }

    let outcome = game.submit().map_err(|e| e.to_string());
    game.clear_selection();
    outcome
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<L: Lexicon>(
    game: &mut Game<'_, L>,
    stats: &mut Stats,
    par: Option<usize>,
) -> Result<(), String> {
    run_simple_with(game, stats, par, &mut io::stdin().lock())
}

/// Line-mode loop reading from `input`; returns when it hits end of input
///
/// # Errors
///
/// Returns an error if reading `input` or flushing stdout fails.
pub fn run_simple_with<L: Lexicon, R: BufRead>(
    game: &mut Game<'_, L>,
    stats: &mut Stats,
    par: Option<usize>,
    input: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Spellstacks - Daily Puzzle                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    stats.refresh(game.date());

    loop {
        print_board(game);

        let prompt = if game.is_done() { "Command" } else { "Word" };
        let Some(line) = get_user_input(input, prompt)? else {
            println!();
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        match SimpleCommand::parse(&line) {
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::Help => print_help(),
            SimpleCommand::Reset => {
                game.reset();
                println!("🔄 Starting over with the same letters\n");
            }
            SimpleCommand::Replay => {
                if game.is_done() {
                    game.replay();
                    println!("🔄 Same letters, fresh board\n");
                } else {
                    println!("Finish this attempt first ('finish')\n");
                }
            }
            SimpleCommand::Finish => {
                if !game.is_done() {
                    game.finish();
                    stats.record(game.date(), game.words().len(), game.all_used());
                    print_completion(game, stats, par);
                }
            }
            SimpleCommand::Remove(n) => match game.remove_word(n - 1) {
                Some(word) => println!("↩️  {word} removed\n"),
                None => println!("{}\n", "No word at that position".red()),
            },
            SimpleCommand::Play(word) => {
                if game.is_done() {
                    println!("The puzzle is finished. Type 'replay' or 'quit'.\n");
                    continue;
                }
                match play_word(game, &word) {
                    Ok(outcome) => {
                        let note = if outcome.magic { " ✨" } else { "" };
                        println!(
                            "{} added{note}. {} remaining.\n",
                            outcome.word.green().bold(),
                            pluralize(outcome.remaining, "letter")
                        );
                        if outcome.completed {
                            let best = stats.is_new_best(game.words().len());
                            stats.record(game.date(), game.words().len(), true);
                            if best {
                                println!("{}", "A new best!".bright_yellow().bold());
                            }
                            print_completion(game, stats, par);
                        }
                    }
                    Err(message) => println!("❌ {message}\n"),
                }
            }
            SimpleCommand::Invalid(message) => println!("{message}\n"),
        }
    }
}

fn print_help() {
    println!("Spell words using the 18 letters below. Each letter can be used once.");
    println!("Use every letter in as few words as you can.\n");
    println!("Commands: 'remove N' to take back word N, 'reset' to start over,");
    println!("          'finish' to stop, 'replay' after finishing, 'quit' to exit\n");
}

/// Get user input with a prompt
///
/// Returns `None` once `input` is exhausted.
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rack;
    use crate::dictionary::Dictionary;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn game(lexicon: &Dictionary) -> Game<'_, Dictionary> {
        Game::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Rack::new("CATDOGBIRDHOUSEANT").unwrap(),
            lexicon,
        )
    }

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleCommand::parse("quit"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(" HELP "), SimpleCommand::Help);
        assert_eq!(SimpleCommand::parse("reset"), SimpleCommand::Reset);
        assert_eq!(SimpleCommand::parse("replay"), SimpleCommand::Replay);
        assert_eq!(SimpleCommand::parse("done"), SimpleCommand::Finish);
        assert_eq!(SimpleCommand::parse("remove 2"), SimpleCommand::Remove(2));
        assert_eq!(
            SimpleCommand::parse("garden"),
            SimpleCommand::Play("GARDEN".to_string())
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(SimpleCommand::parse("remove 0"), SimpleCommand::Invalid(_)));
        assert!(matches!(SimpleCommand::parse("remove x"), SimpleCommand::Invalid(_)));
        assert!(matches!(SimpleCommand::parse("two words"), SimpleCommand::Invalid(_)));
        assert!(matches!(SimpleCommand::parse("c4t"), SimpleCommand::Invalid(_)));
        assert!(matches!(SimpleCommand::parse(""), SimpleCommand::Invalid(_)));
    }

    #[test]
    fn play_word_commits() {
        let lexicon = Dictionary::from_words(["CAT", "DOG"]);
        let mut game = game(&lexicon);

        let outcome = play_word(&mut game, "cat").unwrap();
        assert_eq!(outcome.word, "CAT");
        assert_eq!(outcome.remaining, 15);
        assert!(game.selection().is_empty());
    }

    #[test]
    fn play_word_reports_unspellable() {
        let lexicon = Dictionary::from_words(["ZOO"]);
        let mut game = game(&lexicon);

        let err = play_word(&mut game, "ZOO").unwrap_err();
        assert!(err.contains("can't be spelled"));
        assert!(game.selection().is_empty());
    }

    #[test]
    fn play_word_reports_invalid() {
        let lexicon = Dictionary::from_words(["CAT"]);
        let mut game = game(&lexicon);

        let err = play_word(&mut game, "TAC").unwrap_err();
        assert_eq!(err, "TAC is not a valid word");
        assert!(game.selection().is_empty());
        assert_eq!(game.remaining(), 18);
    }

    #[test]
    fn user_input_ends_at_eof() {
        let mut input = Cursor::new("  cat \n");
        assert_eq!(
            get_user_input(&mut input, "Word").unwrap(),
            Some("cat".to_string())
        );
        assert_eq!(get_user_input(&mut input, "Word").unwrap(), None);
    }

    #[test]
    fn loop_returns_when_input_closes() {
        let lexicon = Dictionary::from_words(["CAT"]);
        let mut game = game(&lexicon);
        let mut stats = Stats::new();

        let mut input = Cursor::new("cat\n");
        run_simple_with(&mut game, &mut stats, None, &mut input).unwrap();

        assert_eq!(game.words().len(), 1);
        assert_eq!(game.remaining(), 15);
    }

    #[test]
    fn loop_skips_blank_lines_then_quits() {
        let lexicon = Dictionary::from_words(["CAT"]);
        let mut game = game(&lexicon);
        let mut stats = Stats::new();

        let mut input = Cursor::new("\n\nquit\ncat\n");
        run_simple_with(&mut game, &mut stats, None, &mut input).unwrap();

        assert!(game.words().is_empty());
    }
}
