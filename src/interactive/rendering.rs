//! TUI rendering with ratatui
//!
//! Rack, word builder, played words and progress for the daily puzzle.

use super::app::{App, InputMode, MessageStyle};
use crate::core::RACK_SIZE;
use crate::dictionary::Dictionary;
use crate::output::formatters::{
    TILES_PER_ROW, daily_emoji, next_puzzle_now, par_message, pluralize, share_text,
};
use crate::session::{Game, is_magic_word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Word builder
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Rack and progress
            Constraint::Percentage(45), // Words and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_builder(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "{} SPELLSTACKS - {}",
        daily_emoji(app.game.seed()),
        app.game.date().format("%b %-d")
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Rack or summary
            Constraint::Length(3), // Progress
        ])
        .split(area);

    if app.input_mode == InputMode::Complete {
        render_summary(f, app, chunks[0]);
    } else {
        render_rack(f, &app.game, chunks[0]);
    }
    render_progress(f, &app.game, chunks[1]);
}

fn tile_span(letter: u8, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", char::from(letter)), style)
}

fn render_rack(f: &mut Frame, game: &Game<'_, Dictionary>, area: Rect) {
    let free = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let taken = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::from("")];
    for (row, chunk) in game.rack().letters().chunks(TILES_PER_ROW).enumerate() {
        let mut spans = vec![Span::raw("  ")];
        for (col, &letter) in chunk.iter().enumerate() {
            let style = if game.is_free(row * TILES_PER_ROW + col) {
                free
            } else {
                taken
            };
            spans.push(tile_span(letter, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let word_count = game.words().len();

    let headline = if game.all_used() {
        Span::styled(
            format!("✨ All letters used in {}!", pluralize(word_count, "word")),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(
                "Finished with {} left over",
                pluralize(game.remaining(), "letter")
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut content = vec![Line::from(headline)];
    if app.new_best {
        content.push(Line::styled(
            "A new best!",
            Style::default().fg(Color::Yellow),
        ));
    }
    content.push(Line::from(""));
    content.push(Line::from(format!("Score: {}", game.score())));
    if let Some(message) = par_message(app.par) {
        content.push(Line::from(message));
    }
    content.push(Line::from(format!(
        "Played {}  Streak {}  Best {}  Fewest {}",
        app.stats.played,
        app.stats.streak,
        app.stats.best,
        app.stats
            .fewest
            .map_or_else(|| "-".to_string(), |f| f.to_string())
    )));
    content.push(Line::styled(
        next_puzzle_now(),
        Style::default().fg(Color::Cyan),
    ));
    if game.all_used() {
        content.push(Line::from(""));
        for line in share_text(word_count).lines() {
            content.push(Line::styled(
                line.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Complete ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, game: &Game<'_, Dictionary>, area: Rect) {
    let ratio = game.progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!(
            "{}/{RACK_SIZE} letters used | {} left",
            game.used_count(),
            game.remaining()
        ));
    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Words
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .game
        .words()
        .iter()
        .enumerate()
        .map(|(i, played)| {
            let style = if is_magic_word(&played.word) {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(played.word.clone(), style),
            ]))
        })
        .collect();

    if let Some(previous) = app.game.previous_words()
        && app.input_mode == InputMode::Playing
    {
        items.push(ListItem::new(format!("Last time: {}", previous.join(", "))).style(
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title = format!(" Words ({}) ", app.game.words().len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Magic => Style::default().fg(Color::Magenta),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_builder(f: &mut Frame, app: &App, area: Rect) {
    let word = app.game.current_word();
    let (content, color) = if app.input_mode == InputMode::Complete {
        (String::new(), Color::Green)
    } else if word.is_empty() {
        ("Select letters".to_string(), Color::DarkGray)
    } else if word.len() < 2 {
        (word, Color::Yellow)
    } else if app.game.current_is_valid() {
        (word, Color::Green)
    } else {
        (word, Color::Red)
    };

    let builder = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(builder, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let score = Paragraph::new(format!("Score: {}", app.game.score())).alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let streak = Paragraph::new(format!("Streak: {}", app.stats.streak)).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Complete => "r: Replay | q: Quit",
        InputMode::Playing => {
            "Enter: Add | Bksp: Delete | ^Z: Undo word | ^R: Reset | ^F: Finish | ^C: Quit"
        }
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
