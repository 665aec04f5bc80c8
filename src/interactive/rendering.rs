//! TUI rendering with ratatui
//!
//! Panels for the draw, the current round, history and the session.

use super::app::{App, MessageStyle};
use crate::core::ScoreResult;
use crate::game::{HISTORY_LIMIT, RoundResult};
use crate::output::formatters::{MAX_TOTAL, format_letters, format_parts, skeleton_marker};
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
            Constraint::Length(5), // Draw
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_draw(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 LETTER DRAW")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_draw(f: &mut Frame, app: &App, area: Rect) {
    let mut tiles = Vec::new();
    for letter in app.session.draw().letters() {
        tiles.push(Span::styled(
            format!(" {letter} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        tiles.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(tiles)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Draw ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_last_result(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

/// Word with skeleton letters highlighted and insertions in red
fn word_spans(score: &ScoreResult) -> Vec<Span<'static>> {
    let span = score
        .skeleton_indices
        .first()
        .zip(score.skeleton_indices.last());

    score
        .word
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let style = if score.skeleton_indices.contains(&i) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if span.is_some_and(|(&first, &last)| (first..=last).contains(&i)) {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(ch.to_string(), style)
        })
        .collect()
}

fn score_lines(score: &ScoreResult) -> Vec<Line<'static>> {
    vec![
        Line::from(
            [Span::raw("Word:        ")]
                .into_iter()
                .chain(word_spans(score))
                .collect::<Vec<_>>(),
        ),
        Line::from(format!(
            "             {}",
            skeleton_marker(&score.word, &score.skeleton_indices)
        )),
        Line::from(format!(
            "Letters:     {} ({}/{})",
            format_letters(&score.used_letters),
            score.used_letters.len(),
            score.draw.len()
        )),
        Line::from(format!(
            "Order bonus: {}",
            if score.order_bonus { "yes" } else { "no" }
        )),
        Line::from(format!("Insertions:  {}", score.insertions)),
        Line::from(format!("Breakdown:   {}", format_parts(&score.parts))),
        Line::from(vec![
            Span::raw("Total:       "),
            Span::styled(
                score.total.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ]
}

fn render_last_result(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.session.last_result() {
        None => vec![Line::from("Type a word and press Enter")],
        Some(result) => match (result.score(), result.invalid_reason()) {
            (Some(score), _) => score_lines(score),
            (None, Some(reason)) => vec![
                Line::from(format!("Word: {}", result.raw_word)),
                Line::from(Span::styled(
                    format!("Invalid word: {}", reason.describe()),
                    Style::default().fg(Color::Red),
                )),
            ],
            (None, None) => Vec::new(),
        },
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Last Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn history_item(result: &RoundResult) -> ListItem<'static> {
    let text = match result.invalid_reason() {
        Some(reason) => format!("{:<12} ✗ {reason}", result.raw_word),
        None => format!(
            "{:<12} {:>3} pts  [{}]",
            result.normalized_word,
            result.total(),
            result.draw
        ),
    };
    let style = if result.is_valid() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    ListItem::new(text).style(style)
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .map(history_item)
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(format!(" History (last {HISTORY_LIMIT}) "))
            .borders(Borders::ALL),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Length(5), // Best word
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score_gauge(f, app, chunks[0]);
    render_best(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.last_result().map_or(0, RoundResult::total);
    let percent = (f64::from(total.clamp(0, MAX_TOTAL)) / f64::from(MAX_TOTAL) * 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Last Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{total}/{MAX_TOTAL}"));

    f.render_widget(gauge, area);
}

fn render_best(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.session.known_best() {
        Some(best) if app.show_best || app.session.last_result().is_some() => vec![
            Line::from(vec![
                Span::raw("Word:  "),
                Span::styled(
                    best.word.to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Score: {}", best.total())),
            Line::from(format!("       {}", format_parts(&best.score.parts))),
        ],
        _ => vec![Line::from("Press ? to reveal")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Best Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
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
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Your Word | Enter to submit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
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

    let score_text = format!("Session score: {}", app.session.session_score());
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let rounds_text = format!("Words played: {}", app.session.rounds_played());
    let rounds = Paragraph::new(rounds_text).alignment(Alignment::Center);
    f.render_widget(rounds, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Tab: New Draw | ?: Best Word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
