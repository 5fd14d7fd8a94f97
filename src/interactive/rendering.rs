//! TUI rendering with ratatui
//!
//! The guess grid, message log and the loading / game-over overlays.

use super::app::{App, MessageStyle};
use crate::core::{Mark, WORD_LENGTH};
use crate::session::{MAX_GUESSES, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * WORD_LENGTH as u16;
const GRID_HEIGHT: u16 = CELL_HEIGHT * MAX_GUESSES as u16;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(GRID_HEIGHT), // Grid
            Constraint::Min(4),              // Messages
            Constraint::Length(1),           // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.board.loading {
        render_popup(f, " Checking ", "Checking word…", Color::Cyan);
    } else if let Some(ref banner) = app.board.banner {
        let color = if app.session.phase() == Phase::Won {
            Color::Green
        } else {
            Color::Red
        };
        render_popup(f, " Game Over ", &format!("{banner}\n\nPress 'q' to quit"), color);
    }
}

/// Shown while the word of the day is being fetched
pub fn loading_screen(f: &mut Frame) {
    render_header(f, Rect { height: 3, ..f.area() }.intersection(f.area()));
    render_popup(f, " Loading ", "Fetching the word of the day…", Color::Cyan);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE - Word of the Day")
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

fn mark_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Misplaced => Color::Yellow,
        Mark::Incorrect => Color::DarkGray,
    };
    Style::default()
        .bg(bg)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let left = area.x + area.width.saturating_sub(GRID_WIDTH) / 2;

    for (row, slot) in app.session.slots().iter().enumerate() {
        let painted = app.board.painted[row];
        let is_active = row == app.session.active_slot() && !app.session.is_over();

        for col in 0..WORD_LENGTH {
            let cell = Rect::new(
                left + col as u16 * CELL_WIDTH,
                area.y + row as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area);

            let letter = slot.letter_at(col).map(String::from).unwrap_or_default();
            let (style, border) = match painted {
                Some(marks) => (mark_style(marks[col]), Style::default().fg(Color::DarkGray)),
                None if is_active && col == app.session.cursor() => (
                    Style::default().add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Cyan),
                ),
                None if is_active => (
                    Style::default().add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::White),
                ),
                None => (Style::default(), Style::default().fg(Color::DarkGray)),
            };

            let paragraph = Paragraph::new(letter)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border),
                );
            f.render_widget(paragraph, cell);
        }
    }
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.session.phase() {
        Phase::Won | Phase::Lost => "q: Quit",
        Phase::Validating => "Checking… | Esc: Quit",
        Phase::AwaitingInput | Phase::ReadyToSubmit => {
            "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
        }
    };

    let status = Paragraph::new(Line::from(format!(
        "Guess {}/{MAX_GUESSES} | {help_text}",
        (app.session.guesses_used() + 1).min(MAX_GUESSES)
    )))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

fn render_popup(f: &mut Frame, title: &str, text: &str, color: Color) {
    let area = centered_rect(40, 7, f.area());
    let popup = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
