//! TUI rendering with ratatui
//!
//! Board, keyboard and gate cards for the Goobie interface.

use super::app::{App, MessageStyle, Screen};
use crate::core::LetterStatus;
use crate::game::{GameStatus, SessionSnapshot};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board or card
            Constraint::Percentage(45), // Keyboard + messages
        ])
        .split(chunks[1]);

    let snapshot = app.session.snapshot();
    match app.screen() {
        Screen::Board => render_board(f, &snapshot, main_chunks[0]),
        screen => render_card(f, app, &snapshot, screen, main_chunks[0]),
    }
    render_side_panel(f, app, &snapshot, main_chunks[1]);

    render_status(f, app, &snapshot, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 GOOBIE - Guess the 5-letter word in 6 tries")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::White)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn board_lines(snapshot: &SessionSnapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(snapshot.max_guesses * 2);

    for row in 0..snapshot.max_guesses {
        let spans: Vec<Span> = if let Some(feedback) = snapshot.rows.get(row) {
            feedback
                .states()
                .iter()
                .flat_map(|state| tile(state.letter, tile_style(state.status)))
                .collect()
        } else if snapshot.current_row() == Some(row) {
            let mut letters = snapshot.current_input.chars();
            (0..crate::core::WORD_LENGTH)
                .flat_map(|_| match letters.next() {
                    Some(letter) => tile(
                        letter,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => tile('_', Style::default().fg(Color::Gray)),
                })
                .collect()
        } else {
            (0..crate::core::WORD_LENGTH)
                .flat_map(|_| tile('·', Style::default().fg(Color::DarkGray)))
                .collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let board = Paragraph::new(board_lines(snapshot))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Guess {} of {} ",
                    (snapshot.guesses.len() + 1).min(snapshot.max_guesses),
                    snapshot.max_guesses
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_card(f: &mut Frame, app: &App, snapshot: &SessionSnapshot, screen: Screen, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let (title, color, mut content) = match screen {
        Screen::Payment => (
            " Play Goobie ",
            Color::Yellow,
            vec![
                Line::from("Pay 1 USDC to play today's puzzle"),
                Line::from(""),
                Line::from(Span::styled("p: Pay to Play (1 USDC)", bold)),
            ],
        ),
        Screen::Locked => (
            " Already Played ",
            Color::Red,
            vec![Line::from("Come back tomorrow for a new puzzle!")],
        ),
        Screen::Ready => (
            " Today's Puzzle ",
            Color::Green,
            vec![
                Line::from("Guess the 5-letter word in 6 tries."),
                Line::from(""),
                Line::from(Span::styled("Enter: Start New Game", bold)),
            ],
        ),
        Screen::Finished | Screen::Board => {
            let won = snapshot.status == GameStatus::Won;
            let mut lines = vec![Line::from(Span::styled(
                if won { "Congratulations!" } else { "Game Over" },
                bold,
            ))];
            if let Some(target) = snapshot.revealed_target.as_ref().filter(|_| !won) {
                lines.push(Line::from(vec![
                    Span::raw("The word was: "),
                    Span::styled(target.text().to_string(), bold),
                ]));
            }
            lines.push(Line::from(""));
            lines.extend(board_lines(snapshot));
            if let Some(grid) = app.session.share_grid() {
                lines.extend(grid.lines().map(|line| Line::from(line.to_string())));
            }
            (
                if won { " You Won! " } else { " Game Over " },
                if won { Color::Green } else { Color::Red },
                lines,
            )
        }
    };

    if app.gate.is_free_mode_enabled() {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "Free mode: finished games are not recorded",
            Style::default().fg(Color::Cyan),
        )));
    }

    let card = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(card, area);
}

fn render_side_panel(f: &mut Frame, app: &App, snapshot: &SessionSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, snapshot, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    tile(letter, tile_style(snapshot.letter_statuses.status(letter)))
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: Guess | Backspace: Delete",
        Style::default().fg(Color::DarkGray),
    )));

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
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

fn render_status(f: &mut Frame, app: &App, snapshot: &SessionSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Status: {}", snapshot.status)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.screen() {
        Screen::Payment => "p: Pay | f: Free Mode | q/Esc: Quit",
        Screen::Locked => "f: Free Mode | q/Esc: Quit",
        Screen::Ready => "Enter: Start | f: Free Mode | r: Reset Payment | q/Esc: Quit",
        Screen::Board => "A-Z: Type | Enter: Guess | Backspace: Delete | Esc: Quit",
        Screen::Finished => "n: New Game | q/Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
