//! Stateless rendering for both game modes.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app::{MotionView, TurnView};
use crate::games::grid::{Cell, Marker, Point};
use crate::games::snake::MotionStatus;

/// Renders the turn-mode grid with the cursor highlighted.
pub fn draw_turn(frame: &mut Frame, view: &TurnView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Grid
            Constraint::Length(3), // Status
            Constraint::Length(1), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Grid Arcade - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let dimensions = view.grid().dimensions();
    let width = u16::try_from(dimensions.columns * 4 + 1).unwrap_or(u16::MAX);
    let height = u16::try_from(dimensions.rows * 2 + 1).unwrap_or(u16::MAX);
    frame.render_widget(turn_grid(view), center_rect(chunks[1], width, height));

    let status = Paragraph::new(view.message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    frame.render_widget(
        controls(&[("↑↓←→", " move "), ("Enter/1-9", " mark "), ("R", " new game "), ("Q", " quit")]),
        chunks[3],
    );
}

fn turn_grid(view: &TurnView) -> Paragraph<'static> {
    let dimensions = view.grid().dimensions();
    let winning = view.winning_pattern();
    let mut lines = Vec::new();

    for row in 0..dimensions.rows {
        if row > 0 {
            let rule = vec!["───"; dimensions.columns].join("┼");
            lines.push(Line::from(Span::styled(rule, Style::default().fg(Color::DarkGray))));
        }

        let mut spans = Vec::new();
        for column in 0..dimensions.columns {
            if column > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let Some(index) = dimensions.index_of(column, row) else {
                continue;
            };
            let (symbol, mut style) = match view.grid().get(index) {
                Some(Cell::Marked(Marker::O)) => (
                    " O ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Some(Cell::Marked(Marker::X)) => (
                    " X ",
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                _ => (" · ", Style::default().fg(Color::DarkGray)),
            };
            if winning.is_some_and(|pattern| pattern.contains(&index)) {
                style = style.bg(Color::Green);
            }
            if index == view.cursor() {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
}

/// Renders the motion-mode playfield, or the game-over screen.
pub fn draw_motion(frame: &mut Frame, view: &MotionView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Playfield
            Constraint::Length(1), // Controls
        ])
        .split(frame.area());

    frame.render_widget(motion_stats(view), chunks[0]);

    if view.update().status == MotionStatus::Collided {
        frame.render_widget(game_over(view), chunks[1]);
    } else {
        frame.render_widget(playfield(view), chunks[1]);
    }

    frame.render_widget(
        controls(&[("↑↓←→", " or "), ("WASD", " steer | "), ("R", " new game | "), ("Q", " quit")]),
        chunks[2],
    );
}

fn playfield(view: &MotionView) -> Paragraph<'static> {
    let lattice = view.lattice();
    let body = &view.update().body;
    let head = body.last().copied();
    let nodes: Vec<(usize, usize)> = body.iter().filter_map(|p| lattice.node_of(*p)).collect();
    let head_node = head.and_then(|p| lattice.node_of(p));

    let mut lines = Vec::new();
    for row in 0..lattice.rows() {
        let spans: Vec<Span> = (0..lattice.columns())
            .map(|column| {
                if head_node == Some((column, row)) {
                    Span::styled(
                        "■ ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )
                } else if nodes.contains(&(column, row)) {
                    Span::styled("□ ", Style::default().fg(Color::Magenta))
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(" Snake "),
    )
}

fn motion_stats(view: &MotionView) -> Paragraph<'static> {
    let update = view.update();
    let head = update.body.last().copied().unwrap_or(Point::new(0, 0));
    Paragraph::new(Line::from(vec![
        Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
        Span::styled(update.ticks.to_string(), Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled("Head: ", Style::default().fg(Color::Yellow)),
        Span::styled(head.to_string(), Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled("Heading: ", Style::default().fg(Color::Yellow)),
        Span::styled(update.heading.to_string(), Style::default().fg(Color::White)),
    ]))
    .alignment(Alignment::Center)
}

fn game_over(view: &MotionView) -> Paragraph<'static> {
    let head = view.update().body.last().copied().unwrap_or(Point::new(0, 0));
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Hit the edge heading {} from {}",
            view.update().heading,
            head
        )),
        Line::from(""),
        Line::from("Press R to restart or Q to quit"),
    ];

    Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
}

fn controls(keys: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(Color::Cyan)),
                Span::raw(*label),
            ]
        })
        .collect();
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
