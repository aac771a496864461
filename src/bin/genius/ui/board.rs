//! Board widget - the four pads and the start button, plus click hit-testing

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use genius::Signal;

use super::BoardView;

/// Where the clickable parts of the board were last drawn
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardLayout {
    pads: [Rect; 4],
    start: Rect,
}

impl BoardLayout {
    /// Pad under the given terminal cell, if any
    pub fn signal_at(&self, column: u16, row: u16) -> Option<Signal> {
        let position = Position::new(column, row);
        self.pads
            .iter()
            .position(|pad| pad.contains(position))
            .and_then(Signal::from_index)
    }

    pub fn is_start(&self, column: u16, row: u16) -> bool {
        self.start.contains(Position::new(column, row))
    }
}

/// (dim, lit) colors for a pad
fn pad_colors(signal: Signal) -> (Color, Color) {
    match signal {
        Signal::Green => (Color::Rgb(0, 90, 30), Color::Rgb(80, 255, 120)),
        Signal::Red => (Color::Rgb(110, 0, 0), Color::Rgb(255, 80, 80)),
        Signal::Yellow => (Color::Rgb(110, 100, 0), Color::Rgb(255, 240, 90)),
        Signal::Blue => (Color::Rgb(0, 30, 120), Color::Rgb(90, 150, 255)),
    }
}

/// Split the board area into the 2x2 pad grid
fn pad_rects(area: Rect) -> [Rect; 4] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut pads = [Rect::default(); 4];
    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        pads[row_idx * 2] = cols[0];
        pads[row_idx * 2 + 1] = cols[1];
    }
    pads
}

/// Render pads into `board` and the start button into `start`
pub fn render_board(
    frame: &mut Frame,
    board: Rect,
    start: Rect,
    view: &BoardView,
    now: Duration,
) -> BoardLayout {
    let pads = pad_rects(board);

    for (signal, rect) in Signal::ALL.into_iter().zip(pads) {
        let (dim, lit) = pad_colors(signal);
        let is_lit = view.is_lit(signal, now);
        let fill = if is_lit { lit } else { dim };

        let border_style = if view.interactive {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let label = format!(
            "\n{} [{}]",
            signal.name().to_uppercase(),
            signal.index() + 1
        );
        let text_style = if is_lit {
            Style::default().fg(Color::Black).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let pad = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(text_style.bg(fill))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
        frame.render_widget(pad, rect);
    }

    let (label, style) = if view.start_enabled {
        (
            " ▶ Start [Space] ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        (" Playing... ", Style::default().fg(Color::DarkGray))
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, start);

    BoardLayout { pads, start }
}
