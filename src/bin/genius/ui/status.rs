//! Status bar widget - level, whose turn it is, and the status message

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use genius::{game::Floor, Status};

use super::BoardView;

fn status_color(status: Status) -> Color {
    match status {
        Status::Welcome => Color::Cyan,
        Status::Observe => Color::Yellow,
        Status::YourTurn => Color::Green,
        Status::LevelComplete(_) => Color::LightGreen,
        Status::GameOver(_) => Color::Red,
    }
}

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, view: &BoardView, floor: Option<Floor>) {
    let block = Block::default().title(" genius ").borders(Borders::ALL);

    let turn = match floor {
        Some(Floor::Genius) => "● Genius",
        Some(Floor::Player) => "● You",
        None => "○ Idle",
    };

    let mut spans = vec![
        Span::styled(
            format!(" Level: {}  ", view.level),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{}  ", turn), Style::default().fg(Color::White)),
        Span::styled(
            view.status.to_string(),
            Style::default().fg(status_color(view.status)),
        ),
    ];
    if !view.has_audio() {
        spans.push(Span::styled("  (muted)", Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
