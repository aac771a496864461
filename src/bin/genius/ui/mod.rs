//! TUI module for genius
//!
//! Draws the board, maps keys and clicks onto the round engine, and drives
//! the engine's timers from the event loop.

mod board;
pub mod state;
mod status;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use log::debug;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::time::{Duration, Instant};

use genius::{RoundEngine, Signal};

pub use state::BoardView;

use board::{render_board, BoardLayout};
use status::render_status;

/// Redraw period while nothing is scheduled (~60fps)
const FRAME: Duration = Duration::from_millis(16);

/// UI application state
pub struct UiApp {
    /// The game
    engine: RoundEngine,
    /// Everything the engine asked to show or play
    view: BoardView,
    /// Zero point of the engine clock
    epoch: Instant,
    /// Clickable regions from the last draw
    layout: BoardLayout,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(engine: RoundEngine, view: BoardView) -> Self {
        Self {
            engine,
            view,
            epoch: Instant::now(),
            layout: BoardLayout::default(),
            should_quit: false,
        }
    }

    /// Engine clock: time since the app started
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            // Fire any timers that came due
            let now = self.now();
            self.engine.advance(now, &mut self.view);

            terminal.draw(|frame| self.render(frame))?;

            // Wake for the next timer or the next frame, whichever is first
            let timeout = self
                .engine
                .next_deadline()
                .map(|due| due.saturating_sub(self.now()).min(FRAME))
                .unwrap_or(FRAME);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code);
                    }
                    Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                        self.handle_click(mouse.column, mouse.row);
                    }
                    _ => {}
                }
            }
        }

        self.view.silence();
        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.start(),
            KeyCode::Char('x') | KeyCode::Char('X') => {
                if self.engine.abandon(&mut self.view) {
                    self.view.silence();
                }
            }
            KeyCode::Char(c) => match Signal::from_key(c) {
                Some(signal) => self.press(signal),
                None => debug!("unmapped key {:?}", c),
            },
            _ => {}
        }
    }

    /// Handle a left click: a pad, the start button, or nothing
    fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(signal) = self.layout.signal_at(column, row) {
            self.press(signal);
        } else if self.layout.is_start(column, row) {
            self.start();
        }
    }

    fn start(&mut self) {
        if !self.view.start_enabled {
            return;
        }
        let now = self.now();
        self.engine.start_game(now, &mut self.view);
    }

    fn press(&mut self, signal: Signal) {
        let now = self.now();
        let outcome = self.engine.accept_input(signal, now, &mut self.view);
        debug!("pressed {}: {:?}", signal, outcome);
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: status, board, start button, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(8),    // Pads
                Constraint::Length(3), // Start button
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_status(frame, chunks[0], &self.view, self.engine.state().floor());

        let now = self.now();
        self.layout = render_board(frame, chunks[1], chunks[2], &self.view, now);

        let help = Paragraph::new(" [G/R/Y/B or 1-4] Pads  [Space] Start  [X] Give up  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
