//! Application state and logic.

use crate::games::gomoku::{History, Position};
use crossterm::event::KeyCode;
use tracing::debug;

use super::input::move_cursor;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the move list.
    MoveList,
}

/// Main application state.
///
/// Owns the game history; rendering borrows it through [`App::history`].
#[derive(Debug, Clone)]
pub struct App {
    history: History,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_history: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_history: bool) -> Self {
        Self {
            history: History::new(),
            cursor: Position::center(),
            focus: Focus::Board,
            selected: 0,
            show_history,
            should_quit: false,
        }
    }

    /// The game history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the move list is shown.
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Places the next mark at `pos`; refused placements are ignored.
    pub fn on_cell_activated(&mut self, pos: Position) {
        match self.history.play(pos) {
            Ok(mov) => {
                debug!(%mov, "Placed mark");
                self.selected = self.history.pointer();
            }
            Err(e) => debug!(error = %e, "Ignoring placement"),
        }
    }

    /// Shows history entry `n`.
    pub fn on_history_entry_selected(&mut self, n: usize) {
        match self.history.jump(n) {
            Ok(()) => self.selected = n,
            Err(e) => debug!(error = %e, "Ignoring jump"),
        }
    }

    /// Steps one entry back in history.
    pub fn step_back(&mut self) {
        if let Some(prev) = self.history.pointer().checked_sub(1) {
            self.on_history_entry_selected(prev);
        }
    }

    /// Steps one entry forward in history.
    pub fn step_forward(&mut self) {
        let next = self.history.pointer() + 1;
        if next < self.history.len() {
            self.on_history_entry_selected(next);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.history = History::new();
        self.cursor = Position::center();
        self.selected = 0;
        self.focus = Focus::Board;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            KeyCode::Tab if self.show_history => {
                self.focus = match self.focus {
                    Focus::Board => Focus::MoveList,
                    Focus::MoveList => Focus::Board,
                };
                self.selected = self.history.pointer();
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::MoveList => self.handle_list_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.on_cell_activated(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.history.len() - 1);
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.history.len() - 1,
            KeyCode::Enter | KeyCode::Char(' ') => self.on_history_entry_selected(self.selected),
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}
