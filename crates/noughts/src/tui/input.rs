//! Translates terminal events into engine actions.
//!
//! Filtering happens here: clicks off the board and placements after the game
//! has ended never reach the engine, and restart is only offered once the game
//! is over.

use super::layout::ScreenLayout;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use noughts_rules::{Action, GRID_SIZE};

/// Keyboard selection on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Cursor {
    /// Moves the cursor with the arrow keys, stopping at the edges.
    pub fn moved(self, key: KeyCode) -> Self {
        let last = GRID_SIZE - 1;
        match key {
            KeyCode::Left => Self {
                col: self.col.saturating_sub(1),
                ..self
            },
            KeyCode::Right => Self {
                col: (self.col + 1).min(last),
                ..self
            },
            KeyCode::Up => Self {
                row: self.row.saturating_sub(1),
                ..self
            },
            KeyCode::Down => Self {
                row: (self.row + 1).min(last),
                ..self
            },
            _ => self,
        }
    }
}

/// What the event loop should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward to the engine.
    Act(Action),
    /// Move the keyboard cursor.
    Select(Cursor),
}

/// Maps one terminal event to an [`Input`], or `None` to ignore it.
pub fn translate(
    event: &Event,
    layout: Option<&ScreenLayout>,
    cursor: Cursor,
    game_over: bool,
) -> Option<Input> {
    match event {
        Event::Key(key) => translate_key(key, cursor, game_over),
        Event::Mouse(mouse) => translate_mouse(mouse, layout, game_over),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, cursor: Cursor, game_over: bool) -> Option<Input> {
    // crossterm reports releases on some platforms
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Input::Act(Action::RequestQuit))
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Some(Input::Act(Action::RequestQuit))
        }
        KeyCode::Char('r') | KeyCode::Char('R') if game_over => {
            Some(Input::Act(Action::RequestReset))
        }
        _ if game_over => None,
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Input::Select(cursor.moved(key.code)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Act(Action::PlaceAt {
            row: cursor.row,
            col: cursor.col,
        })),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Some(Input::Act(Action::PlaceAt {
                row: index / GRID_SIZE,
                col: index % GRID_SIZE,
            }))
        }
        _ => None,
    }
}

fn translate_mouse(
    mouse: &MouseEvent,
    layout: Option<&ScreenLayout>,
    game_over: bool,
) -> Option<Input> {
    if game_over || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (row, col) = layout?.cell_at(mouse.column, mouse.row)?;
    Some(Input::Act(Action::PlaceAt { row, col }))
}
