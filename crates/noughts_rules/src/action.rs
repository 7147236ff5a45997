//! Actions fed to the engine and the results it hands back.
//!
//! The event loop never touches the board directly. It translates input into
//! an [`Action`] and lets [`GameState::dispatch`](crate::GameState::dispatch)
//! map it onto exactly one engine operation.

use crate::GameStatus;
use serde::{Deserialize, Serialize};

/// A discrete request coming from the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the current player's mark at `(row, col)`.
    PlaceAt {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Start a fresh game.
    RequestReset,
    /// Leave the program.
    RequestQuit,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceAt { row, col } => write!(f, "place at ({}, {})", row, col),
            Action::RequestReset => write!(f, "reset"),
            Action::RequestQuit => write!(f, "quit"),
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Status after the move.
    pub status: GameStatus,
    /// True when the move ended the game.
    pub changed: bool,
}

/// What [`GameState::dispatch`](crate::GameState::dispatch) did with an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// A mark was placed.
    Moved(MoveOutcome),
    /// The game was reset to its initial state.
    Reset,
    /// The caller should shut down. The game is left untouched.
    Quit,
}

/// Reason a move was rejected. The game state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Row of the rejected move.
        row: usize,
        /// Column of the rejected move.
        col: usize,
    },

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The coordinates are outside the 3x3 board.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
