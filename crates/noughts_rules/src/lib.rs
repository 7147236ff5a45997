//! Noughts and crosses rules engine.
//!
//! A pure, synchronous state machine for the 3x3 game. It validates moves,
//! tracks whose turn it is and detects wins and draws. Rendering and input
//! live elsewhere and only talk to it through [`GameState`] and [`Action`].
//!
//! # Example
//!
//! ```
//! use noughts_rules::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     game.apply_move(row, col).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod rules;
mod types;

pub use action::{Action, Dispatched, MoveError, MoveOutcome};
pub use game::GameState;
pub use rules::WinningLine;
pub use types::{Board, GRID_SIZE, GameStatus, Mark, Player};
