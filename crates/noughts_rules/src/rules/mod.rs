//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from [`GameState`](crate::GameState) so they can be applied to any
//! board, including ones constructed outside of play.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, check_winner, winning_line};
