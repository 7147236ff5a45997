//! Core domain types for noughts and crosses.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const GRID_SIZE: usize = 3;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player A, plays crosses and moves first.
    X,
    /// Player B, plays noughts.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player leaves on the board.
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Occupant of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Claimed by [`Player::X`].
    X,
    /// Claimed by [`Player::O`].
    O,
}

impl Mark {
    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// True for [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

/// 3x3 board stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    ///
    /// No legality check is made, so boards unreachable in play (two winning
    /// lines, unbalanced mark counts) can be constructed for analysis.
    #[instrument]
    pub fn from_rows(cells: [[Mark; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the mark at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks whether `(row, col)` is on the board and still empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Mark::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Mark; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Iterates over every cell as `(row, col, mark)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Mark)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, marks)| {
            marks
                .iter()
                .enumerate()
                .map(move |(col, mark)| (row, col, *mark))
        })
    }

    /// Writes a mark. Callers check bounds and occupancy first.
    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as text, numbering empty cells 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, marks) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (col, mark) in marks.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match mark.player() {
                    Some(player) => write!(f, "{}", player)?,
                    None => write!(f, "{}", row * GRID_SIZE + col + 1)?,
                }
            }
        }
        Ok(())
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board filled up with no line.
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} Wins!", player),
            GameStatus::Draw => write!(f, "It's a Tie!"),
        }
    }
}
