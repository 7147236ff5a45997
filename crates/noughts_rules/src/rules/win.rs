//! Win detection logic.

use crate::{Board, Mark, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines that wins the game when uniformly marked.
///
/// Declaration order is the scan order used by [`winning_line`]: rows
/// top-to-bottom, columns left-to-right, then the main and anti diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum WinningLine {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0), (1,1), (2,2).
    MainDiagonal,
    /// (2,0), (1,1), (0,2).
    AntiDiagonal,
}

impl WinningLine {
    /// The three `(row, col)` cells making up this line.
    pub fn cells(self) -> [(usize, usize); 3] {
        match self {
            WinningLine::TopRow => [(0, 0), (0, 1), (0, 2)],
            WinningLine::MiddleRow => [(1, 0), (1, 1), (1, 2)],
            WinningLine::BottomRow => [(2, 0), (2, 1), (2, 2)],
            WinningLine::LeftColumn => [(0, 0), (1, 0), (2, 0)],
            WinningLine::CenterColumn => [(0, 1), (1, 1), (2, 1)],
            WinningLine::RightColumn => [(0, 2), (1, 2), (2, 2)],
            WinningLine::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            WinningLine::AntiDiagonal => [(2, 0), (1, 1), (0, 2)],
        }
    }

    /// Checks whether `(row, col)` lies on this line.
    pub fn contains(self, row: usize, col: usize) -> bool {
        self.cells().contains(&(row, col))
    }

    /// Returns the player holding all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells().map(|(row, col)| board.get(row, col));
        match (a, b, c) {
            (Some(first), Some(second), Some(third))
                if first != Mark::Empty && first == second && second == third =>
            {
                first.player()
            }
            _ => None,
        }
    }
}

/// Finds the first completed line in scan order.
///
/// A legal game never has more than one completed line, but a constructed
/// board can; the fixed scan order keeps the answer deterministic.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(WinningLine, Player)> {
    WinningLine::iter().find_map(|line| line.owner(board).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}
