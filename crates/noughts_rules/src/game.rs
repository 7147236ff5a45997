//! The game state machine.

use crate::action::{Action, Dispatched, MoveError, MoveOutcome};
use crate::rules::{self, WinningLine};
use crate::types::{Board, GRID_SIZE, GameStatus, Mark, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Board, turn and status of a single game.
///
/// The only mutators are [`GameState::apply_move`] and [`GameState::reset`].
/// Once the status is terminal every move is rejected until a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark at `(row, col)`, or `None` off the board.
    pub fn mark(&self, row: usize, col: usize) -> Option<Mark> {
        self.board.get(row, col)
    }

    /// Returns the player whose move is accepted next.
    ///
    /// After a win this is still the winner, since the turn only flips while
    /// the game continues.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Checks run in order: game over, bounds, occupancy. A rejected move
    /// leaves the state untouched.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            debug!(status = %self.status, "Move rejected, game over");
            return Err(MoveError::GameAlreadyOver);
        }

        if row >= GRID_SIZE || col >= GRID_SIZE {
            warn!("Move rejected, out of bounds");
            return Err(MoveError::OutOfBounds { row, col });
        }

        if !self.board.is_empty(row, col) {
            debug!("Move rejected, cell occupied");
            return Err(MoveError::CellOccupied { row, col });
        }

        self.board.set(row, col, self.turn.mark());
        let changed = self.update_status();

        info!(status = %self.status, next = %self.turn, "Move applied");
        Ok(MoveOutcome {
            status: self.status,
            changed,
        })
    }

    /// Evaluates the board after a placement. Win before draw, and the turn
    /// only flips while the game is still running.
    ///
    /// Returns true if the game just ended.
    fn update_status(&mut self) -> bool {
        if let Some(winner) = self.check_winner() {
            self.status = GameStatus::Won(winner);
        } else if self.is_board_full() {
            self.status = GameStatus::Draw;
        } else {
            self.turn = self.turn.opponent();
            return false;
        }
        info!(status = %self.status, "Game over");
        true
    }

    /// Returns the owner of the first completed line, if any.
    pub fn check_winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Returns the first completed line and its owner, for highlighting.
    pub fn winning_line(&self) -> Option<(WinningLine, Player)> {
        rules::winning_line(&self.board)
    }

    /// True when every cell is marked.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Lists the empty cells in row-major order. Empty once the game is over.
    pub fn open_cells(&self) -> Vec<(usize, usize)> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.board
            .iter()
            .filter(|(_, _, mark)| mark.is_empty())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Throws the current game away and starts again from scratch.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Maps an event-loop action onto the matching engine operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<Dispatched, MoveError> {
        match action {
            Action::PlaceAt { row, col } => self.apply_move(row, col).map(Dispatched::Moved),
            Action::RequestReset => {
                self.reset();
                Ok(Dispatched::Reset)
            }
            Action::RequestQuit => Ok(Dispatched::Quit),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
