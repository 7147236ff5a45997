//! Headless play: apply a list of moves and report the result.

use anyhow::{Context, Result};
use noughts_rules::{GameState, GameStatus};
use tracing::{info, instrument};

/// Plays `moves` in order on a fresh game, stopping at the first rejection.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[(usize, usize)]) -> Result<GameState> {
    let mut game = GameState::new();
    for (index, &(row, col)) in moves.iter().enumerate() {
        game.apply_move(row, col)
            .with_context(|| format!("Move {} at ({}, {}) rejected", index + 1, row, col))?;
    }
    info!(status = %game.status(), "Replay finished");
    Ok(game)
}

/// Formats the game for the terminal, or as pretty JSON.
pub fn report(game: &GameState, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(game).context("Failed to serialize game state");
    }

    let status = match game.status() {
        GameStatus::InProgress => format!("Current Player: {}", game.turn()),
        finished => finished.to_string(),
    };
    Ok(format!("{}\n\n{}", game.board(), status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_rules::{MoveError, Player};

    #[test]
    fn test_replay_win() {
        let game = replay(&[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(
            report(&game, false).unwrap(),
            "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nPlayer X Wins!"
        );
    }

    #[test]
    fn test_replay_in_progress() {
        let game = replay(&[(1, 1)]).unwrap();
        assert!(report(&game, false).unwrap().ends_with("Current Player: O"));
    }

    #[test]
    fn test_replay_stops_on_rejection() {
        let err = replay(&[(0, 0), (0, 0)]).unwrap_err();
        assert_eq!(err.to_string(), "Move 2 at (0, 0) rejected");
        assert_eq!(
            err.downcast_ref::<MoveError>(),
            Some(&MoveError::CellOccupied { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_report_json() {
        let game = replay(&[(2, 2)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report(&game, true).unwrap()).unwrap();
        assert_eq!(value["board"]["cells"][2][2], "X");
        assert_eq!(value["turn"], "O");
    }
}
