//! Replaying a recorded move sequence.
//!
//! Tokens are whitespace-separated: `pass` or a coordinate such as `D4`.
//! Each coordinate is played for whichever color is to move.
//!
//! Replay is not transactional. Tokens before a failing one stay applied;
//! clone the game first if you need all-or-nothing.

use tracing::warn;

use super::state::Game;
use crate::core::Move;
use crate::error::{GameError, Result};
use crate::notation::MoveToken;
use crate::rules::Ruleset;

impl<R: Ruleset> Game<R> {
    /// Apply every token in `moves` in order.
    ///
    /// Stops at the first malformed token, off-board coordinate, or
    /// rejected move.
    pub fn replay(&mut self, moves: &str) -> Result<()> {
        for token in moves.split_whitespace() {
            self.replay_token(token).inspect_err(|err| {
                warn!(token, error = %err, "replay aborted");
            })?;
        }
        Ok(())
    }

    fn replay_token(&mut self, token: &str) -> Result<()> {
        let coordinate = match token.parse::<MoveToken>()? {
            MoveToken::Pass => {
                self.pass();
                return Ok(());
            }
            MoveToken::Place(coordinate) => coordinate,
        };

        let position = coordinate.to_position();
        if !self.board().is_on_board(position) {
            return Err(GameError::CoordinateOutOfRange {
                token: token.to_string(),
                x: position.x,
                y: position.y,
            });
        }

        self.make_move(Move::new(self.current_turn(), position))
            .map(|_| ())
            .map_err(|reason| GameError::MoveRejected {
                token: token.to_string(),
                reason,
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{GameConfig, Position, StoneColor};
    use crate::error::GameError;
    use crate::game::{Game, MoveError};

    fn game(size: usize) -> Game {
        Game::new(&GameConfig::default().with_board_size(size))
    }

    #[test]
    fn test_replay_alternates_colors() {
        let mut game = game(9);
        game.replay("D4 E5 pass C3").unwrap();

        assert_eq!(game.board().stone_color(Position::new(3, 3)), Some(StoneColor::Black));
        assert_eq!(game.board().stone_color(Position::new(4, 4)), Some(StoneColor::White));
        // Black passed, so white played C3
        assert_eq!(game.board().stone_color(Position::new(2, 2)), Some(StoneColor::White));
        assert_eq!(game.current_turn(), StoneColor::Black);
    }

    #[test]
    fn test_replay_handles_extra_whitespace_and_case() {
        let mut game = game(9);
        game.replay("  a1 \n\t PASS  b2  ").unwrap();

        assert_eq!(game.board().stone_color(Position::new(0, 0)), Some(StoneColor::Black));
        assert_eq!(game.board().stone_color(Position::new(1, 1)), Some(StoneColor::Black));
    }

    #[test]
    fn test_replay_empty_is_noop() {
        let mut game = game(9);
        game.replay("   ").unwrap();
        assert_eq!(game.board().empty_count(), 81);
        assert_eq!(game.current_turn(), StoneColor::Black);
    }

    #[test]
    fn test_replay_two_passes_ends_game() {
        let mut game = game(9);
        game.replay("pass pass").unwrap();
        assert!(game.is_ended());
    }

    #[test]
    fn test_malformed_token_aborts() {
        let mut game = game(9);
        let err = game.replay("A1 1A B2").unwrap_err();

        assert!(matches!(err, GameError::InvalidNotation(ref t) if t == "1A"));
        // A1 stays applied, B2 never ran
        assert_eq!(game.board().stone_color(Position::new(0, 0)), Some(StoneColor::Black));
        assert_eq!(game.board().stone_color(Position::new(1, 1)), None);
    }

    #[test]
    fn test_out_of_range_aborts() {
        let mut game = game(9);
        let err = game.replay("A1 J10").unwrap_err();

        match err {
            GameError::CoordinateOutOfRange { token, x, y } => {
                assert_eq!(token, "J10");
                assert_eq!((x, y), (9, 9));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(game.current_turn(), StoneColor::White);
    }

    #[test]
    fn test_illegal_move_aborts() {
        let mut game = game(9);
        let err = game.replay("A1 A1").unwrap_err();

        assert!(matches!(
            err,
            GameError::MoveRejected { reason: MoveError::IllegalPosition, .. }
        ));
        assert!(err.to_string().contains("\"A1\""));
    }

    #[test]
    fn test_replay_after_end_is_rejected() {
        let mut game = game(9);
        let err = game.replay("pass pass D4").unwrap_err();

        assert!(matches!(
            err,
            GameError::MoveRejected { reason: MoveError::GameAlreadyEnded, .. }
        ));
    }
}
