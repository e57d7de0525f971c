//! The match state machine.
//!
//! A `Game` moves one way from in-progress to ended. It ends after two
//! consecutive passes, or when the ruleset reports the board itself as
//! finished after any move. Rule violations come back as `MoveError`
//! values; nothing here panics on bad play.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::board::Board;
use crate::core::{ColorMap, GameConfig, Move, Player, Position, StoneColor};
use crate::rules::{AreaScoring, GameResult, Ruleset, ScoreResult};

/// Passes in a row that end the game.
pub const PASSES_TO_END: u8 = 2;

/// Outcome codes reported to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageCode {
    /// The game is over; no more moves.
    GameAlreadyEnded,
    /// The move's color is not the side to play.
    NotYourTurn,
    /// The cell is off the board, occupied, or the move is suicide.
    YouCantPlaceStoneOnThisPosition,
    /// The move was accepted.
    StonePlaced,
}

impl MessageCode {
    /// Wire form of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageCode::GameAlreadyEnded => "GAME_ALREADY_ENDED",
            MessageCode::NotYourTurn => "NOT_YOUR_TURN",
            MessageCode::YouCantPlaceStoneOnThisPosition => "YOU_CANT_PLACE_STONE_ON_THIS_POSITION",
            MessageCode::StonePlaced => "STONE_PLACED",
        }
    }
}

impl std::fmt::Display for MessageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum MoveError {
    /// The game has already ended.
    #[error("game already ended")]
    GameAlreadyEnded,
    /// It is the other color's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// The rules forbid a stone there.
    #[error("you can't place a stone on this position")]
    IllegalPosition,
}

impl MoveError {
    /// Outcome code for this rejection.
    #[must_use]
    pub const fn code(self) -> MessageCode {
        match self {
            MoveError::GameAlreadyEnded => MessageCode::GameAlreadyEnded,
            MoveError::NotYourTurn => MessageCode::NotYourTurn,
            MoveError::IllegalPosition => MessageCode::YouCantPlaceStoneOnThisPosition,
        }
    }
}

/// An accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The move as played.
    pub mv: Move,
    /// Enemy stones removed by it, row-major.
    pub captured: Vec<Position>,
}

impl Placement {
    /// Always `STONE_PLACED`.
    #[must_use]
    pub const fn code(&self) -> MessageCode {
        MessageCode::StonePlaced
    }
}

/// Observable match status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    /// The game has ended.
    pub is_game_ended: bool,
    /// Passes since the last placed stone.
    pub consecutive_passes: u8,
    /// Set once the game has ended.
    pub winner: Option<GameResult>,
    /// Set once the game has ended.
    pub score: Option<ScoreResult>,
}

/// A single match between black and white.
///
/// ## Example
///
/// ```
/// use go_rules::core::{GameConfig, Move, StoneColor};
/// use go_rules::game::Game;
///
/// let mut game = Game::new(&GameConfig::default().with_board_size(9));
/// game.make_move(Move::at(StoneColor::Black, 2, 2)).unwrap();
/// assert_eq!(game.current_turn(), StoneColor::White);
///
/// game.pass();
/// game.pass();
/// assert!(game.is_ended());
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = AreaScoring> {
    pub(super) board: Board,
    pub(super) players: ColorMap<Player>,
    pub(super) current_turn: StoneColor,
    pub(super) rules: R,
    pub(super) ended: bool,
    pub(super) consecutive_passes: u8,
    pub(super) result: Option<GameResult>,
    pub(super) score: Option<ScoreResult>,
}

impl Game<AreaScoring> {
    /// Start a match under area scoring with the standard komi.
    ///
    /// # Panics
    ///
    /// Panics if `config.board_size` is zero.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rules(config, AreaScoring::default())
    }
}

impl<R: Ruleset> Game<R> {
    /// Start a match under the given ruleset.
    ///
    /// # Panics
    ///
    /// Panics if `config.board_size` is zero.
    pub fn with_rules(config: &GameConfig, rules: R) -> Self {
        Self::from_parts(Board::new(config.board_size), config.players(), StoneColor::Black, rules)
    }

    /// Assemble a fresh, in-progress game around an existing position.
    pub(super) fn from_parts(
        board: Board,
        players: ColorMap<Player>,
        current_turn: StoneColor,
        rules: R,
    ) -> Self {
        Self {
            board,
            players,
            current_turn,
            rules,
            ended: false,
            consecutive_passes: 0,
            result: None,
            score: None,
        }
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &ColorMap<Player> {
        &self.players
    }

    /// One player.
    #[must_use]
    pub fn player(&self, color: StoneColor) -> &Player {
        &self.players[color]
    }

    /// The side to play.
    #[must_use]
    pub fn current_turn(&self) -> StoneColor {
        self.current_turn
    }

    /// The active ruleset.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Passes since the last placed stone.
    #[must_use]
    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    /// Winner or tie, once ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Final score, once ended.
    #[must_use]
    pub fn score(&self) -> Option<&ScoreResult> {
        self.score.as_ref()
    }

    /// Snapshot of the match status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            is_game_ended: self.ended,
            consecutive_passes: self.consecutive_passes,
            winner: self.result,
            score: self.score.clone(),
        }
    }

    // === Play ===

    /// Place a stone.
    ///
    /// On success the stone is on the board, captured enemy stones are
    /// removed and credited to the mover, and the turn passes.
    pub fn make_move(&mut self, mv: Move) -> Result<Placement, MoveError> {
        if self.ended {
            return Err(MoveError::GameAlreadyEnded);
        }
        if mv.color != self.current_turn {
            return Err(MoveError::NotYourTurn);
        }
        if !self.rules.can_place_stone(&self.board, &mv) {
            debug!(color = %mv.color, position = %mv.position, "illegal placement rejected");
            return Err(MoveError::IllegalPosition);
        }

        self.consecutive_passes = 0;
        self.board.place_stone(mv.position, mv.color);

        let captured = self.rules.captured_groups(&self.board, &mv);
        for &pos in &captured {
            self.board.remove_stone(pos);
            self.players[mv.color].captured_stones += 1;
        }
        debug!(
            color = %mv.color,
            position = %mv.position,
            captured = captured.len(),
            "stone placed"
        );

        self.switch_turn();
        self.check_game_end();

        Ok(Placement { mv, captured })
    }

    /// Place a stone for the side to play.
    pub fn play(&mut self, position: Position) -> Result<Placement, MoveError> {
        self.make_move(Move::new(self.current_turn, position))
    }

    /// Decline to place a stone. No-op once the game has ended.
    pub fn pass(&mut self) {
        if self.ended {
            return;
        }

        self.consecutive_passes += 1;
        debug!(color = %self.current_turn, passes = self.consecutive_passes, "pass");
        self.switch_turn();
        self.check_game_end();
    }

    /// End the game and score it. Later calls do nothing.
    pub fn end_game(&mut self) {
        if self.ended {
            return;
        }

        let score = self.rules.calculate_score(&self.board, &self.players);
        let result = score.result();
        info!(
            black = score[StoneColor::Black],
            white = score[StoneColor::White],
            %result,
            "game ended"
        );

        self.ended = true;
        self.result = Some(result);
        self.score = Some(score);
    }

    fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    fn check_game_end(&mut self) {
        if self.consecutive_passes >= PASSES_TO_END || self.rules.is_game_over(&self.board) {
            self.end_game();
        }
    }
}
