//! Saved games.
//!
//! A `GameSave` holds the board snapshot, each side's name and capture
//! tally, the side to move, and whether the game has ended. The pass
//! counter is not saved; a restored game starts counting from zero.

use serde::{Deserialize, Serialize};

use super::state::Game;
use crate::board::{Board, BoardSnapshot};
use crate::core::{ColorMap, Player, StoneColor};
use crate::error::Result;
use crate::rules::Ruleset;

/// Per-player part of a save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Display name.
    pub name: String,
    /// Opponent stones captured so far.
    pub captured_stones: u32,
}

/// Serializable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSave {
    /// Board layout.
    pub board: BoardSnapshot,
    /// Keyed `BLACK` / `WHITE`.
    pub players: ColorMap<PlayerRecord>,
    /// Side to move.
    pub current_turn: StoneColor,
    /// Whether the game had ended.
    pub is_game_ended: bool,
}

impl GameSave {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode JSON produced by `to_json`.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

impl<R: Ruleset> Game<R> {
    /// Capture the persistent state of this game.
    #[must_use]
    pub fn save_state(&self) -> GameSave {
        GameSave {
            board: self.board.snapshot(),
            players: self.players.map(|p| PlayerRecord {
                name: p.name.clone(),
                captured_stones: p.captured_stones,
            }),
            current_turn: self.current_turn,
            is_game_ended: self.ended,
        }
    }

    /// Rebuild a game from a save.
    ///
    /// Fails if the board snapshot is malformed. A save of an ended game
    /// is re-scored under `rules`.
    pub fn restore(save: GameSave, rules: R) -> Result<Self> {
        let board = Board::try_from(save.board)?;
        let players = ColorMap::new(|color| {
            let record = &save.players[color];
            Player {
                name: record.name.clone(),
                color,
                captured_stones: record.captured_stones,
            }
        });

        let mut game = Game::from_parts(board, players, save.current_turn, rules);
        if save.is_game_ended {
            game.end_game();
        }
        Ok(game)
    }
}
