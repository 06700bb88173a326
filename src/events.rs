//! Game events: the engine's sole reporting channel.
//!
//! Every call to `apply_action` returns an ordered list of these records;
//! consumers (renderer, audio, opponent-reaction generation) read the list
//! per call. There is no persistent event bus inside the engine, and the
//! order within a batch is a contract:
//!
//! 1. `PieceCaptured` - one per captured piece, in path order
//! 2. `PieceCrowned` - promotion happens before the piece comes to rest
//! 3. `PieceMoved`
//! 4. `TurnChanged`
//! 5. `GameOver`
//!
//! `InvalidMove` is the single error channel (there are no exceptions): it
//! covers out-of-range coordinates, moving an empty cell, moving the
//! opponent's piece, illegal targets, and acting on a finished game.

use serde::{Deserialize, Serialize};

use crate::core::{Piece, PieceId, Player, Position};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameOutcome::Winner(p) if *p == player)
    }
}

/// One record in the per-action event log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The action was rejected; the state is returned unchanged.
    InvalidMove {
        /// The offending request, verbatim.
        from: Position,
        to: Position,
    },

    /// A piece was jumped and destroyed.
    PieceCaptured {
        /// Snapshot of the captured piece.
        piece: Piece,
        /// The cell it was taken from.
        position: Position,
    },

    /// A man reached its crown row and was promoted.
    PieceCrowned { piece_id: PieceId, position: Position },

    /// The moving piece came to rest.
    PieceMoved {
        piece_id: PieceId,
        from: Position,
        to: Position,
    },

    /// The turn passed to the other side.
    ///
    /// Absent when a capture chain continues: the same player must move the
    /// same piece again.
    TurnChanged { player: Player },

    /// The game ended.
    GameOver { outcome: GameOutcome },
}

impl GameEvent {
    /// Is this an `InvalidMove` rejection?
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, GameEvent::InvalidMove { .. })
    }

    /// Is this a `GameOver` record?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::GameOver { .. })
    }
}
