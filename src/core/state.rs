//! Game state: the immutable snapshot a host holds between transitions.
//!
//! ## GameStatus
//!
//! Doubles as "whose turn" and terminal marker, per the state machine
//! `Turn(PlayerOne) ⇄ Turn(PlayerTwo) → GameOver`. Continuing a multi-capture
//! is a self-loop: the status does not flip.
//!
//! ## Snapshots
//!
//! `GameState` is never mutated in place by the engine. `apply_action` clones
//! the state (O(1) for the grid via `im`) and returns a new value; the caller
//! owns the single current-state value. The winner of a finished game is not
//! stored here - it is communicated only through the emitted events.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::piece::{Piece, PieceId, Player};
use super::position::Position;

/// Whose turn it is, or terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The named side is to move.
    Turn(Player),
    /// Terminal; no further actions are accepted.
    GameOver,
}

impl GameStatus {
    /// The side to move, unless the game is over.
    #[must_use]
    pub const fn active_player(self) -> Option<Player> {
        match self {
            GameStatus::Turn(player) => Some(player),
            GameStatus::GameOver => None,
        }
    }

    /// Is the game over?
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::GameOver)
    }
}

/// An in-progress multi-capture.
///
/// Recorded on the state between the jumps of a chain: the same player must
/// continue moving the piece at `position`. `first_row_sign` is the row
/// direction of the chain's first jump - a man may not reverse it mid-chain,
/// a king ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureChain {
    /// Where the chaining piece currently stands.
    pub position: Position,

    /// Row-direction sign of the chain's first jump.
    pub first_row_sign: i8,
}

/// A complete game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The grid.
    pub board: Board,

    /// Turn / terminal marker.
    pub status: GameStatus,

    /// Multi-capture lock, when a chain is underway.
    pub(crate) chain: Option<CaptureChain>,

    /// Next piece identity to allocate. Ids are never reused.
    next_piece_id: u32,
}

impl GameState {
    /// The fixed starting position: rows 0-2 dark squares hold `PlayerOne`
    /// men, rows 5-7 dark squares hold `PlayerTwo` men, `PlayerOne` to move.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self::empty(Player::PlayerOne);
        for row in 0..3 {
            for col in 0..8 {
                let pos = Position::new(row, col);
                if pos.is_dark() {
                    state.add_piece(pos, Player::PlayerOne, false);
                }
            }
        }
        for row in 5..8 {
            for col in 0..8 {
                let pos = Position::new(row, col);
                if pos.is_dark() {
                    state.add_piece(pos, Player::PlayerTwo, false);
                }
            }
        }
        state
    }

    /// An empty board with the given side to move. Scenario setup entry
    /// point; add pieces with [`GameState::add_piece`].
    #[must_use]
    pub fn empty(active: Player) -> Self {
        Self {
            board: Board::empty(),
            status: GameStatus::Turn(active),
            chain: None,
            next_piece_id: 0,
        }
    }

    /// Place a freshly-allocated piece. Returns its identity.
    pub fn add_piece(&mut self, pos: Position, owner: Player, is_king: bool) -> PieceId {
        let id = PieceId::new(self.next_piece_id);
        self.next_piece_id += 1;
        let piece = if is_king {
            Piece::king(id, owner)
        } else {
            Piece::man(id, owner)
        };
        self.board.place(pos, piece);
        id
    }

    /// The side to move, unless the game is over.
    #[must_use]
    pub fn active_player(&self) -> Option<Player> {
        self.status.active_player()
    }

    /// The multi-capture lock, when the active player is mid-chain.
    #[must_use]
    pub fn capture_chain(&self) -> Option<CaptureChain> {
        self.chain
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
