//! Legal move enumeration.
//!
//! `legal_moves` is the single query the host and the transition function
//! both rely on: a sparse map from each occupied position of the active
//! side to its legal destinations, fully recomputed per call (correctness
//! over caching at 8x8 scale).
//!
//! ## Mandatory capture
//!
//! If any piece of the queried side has a capture, the map contains only
//! capture moves - for every piece, not just the one a caller may have
//! selected. A mixed map is never returned.
//!
//! ## Capture chains
//!
//! While a multi-capture is underway the map collapses to the chaining
//! piece's captures from its landing square. A man must keep the chain's
//! first row-direction sign; a king may turn freely between jumps.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, GameState, GameStatus, Piece, Player, Position, DIAGONALS};

/// A legal destination for one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Where the piece would land.
    pub target: Position,

    /// Does the move jump (and destroy) at least one opposing piece?
    pub is_capture: bool,
}

/// Sparse association from an occupied position to its legal destinations.
///
/// Keyed by `Position` value equality; pieces with no legal moves
/// contribute no entry.
pub type MoveMap = FxHashMap<Position, SmallVec<[Move; 4]>>;

/// Diagonal directions a piece may move or capture along: both forward
/// diagonals for a man, all four for a king.
fn directions(piece: Piece) -> SmallVec<[(i8, i8); 4]> {
    if piece.is_king {
        SmallVec::from_slice(&DIAGONALS)
    } else {
        let sign = piece.owner.forward_sign();
        SmallVec::from_slice(&[(sign, 1), (sign, -1)])
    }
}

/// Capture moves for the piece at `pos`.
///
/// A capture jumps an adjacent opposing piece onto the empty square
/// directly behind it; kings do not fly past the jumped piece. `chain_sign`
/// is the row-direction lock of an in-progress chain - it binds men only.
pub(crate) fn capture_moves(
    board: &Board,
    pos: Position,
    piece: Piece,
    chain_sign: Option<i8>,
) -> SmallVec<[Move; 4]> {
    let mut moves = SmallVec::new();
    for (dr, dc) in directions(piece) {
        if !piece.is_king {
            if let Some(sign) = chain_sign {
                if dr != sign {
                    continue;
                }
            }
        }
        let jumped = pos.offset(dr, dc);
        let landing = pos.offset(2 * dr, 2 * dc);
        let holds_opponent = board
            .get(jumped)
            .is_some_and(|p| p.owner != piece.owner);
        if holds_opponent && board.is_free(landing) {
            moves.push(Move {
                target: landing,
                is_capture: true,
            });
        }
    }
    moves
}

/// Non-capture moves for the piece at `pos`: a man steps one forward
/// diagonal, a king slides until the board edge or the first occupied cell.
fn quiet_moves(board: &Board, pos: Position, piece: Piece) -> SmallVec<[Move; 4]> {
    let mut moves = SmallVec::new();
    for (dr, dc) in directions(piece) {
        if piece.is_king {
            let mut step = 1;
            loop {
                let target = pos.offset(dr * step, dc * step);
                if !board.is_free(target) {
                    break;
                }
                moves.push(Move {
                    target,
                    is_capture: false,
                });
                step += 1;
            }
        } else {
            let target = pos.offset(dr, dc);
            if board.is_free(target) {
                moves.push(Move {
                    target,
                    is_capture: false,
                });
            }
        }
    }
    moves
}

/// Does `player` have at least one capture available anywhere on `board`?
#[must_use]
pub fn has_capture(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|(pos, piece)| !capture_moves(board, pos, piece, None).is_empty())
}

/// The legal-move map for `player` on `state`.
///
/// Sparse: a piece with no legal moves gets no entry. Querying a finished
/// game is normal generation over the frozen grid.
#[must_use]
pub fn legal_moves(state: &GameState, player: Player) -> MoveMap {
    let board = &state.board;

    // Mid-chain, only the chaining piece may act, and only by capturing.
    if let Some(chain) = state.chain {
        if state.status == GameStatus::Turn(player) {
            let mut map = MoveMap::default();
            if let Some(piece) = board.get(chain.position) {
                let moves = capture_moves(board, chain.position, piece, Some(chain.first_row_sign));
                if !moves.is_empty() {
                    map.insert(chain.position, moves);
                }
            }
            return map;
        }
    }

    let mut captures = MoveMap::default();
    for (pos, piece) in board.pieces_of(player) {
        let moves = capture_moves(board, pos, piece, None);
        if !moves.is_empty() {
            captures.insert(pos, moves);
        }
    }
    if !captures.is_empty() {
        return captures;
    }

    let mut map = MoveMap::default();
    for (pos, piece) in board.pieces_of(player) {
        let moves = quiet_moves(board, pos, piece);
        if !moves.is_empty() {
            map.insert(pos, moves);
        }
    }
    map
}
