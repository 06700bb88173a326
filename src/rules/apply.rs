//! Action application: the single state-transition entry point.
//!
//! `apply_action` is a total function: it never panics on malformed input
//! and every call yields a fully-formed `Transition`. Illegal requests come
//! back as the unchanged grid plus an `InvalidMove` event - the engine may
//! be driven by an unreliable external chooser, so misuse is answered with
//! events, not exceptions.

use serde::{Deserialize, Serialize};

use crate::core::{CaptureChain, GameState, GameStatus, Player, Position};
use crate::events::{GameEvent, GameOutcome};

use super::movegen::{capture_moves, has_capture, legal_moves};

/// A host-supplied action: move the piece at `from` to `to`.
///
/// Coordinates are taken verbatim; validation happens inside
/// [`apply_action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: Position,
    pub to: Position,
}

impl MoveRequest {
    /// Create a request.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The result of applying an action: the successor state and the ordered
/// event log describing what happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl Transition {
    /// Was the request rejected? The grid is then identical to the input.
    #[must_use]
    pub fn was_rejected(&self) -> bool {
        self.events.first().is_some_and(GameEvent::is_invalid)
    }
}

/// Reject a request, leaving the grid untouched.
///
/// If the rejection reveals that the active player has no legal move at
/// all, the game ends in the opponent's favor (resign on forced pass).
fn rejected(state: &GameState, request: MoveRequest) -> Transition {
    let mut next = state.clone();
    let mut events = vec![GameEvent::InvalidMove {
        from: request.from,
        to: request.to,
    }];

    if let Some(active) = next.active_player() {
        if legal_moves(&next, active).is_empty() {
            next.status = GameStatus::GameOver;
            events.push(GameEvent::GameOver {
                outcome: GameOutcome::Winner(active.opponent()),
            });
        }
    }

    Transition { state: next, events }
}

/// The narrow draw heuristic: both sides down to kings only, three or
/// fewer pieces in total, and neither side has a capture.
fn is_draw(state: &GameState) -> bool {
    state.board.all_kings()
        && state.board.total_count() <= 3
        && !has_capture(&state.board, Player::PlayerOne)
        && !has_capture(&state.board, Player::PlayerTwo)
}

/// Apply `request` to `state`, producing the successor state and its event
/// log.
///
/// Validation rejects, in order: a finished game, off-board coordinates, a
/// `from` cell not holding the active player's piece, and a `to` absent
/// from the mandatory-aware move map. On success the events arrive in
/// batch order: captures (path order), crown, move, turn change, game over.
///
/// When a capture chain continues, the status does not flip and no
/// `TurnChanged` is emitted - the caller re-queries `legal_moves` and
/// prompts the same piece from its landing square.
#[must_use]
pub fn apply_action(state: &GameState, request: MoveRequest) -> Transition {
    let Some(active) = state.active_player() else {
        return rejected(state, request);
    };
    if !request.from.on_board() || !request.to.on_board() {
        return rejected(state, request);
    }
    let piece = match state.board.get(request.from) {
        Some(piece) if piece.owner == active => piece,
        _ => return rejected(state, request),
    };
    let map = legal_moves(state, active);
    let Some(chosen) = map
        .get(&request.from)
        .and_then(|moves| moves.iter().find(|m| m.target == request.to))
    else {
        return rejected(state, request);
    };

    let mut next = state.clone();
    let mut events = Vec::new();

    // Capture everything strictly between `from` and `to`. For a man's
    // jump and a king's jump alike that is the single jumped cell; the
    // walk stays generic over the path length.
    let dr = (request.to.row - request.from.row).signum();
    let dc = (request.to.col - request.from.col).signum();
    let span = (request.to.row - request.from.row).abs();
    let mut captured_any = false;
    for step in 1..span {
        let cell = request.from.offset(dr * step, dc * step);
        if let Some(victim) = next.board.get(cell) {
            if victim.owner != active {
                next.board.take(cell);
                events.push(GameEvent::PieceCaptured {
                    piece: victim,
                    position: cell,
                });
                captured_any = true;
            }
        }
    }
    debug_assert!(captured_any == chosen.is_capture);

    next.board.take(request.from);
    let mut piece = piece;
    if !piece.is_king && request.to.row == active.crown_row() {
        piece.is_king = true;
        events.push(GameEvent::PieceCrowned {
            piece_id: piece.id,
            position: request.to,
        });
    }
    next.board.place(request.to, piece);
    events.push(GameEvent::PieceMoved {
        piece_id: piece.id,
        from: request.from,
        to: request.to,
    });

    // A chain keeps the first jump's row sign; a fresh chain starts here.
    if captured_any {
        let first_row_sign = state
            .chain
            .map_or(dr, |chain| chain.first_row_sign);
        let continuation = capture_moves(&next.board, request.to, piece, Some(first_row_sign));
        if !continuation.is_empty() {
            next.chain = Some(CaptureChain {
                position: request.to,
                first_row_sign,
            });
            return Transition { state: next, events };
        }
    }
    next.chain = None;

    let opponent = active.opponent();
    next.status = GameStatus::Turn(opponent);
    events.push(GameEvent::TurnChanged { player: opponent });

    if !next.board.has_pieces(opponent) {
        next.status = GameStatus::GameOver;
        events.push(GameEvent::GameOver {
            outcome: GameOutcome::Winner(active),
        });
    } else if legal_moves(&next, opponent).is_empty() {
        next.status = GameStatus::GameOver;
        events.push(GameEvent::GameOver {
            outcome: GameOutcome::Winner(active),
        });
    } else if is_draw(&next) {
        next.status = GameStatus::GameOver;
        events.push(GameEvent::GameOver {
            outcome: GameOutcome::Draw,
        });
    }

    Transition { state: next, events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn p(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_opening_move() {
        let state = GameState::new();
        let id = state.board.get(p(2, 1)).unwrap().id;

        let t = apply_action(&state, MoveRequest::new(p(2, 1), p(3, 2)));

        assert!(!t.was_rejected());
        assert_eq!(
            t.events,
            vec![
                GameEvent::PieceMoved {
                    piece_id: id,
                    from: p(2, 1),
                    to: p(3, 2)
                },
                GameEvent::TurnChanged {
                    player: Player::PlayerTwo
                },
            ]
        );
        assert_eq!(t.state.board.get(p(2, 1)), None);
        assert_eq!(t.state.board.get(p(3, 2)).unwrap().id, id);
        assert_eq!(t.state.active_player(), Some(Player::PlayerTwo));
    }

    #[test]
    fn test_single_capture() {
        let mut state = GameState::empty(Player::PlayerOne);
        state.add_piece(p(2, 2), Player::PlayerOne, false);
        let victim_id = {
            let id = state.add_piece(p(3, 3), Player::PlayerTwo, false);
            state.add_piece(p(6, 1), Player::PlayerTwo, false);
            id
        };

        let t = apply_action(&state, MoveRequest::new(p(2, 2), p(4, 4)));

        assert!(!t.was_rejected());
        match &t.events[0] {
            GameEvent::PieceCaptured { piece, position } => {
                assert_eq!(piece.id, victim_id);
                assert_eq!(*position, p(3, 3));
            }
            other => panic!("expected capture first, got {:?}", other),
        }
        assert!(matches!(t.events[1], GameEvent::PieceMoved { .. }));
        assert_eq!(t.state.board.get(p(3, 3)), None);
        assert_eq!(t.state.board.count(Player::PlayerTwo), 1);
    }

    #[test]
    fn test_invalid_requests_leave_grid_untouched() {
        let state = GameState::new();
        let requests = [
            // Off-board.
            MoveRequest::new(p(-1, 2), p(0, 1)),
            MoveRequest::new(p(2, 1), p(8, 8)),
            // Empty cell.
            MoveRequest::new(p(4, 3), p(5, 4)),
            // Opponent's piece.
            MoveRequest::new(p(5, 2), p(4, 1)),
            // Not a legal target.
            MoveRequest::new(p(2, 1), p(4, 1)),
        ];

        for request in requests {
            let t = apply_action(&state, request);
            assert!(t.was_rejected(), "request {} should be rejected", request);
            assert_eq!(t.state.board, state.board);
            assert_eq!(
                t.events[0],
                GameEvent::InvalidMove {
                    from: request.from,
                    to: request.to
                }
            );
        }
    }

    #[test]
    fn test_rejected_after_game_over() {
        let mut state = GameState::new();
        state.status = GameStatus::GameOver;

        let t = apply_action(&state, MoveRequest::new(p(2, 1), p(3, 2)));
        assert!(t.was_rejected());
        assert_eq!(t.events.len(), 1);
        assert_eq!(t.state.board, state.board);
    }

    #[test]
    fn test_mandatory_capture_rejects_quiet_move() {
        let mut state = GameState::empty(Player::PlayerOne);
        state.add_piece(p(2, 2), Player::PlayerOne, false);
        state.add_piece(p(3, 3), Player::PlayerTwo, false);
        state.add_piece(p(5, 6), Player::PlayerTwo, false);

        let t = apply_action(&state, MoveRequest::new(p(2, 2), p(3, 1)));
        assert!(t.was_rejected());
    }

    #[test]
    fn test_promotion_on_crown_row() {
        let mut state = GameState::empty(Player::PlayerOne);
        let id = state.add_piece(p(6, 5), Player::PlayerOne, false);
        state.add_piece(p(1, 0), Player::PlayerTwo, false);

        let t = apply_action(&state, MoveRequest::new(p(6, 5), p(7, 6)));

        assert_eq!(
            t.events[0],
            GameEvent::PieceCrowned {
                piece_id: id,
                position: p(7, 6)
            }
        );
        assert!(matches!(t.events[1], GameEvent::PieceMoved { .. }));
        assert!(t.state.board.get(p(7, 6)).unwrap().is_king);
    }

    #[test]
    fn test_crown_is_irreversible_across_turns() {
        let mut state = GameState::empty(Player::PlayerTwo);
        state.add_piece(p(1, 2), Player::PlayerTwo, false);
        state.add_piece(p(4, 5), Player::PlayerOne, false);

        let t = apply_action(&state, MoveRequest::new(p(1, 2), p(0, 1)));
        assert!(t.state.board.get(p(0, 1)).unwrap().is_king);

        let t2 = apply_action(&t.state, MoveRequest::new(p(4, 5), p(5, 6)));
        assert!(t2.state.board.get(p(0, 1)).unwrap().is_king);
    }
}
