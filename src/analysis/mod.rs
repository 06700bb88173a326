//! Move consequence analysis.
//!
//! A read-only classifier for candidate moves: each candidate is applied
//! speculatively against a scratch copy of the state, the before/after
//! capture pictures for both sides are diffed, and the move is tagged. The
//! tags exist to feed a human-readable candidate summary to an external
//! move chooser; nothing here mutates the live game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameState, Player, Position};
use crate::events::GameEvent;
use crate::rules::{apply_action, has_capture, legal_moves, MoveRequest};

/// A tag describing what a candidate move would lead to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Consequence {
    /// The opponent would have a capture available afterwards.
    CaptureRisk,
    /// The mover would have a capture available afterwards.
    CaptureOpportunity,
    /// The opponent had a capture and this move takes it away.
    OpponentBlock,
    /// The move promotes the moving man to a king.
    KingPromotion,
    /// The move ends the game with the mover as winner.
    WinningMove,
}

impl std::fmt::Display for Consequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Consequence::CaptureRisk => "exposes a piece to capture",
            Consequence::CaptureOpportunity => "opens a capture",
            Consequence::OpponentBlock => "blocks the opponent's capture",
            Consequence::KingPromotion => "promotes to a king",
            Consequence::WinningMove => "wins the game",
        };
        f.write_str(text)
    }
}

/// The set of tags attached to one candidate move.
///
/// Small and ordered (classification order), with set-style lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsequenceSet {
    tags: SmallVec<[Consequence; 5]>,
}

impl ConsequenceSet {
    /// The empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, tag: Consequence) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Does the set contain `tag`?
    #[must_use]
    pub fn contains(&self, tag: Consequence) -> bool {
        self.tags.contains(&tag)
    }

    /// No tags at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterate over the tags in classification order.
    pub fn iter(&self) -> impl Iterator<Item = Consequence> + '_ {
        self.tags.iter().copied()
    }

    /// Human-readable summary, e.g. `"opens a capture, promotes to a king"`.
    /// Empty string for the empty set.
    #[must_use]
    pub fn summary(&self) -> String {
        self.tags
            .iter()
            .map(Consequence::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A candidate move annotated for an external chooser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedMove {
    pub from: Position,
    pub to: Position,
    pub is_capture: bool,
    pub consequences: ConsequenceSet,
}

/// Classify what `request` would lead to, without touching `state`.
///
/// Applies the request against a scratch copy via the real transition
/// function, so the classification sees exactly what live play would see
/// (promotion, chain continuation, game end). An invalid request yields
/// the empty set.
#[must_use]
pub fn analyze_consequences(state: &GameState, request: MoveRequest) -> ConsequenceSet {
    let mut set = ConsequenceSet::new();
    let Some(mover) = state.active_player() else {
        return set;
    };
    let opponent = mover.opponent();
    let opponent_had_capture = has_capture(&state.board, opponent);

    let transition = apply_action(state, request);
    if transition.was_rejected() {
        return set;
    }
    let after = &transition.state.board;

    if has_capture(after, opponent) {
        set.push(Consequence::CaptureRisk);
    }
    if has_capture(after, mover) {
        set.push(Consequence::CaptureOpportunity);
    }
    if opponent_had_capture && !has_capture(after, opponent) {
        set.push(Consequence::OpponentBlock);
    }
    if transition
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::PieceCrowned { .. }))
    {
        set.push(Consequence::KingPromotion);
    }
    if transition
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::GameOver { outcome } if outcome.is_winner(mover)))
    {
        set.push(Consequence::WinningMove);
    }

    set
}

/// Annotate every legal move of `player` on `state`.
///
/// Entries are sorted by `(from, to)` so the list is deterministic - the
/// map itself has no iteration order. This is the list a host-level
/// chooser (heuristic or external) selects from.
#[must_use]
pub fn annotate_moves(state: &GameState, player: Player) -> Vec<AnnotatedMove> {
    let mut entries = Vec::new();
    for (from, moves) in legal_moves(state, player) {
        for m in moves {
            entries.push(AnnotatedMove {
                from,
                to: m.target,
                is_capture: m.is_capture,
                consequences: analyze_consequences(state, MoveRequest::new(from, m.target)),
            });
        }
    }
    entries.sort_by_key(|e| (e.from.row, e.from.col, e.to.row, e.to.col));
    entries
}
