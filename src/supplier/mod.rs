//! Opponent move suppliers.
//!
//! The engine never picks a move itself; a host orchestrates: on a turn
//! change to a non-human side it asks a supplier for a request, then feeds
//! that request to `apply_action`. The trait is the collaborator contract;
//! the implementations here are the engine-side reference choosers - a
//! uniform random fallback and a greedy chooser ranking the annotated
//! candidate list.
//!
//! Suppliers hold their own seeded RNG, so a given seed replays the same
//! game. That determinism leans on `annotate_moves` returning candidates
//! in sorted order.

use crate::analysis::{annotate_moves, AnnotatedMove, Consequence};
use crate::core::{GameRng, GameState};
use crate::rules::MoveRequest;

/// Supplies a move for the side to act.
///
/// Returns `None` when the game is over or the side to move has no legal
/// move. Implementations may be stateful (RNG, learned policy); the state
/// they read is never mutated.
pub trait MoveSupplier {
    fn choose_move(&mut self, state: &GameState) -> Option<MoveRequest>;
}

/// Uniform random choice over the legal moves.
#[derive(Clone, Debug)]
pub struct RandomSupplier {
    rng: GameRng,
}

impl RandomSupplier {
    /// Create a supplier with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveSupplier for RandomSupplier {
    fn choose_move(&mut self, state: &GameState) -> Option<MoveRequest> {
        let player = state.active_player()?;
        let candidates: Vec<MoveRequest> = annotate_moves(state, player)
            .into_iter()
            .map(|e| MoveRequest::new(e.from, e.to))
            .collect();
        self.rng.choose(&candidates).copied()
    }
}

/// Score one annotated candidate. Positive tags outrank the capture-risk
/// penalty so a winning move is taken even into a trade.
fn score(entry: &AnnotatedMove) -> i32 {
    let mut score = 0;
    for tag in entry.consequences.iter() {
        score += match tag {
            Consequence::WinningMove => 100,
            Consequence::KingPromotion => 25,
            Consequence::OpponentBlock => 15,
            Consequence::CaptureOpportunity => 10,
            Consequence::CaptureRisk => -20,
        };
    }
    score
}

/// Greedy chooser over the annotated candidate list: best consequence
/// score wins, random tie-break among equals.
#[derive(Clone, Debug)]
pub struct GreedySupplier {
    rng: GameRng,
}

impl GreedySupplier {
    /// Create a supplier with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveSupplier for GreedySupplier {
    fn choose_move(&mut self, state: &GameState) -> Option<MoveRequest> {
        let player = state.active_player()?;
        let annotated = annotate_moves(state, player);
        let best = annotated.iter().map(score).max()?;
        let top: Vec<MoveRequest> = annotated
            .iter()
            .filter(|e| score(e) == best)
            .map(|e| MoveRequest::new(e.from, e.to))
            .collect();
        self.rng.choose(&top).copied()
    }
}
