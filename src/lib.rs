//! # rust-draughts
//!
//! A checkers (draughts) rules engine: movement, mandatory multi-capture
//! sequences, king promotion, turn alternation, and win/draw detection on
//! an 8x8 board.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: The engine holds no mutable state. The caller
//!    owns the single current `GameState`; every entry point maps immutable
//!    inputs to new immutable outputs.
//!
//! 2. **Total functions**: `apply_action` never panics on malformed input.
//!    Illegal requests come back as the unchanged grid plus an
//!    `InvalidMove` event - the engine may be driven by an unreliable
//!    external chooser.
//!
//! 3. **Events over exceptions**: The ordered per-call event log is the
//!    sole channel by which the engine reports what happened; its order is
//!    a contract that animation and reaction consumers depend on.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) grid snapshots via `im-rs`; every
//!   transition clones, speculation is free.
//!
//! - **Sparse Per-Call Move Maps**: legal moves are recomputed each query,
//!   keyed by position value equality - correctness over caching at 8x8
//!   scale.
//!
//! ## Modules
//!
//! - `core`: pieces, positions, the board, game state, RNG
//! - `rules`: legal move enumeration and action application
//! - `events`: the per-action event log records
//! - `analysis`: read-only consequence tags for candidate moves
//! - `supplier`: the opponent-chooser contract and reference choosers

pub mod analysis;
pub mod core;
pub mod events;
pub mod rules;
pub mod supplier;

// Re-export commonly used types
pub use crate::core::{
    Board, CaptureChain, GameRng, GameRngState, GameState, GameStatus, Piece, PieceId, Player,
    Position,
};

pub use crate::events::{GameEvent, GameOutcome};

pub use crate::rules::{apply_action, has_capture, legal_moves, Move, MoveMap, MoveRequest, Transition};

pub use crate::analysis::{analyze_consequences, annotate_moves, AnnotatedMove, Consequence, ConsequenceSet};

pub use crate::supplier::{GreedySupplier, MoveSupplier, RandomSupplier};
