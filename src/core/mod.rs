//! Core types: pieces, positions, the board, game state, RNG.
//!
//! Everything the rules and analysis code builds on. All state types are
//! plain serde-serializable values; a serialized `GameState` is the
//! structural snapshot hosts persist or ship across a boundary.

pub mod board;
pub mod piece;
pub mod position;
pub mod rng;
pub mod state;

pub use board::Board;
pub use piece::{Piece, PieceId, Player};
pub use position::{Position, BOARD_SIZE, DIAGONALS};
pub use rng::{GameRng, GameRngState};
pub use state::{CaptureChain, GameState, GameStatus};
