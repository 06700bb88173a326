//! The rules engine: move generation and action application.
//!
//! Both entry points are pure functions over immutable state - safe to call
//! repeatedly, memoize, or invoke speculatively, which is exactly what the
//! consequence analysis does.

pub mod apply;
pub mod movegen;

pub use apply::{apply_action, MoveRequest, Transition};
pub use movegen::{has_capture, legal_moves, Move, MoveMap};
