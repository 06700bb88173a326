//! Board coordinates.
//!
//! `Position` is a value type keyed by structural equality - the move map
//! and all lookups hash the `(row, col)` pair, never an object identity.
//! Off-board values are representable on purpose: `apply_action` validates
//! host-supplied coordinates instead of panicking on them.

use serde::{Deserialize, Serialize};

/// Board width/height.
pub const BOARD_SIZE: i8 = 8;

/// The four diagonal directions as `(row, col)` deltas.
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A board coordinate.
///
/// On-board positions have `row` and `col` in `0..8`; anything else fails
/// [`Position::on_board`] and is rejected by validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Is this coordinate inside the 8x8 grid?
    #[must_use]
    pub const fn on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Is this a dark square? Pieces only ever occupy dark squares.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Flattened grid index (`row * 8 + col`).
    ///
    /// Only meaningful for on-board positions.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    /// Position from a flattened grid index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index as i8) / BOARD_SIZE,
            col: (index as i8) % BOARD_SIZE,
        }
    }

    /// The position offset by `(dr, dc)`. May land off-board; callers
    /// check with [`Position::on_board`].
    #[must_use]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
