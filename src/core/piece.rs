//! Players and pieces.
//!
//! ## Player
//!
//! Exactly two sides. `PlayerOne` men advance toward row 7, `PlayerTwo`
//! men toward row 0. The side enum doubles as the key for "whose pieces"
//! queries throughout the rules code.
//!
//! ## PieceId
//!
//! Stable identity assigned at creation and never reused. Moving a piece
//! transfers its identity to the destination cell; capturing destroys it.

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Row delta of a forward step for this side's men.
    ///
    /// `PlayerOne` starts on rows 0-2 and advances down the grid (+1);
    /// `PlayerTwo` starts on rows 5-7 and advances up (-1).
    #[must_use]
    pub const fn forward_sign(self) -> i8 {
        match self {
            Player::PlayerOne => 1,
            Player::PlayerTwo => -1,
        }
    }

    /// The farthest row from this side's start; a man landing here is
    /// promoted immediately.
    #[must_use]
    pub const fn crown_row(self) -> i8 {
        match self {
            Player::PlayerOne => 7,
            Player::PlayerTwo => 0,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::PlayerOne => write!(f, "player one"),
            Player::PlayerTwo => write!(f, "player two"),
        }
    }
}

/// Stable piece identity.
///
/// Allocated sequentially by `GameState`; ids are never reused, so an id
/// seen in an event always refers to the same physical piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A piece on the board.
///
/// Owned by the grid cell it occupies. `is_king` flips to `true` exactly
/// once, at promotion, and never back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Stable identity.
    pub id: PieceId,

    /// Owning side.
    pub owner: Player,

    /// Promoted?
    pub is_king: bool,
}

impl Piece {
    /// Create a new (unpromoted) man.
    #[must_use]
    pub const fn man(id: PieceId, owner: Player) -> Self {
        Self {
            id,
            owner,
            is_king: false,
        }
    }

    /// Create a king. Used by tests and scenario setup; in live play kings
    /// only arise through promotion.
    #[must_use]
    pub const fn king(id: PieceId, owner: Player) -> Self {
        Self {
            id,
            owner,
            is_king: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::PlayerOne.opponent(), Player::PlayerTwo);
        assert_eq!(Player::PlayerTwo.opponent(), Player::PlayerOne);
    }

    #[test]
    fn test_forward_sign_and_crown_row() {
        assert_eq!(Player::PlayerOne.forward_sign(), 1);
        assert_eq!(Player::PlayerTwo.forward_sign(), -1);
        assert_eq!(Player::PlayerOne.crown_row(), 7);
        assert_eq!(Player::PlayerTwo.crown_row(), 0);
    }

    #[test]
    fn test_piece_constructors() {
        let man = Piece::man(PieceId::new(3), Player::PlayerOne);
        assert!(!man.is_king);
        assert_eq!(man.owner, Player::PlayerOne);

        let king = Piece::king(PieceId::new(4), Player::PlayerTwo);
        assert!(king.is_king);
        assert_eq!(king.id.raw(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::PlayerOne), "player one");
        assert_eq!(format!("{}", PieceId::new(7)), "Piece(7)");
    }

    #[test]
    fn test_serialization() {
        let piece = Piece::king(PieceId::new(9), Player::PlayerTwo);
        let json = serde_json::to_string(&piece).unwrap();
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
