//! The 8x8 grid.
//!
//! Backed by an `im::Vector` so cloning a board is O(1) structural sharing:
//! every transition snapshots the grid, and speculative analysis clones
//! entire states freely.
//!
//! Placement invariant: pieces only ever occupy dark squares, at most one
//! per cell. Legal transitions preserve this; the board does not re-check it
//! defensively.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::piece::{Piece, Player};
use super::position::Position;

/// Number of cells in the grid.
const CELL_COUNT: usize = 64;

/// The 8x8 board: a grid of optional pieces addressed by [`Position`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<Option<Piece>>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: (0..CELL_COUNT).map(|_| None).collect(),
        }
    }

    /// The piece at `pos`, if any. Off-board coordinates are simply empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if !pos.on_board() {
            return None;
        }
        self.cells[pos.index()]
    }

    /// Is the cell on-board and unoccupied?
    #[must_use]
    pub fn is_free(&self, pos: Position) -> bool {
        pos.on_board() && self.cells[pos.index()].is_none()
    }

    /// Place a piece at `pos`, replacing any occupant.
    pub fn place(&mut self, pos: Position, piece: Piece) {
        self.cells.set(pos.index(), Some(piece));
    }

    /// Remove and return the piece at `pos`.
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        if !pos.on_board() {
            return None;
        }
        let taken = self.cells[pos.index()];
        if taken.is_some() {
            self.cells.set(pos.index(), None);
        }
        taken
    }

    /// Iterate over all occupied cells.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|piece| (Position::from_index(i), piece)))
    }

    /// Iterate over the occupied cells of one side.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.owner == player)
    }

    /// Number of pieces a side has left.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.pieces().count()
    }

    /// Does a side hold any pieces at all?
    #[must_use]
    pub fn has_pieces(&self, player: Player) -> bool {
        self.pieces_of(player).next().is_some()
    }

    /// Are all remaining pieces (of both sides) kings?
    #[must_use]
    pub fn all_kings(&self) -> bool {
        self.pieces().all(|(_, piece)| piece.is_king)
    }
}

impl std::fmt::Display for Board {
    /// Text rendering for debugging: `.` empty, lowercase men, uppercase
    /// kings, `o`/`O` for player one and `x`/`X` for player two.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let glyph = match self.get(Position::new(row, col)) {
                    None => '.',
                    Some(p) => match (p.owner, p.is_king) {
                        (Player::PlayerOne, false) => 'o',
                        (Player::PlayerOne, true) => 'O',
                        (Player::PlayerTwo, false) => 'x',
                        (Player::PlayerTwo, true) => 'X',
                    },
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::PieceId;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.total_count(), 0);
        assert!(board.is_free(Position::new(3, 4)));
        assert!(!board.has_pieces(Player::PlayerOne));
    }

    #[test]
    fn test_place_take() {
        let mut board = Board::empty();
        let piece = Piece::man(PieceId::new(1), Player::PlayerOne);

        board.place(Position::new(2, 1), piece);
        assert_eq!(board.get(Position::new(2, 1)), Some(piece));
        assert!(!board.is_free(Position::new(2, 1)));

        let taken = board.take(Position::new(2, 1));
        assert_eq!(taken, Some(piece));
        assert!(board.is_free(Position::new(2, 1)));
        assert_eq!(board.take(Position::new(2, 1)), None);
    }

    #[test]
    fn test_off_board_queries() {
        let board = Board::empty();
        assert_eq!(board.get(Position::new(-1, 3)), None);
        assert!(!board.is_free(Position::new(8, 0)));
    }

    #[test]
    fn test_pieces_of() {
        let mut board = Board::empty();
        board.place(Position::new(0, 1), Piece::man(PieceId::new(1), Player::PlayerOne));
        board.place(Position::new(5, 2), Piece::man(PieceId::new(2), Player::PlayerTwo));
        board.place(Position::new(7, 0), Piece::king(PieceId::new(3), Player::PlayerTwo));

        assert_eq!(board.count(Player::PlayerOne), 1);
        assert_eq!(board.count(Player::PlayerTwo), 2);
        assert_eq!(board.total_count(), 3);
        assert!(!board.all_kings());
    }

    #[test]
    fn test_all_kings() {
        let mut board = Board::empty();
        board.place(Position::new(0, 1), Piece::king(PieceId::new(1), Player::PlayerOne));
        board.place(Position::new(5, 2), Piece::king(PieceId::new(2), Player::PlayerTwo));
        assert!(board.all_kings());
    }

    #[test]
    fn test_clone_is_snapshot() {
        let mut board = Board::empty();
        board.place(Position::new(2, 1), Piece::man(PieceId::new(1), Player::PlayerOne));

        let snapshot = board.clone();
        board.take(Position::new(2, 1));

        assert_eq!(snapshot.get(Position::new(2, 1)).map(|p| p.id), Some(PieceId::new(1)));
        assert_eq!(board.get(Position::new(2, 1)), None);
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::empty();
        board.place(Position::new(4, 3), Piece::king(PieceId::new(5), Player::PlayerTwo));

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
