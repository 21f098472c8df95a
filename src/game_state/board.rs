//! Fixed 8x8 piece placement.
//!
//! `Board` is a flat array of 64 optional pieces. It is `Copy`, so deriving a
//! new position is a plain array copy and two states never share a board.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// The standard starting placement.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let pawn_rank = color.pawn_start_rank();
            let home_rank = color.home_rank();
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let file = file as u8;
                if let Some(square) = Square::new(file, home_rank) {
                    board.place(square, Piece::new(*kind, color));
                }
                if let Some(square) = Square::new(file, pawn_rank) {
                    board.place(square, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Puts `piece` on `square`, returning whatever stood there before.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.index()].replace(piece)
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    /// Bit mask of every occupied square.
    pub fn occupancy(&self) -> u64 {
        self.pieces().fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    pub fn occupancy_of(&self, color: Color) -> u64 {
        self.pieces_of(color)
            .fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    /// Bit mask of the squares holding exactly `piece`.
    pub fn mask_of(&self, piece: Piece) -> u64 {
        self.pieces()
            .filter(|(_, candidate)| *candidate == piece)
            .fold(0u64, |acc, (square, _)| acc | square.bit())
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn standard_board_has_thirty_two_pieces() {
        let board = Board::standard();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(
            board.piece_at(Square::E1),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Square::D8),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        let e2 = Square::new(4, 1).expect("e2 is on the board");
        assert_eq!(
            board.piece_at(e2),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(board.occupancy().count_ones(), 32);
        assert_eq!(board.occupancy_of(Color::Black), 0xFFFF_0000_0000_0000);
    }

    #[test]
    fn copies_do_not_alias() {
        let original = Board::standard();
        let mut copy = original;
        copy.remove(Square::E1);
        copy.place(Square::E8, Piece::new(PieceKind::Queen, Color::White));

        assert!(copy.is_empty(Square::E1));
        assert_eq!(
            original.piece_at(Square::E1),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            original.piece_at(Square::E8),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
    }

    #[test]
    fn place_returns_displaced_piece() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let bishop = Piece::new(PieceKind::Bishop, Color::Black);
        assert_eq!(board.place(Square::B1, knight), None);
        assert_eq!(board.place(Square::B1, bishop), Some(knight));
        assert_eq!(board.mask_of(bishop), Square::B1.bit());
        assert_eq!(board.remove(Square::B1), Some(bishop));
        assert_eq!(board.remove(Square::B1), None);
    }
}
