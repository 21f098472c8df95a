//! The `Move` value type.
//!
//! A `Move` describes an already-decided transition; it never mutates
//! anything by itself. Equality is structural over every field, which is what
//! legality checks compare against.

use std::fmt;

use crate::game_state::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    pub promotion_piece: Option<PieceKind>,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured_piece: None,
            promotion_piece: None,
            is_castling: false,
            is_en_passant: false,
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Self {
            captured_piece: Some(captured),
            ..Self::quiet(from, to, piece)
        }
    }

    #[inline]
    pub const fn castle(king_from: Square, king_to: Square, king: Piece) -> Self {
        Self {
            is_castling: true,
            ..Self::quiet(king_from, king_to, king)
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square, pawn: Piece, captured_pawn: Piece) -> Self {
        Self {
            captured_piece: Some(captured_pawn),
            is_en_passant: true,
            ..Self::quiet(from, to, pawn)
        }
    }

    /// Same move with the given promotion kind.
    #[inline]
    pub const fn with_promotion(self, kind: PieceKind) -> Self {
        Self {
            promotion_piece: Some(kind),
            ..self
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_pawn_move(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.is_pawn_move() && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// True for pawn moves ending on the mover's last rank.
    #[inline]
    pub fn reaches_promotion_rank(&self) -> bool {
        self.is_pawn_move() && self.to.rank() == self.piece.color.promotion_rank()
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub const fn en_passant_victim_square(&self) -> Square {
        self.to.on_rank_of(self.from)
    }

    /// The piece standing on `to` once the move is made.
    #[inline]
    pub fn placed_piece(&self) -> Piece {
        match self.promotion_piece {
            Some(kind) => Piece::new(kind, self.piece.color),
            None => self.piece,
        }
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion_piece {
            if let Some(letter) = kind.letter() {
                write!(f, "{}", letter.to_ascii_lowercase())?;
            }
        }
        Ok(())
    }
}
