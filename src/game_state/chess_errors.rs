//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type of the crate. The first three
//! variants are the rules taxonomy callers react to:
//!
//! - `IllegalMove`: the candidate is not in the legal move set (wrong piece
//!   geometry, wrong side, leaves the king in check, castling or en-passant
//!   preconditions not met). The caller's state is untouched.
//! - `IncompletePromotion`: a pawn would reach the last rank but no promotion
//!   kind was supplied. The caller must obtain a choice and resubmit.
//! - `CorruptedState`: an invariant of the state itself is broken (for
//!   example a missing king). This is not recoverable by retrying.
//!
//! The remaining variants report malformed text handed to the utility layer.

use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::Move;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("pawn move {from}{to} needs a promotion piece (q, r, b or n)")]
    IncompletePromotion { from: Square, to: Square },

    #[error("corrupted game state: {0}")]
    CorruptedState(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid move text: {0}")]
    InvalidMoveText(String),
}

impl ChessError {
    /// True for errors that mean the state itself can no longer be trusted.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, ChessError::CorruptedState(_))
    }
}

#[cfg(test)]
mod tests {
    use super::ChessError;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::moves::move_descriptions::Move;

    #[test]
    fn messages_name_the_move() {
        let e2 = "e2".parse::<Square>().expect("e2 should parse");
        let e5 = "e5".parse::<Square>().expect("e5 should parse");
        let mv = Move::quiet(e2, e5, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(ChessError::IllegalMove(mv).to_string(), "illegal move: e2e5");

        let e7 = "e7".parse::<Square>().expect("e7 should parse");
        let err = ChessError::IncompletePromotion { from: e7, to: Square::E8 };
        assert!(err.to_string().starts_with("pawn move e7e8"));
    }

    #[test]
    fn only_corruption_is_fatal() {
        assert!(ChessError::CorruptedState("no white king".to_owned()).is_fatal());
        assert!(!ChessError::InvalidFen("x".to_owned()).is_fatal());
    }
}
