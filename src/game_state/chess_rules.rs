//! Canonical chess-rule constants.
//!
//! Starting position, draw thresholds and the castling geometry table shared
//! by generation, validation and execution.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmoves without a pawn move or capture that make a fifty-move claim available.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of one position key that make a repetition claim available.
pub const REPETITION_CLAIM_COUNT: usize = 3;

/// Fixed geometry of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub color: Color,
    pub side: CastleSide,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: &'static [Square],
    /// Start, crossed and destination squares of the king; none may be attacked.
    pub king_path: [Square; 3],
}

pub const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        color: Color::White,
        side: CastleSide::Kingside,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        rook_to: Square::F1,
        between: &[Square::F1, Square::G1],
        king_path: [Square::E1, Square::F1, Square::G1],
    },
    CastlingLane {
        color: Color::White,
        side: CastleSide::Queenside,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        rook_to: Square::D1,
        between: &[Square::B1, Square::C1, Square::D1],
        king_path: [Square::E1, Square::D1, Square::C1],
    },
    CastlingLane {
        color: Color::Black,
        side: CastleSide::Kingside,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        rook_to: Square::F8,
        between: &[Square::F8, Square::G8],
        king_path: [Square::E8, Square::F8, Square::G8],
    },
    CastlingLane {
        color: Color::Black,
        side: CastleSide::Queenside,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        rook_to: Square::D8,
        between: &[Square::B8, Square::C8, Square::D8],
        king_path: [Square::E8, Square::D8, Square::C8],
    },
];

#[inline]
pub fn castling_lane(color: Color, side: CastleSide) -> &'static CastlingLane {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => &CASTLING_LANES[0],
        (Color::White, CastleSide::Queenside) => &CASTLING_LANES[1],
        (Color::Black, CastleSide::Kingside) => &CASTLING_LANES[2],
        (Color::Black, CastleSide::Queenside) => &CASTLING_LANES[3],
    }
}

/// Lane whose king moves from `king_from` to `king_to`, if any.
pub fn castling_lane_for_king_move(
    color: Color,
    king_from: Square,
    king_to: Square,
) -> Option<&'static CastlingLane> {
    CASTLING_LANES
        .iter()
        .find(|lane| lane.color == color && lane.king_from == king_from && lane.king_to == king_to)
}

/// Lane whose rook starts on `square`, if any.
pub fn castling_lane_for_rook_square(square: Square) -> Option<&'static CastlingLane> {
    CASTLING_LANES.iter().find(|lane| lane.rook_from == square)
}
