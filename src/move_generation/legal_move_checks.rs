use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::leaper_moves::{king_attacks, knight_attacks};
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::slider_moves::{bishop_attacks, rook_attacks};

/// The single king of `color`. Zero or several kings is a corrupted state.
pub fn king_square(game_state: &GameState, color: Color) -> ChessResult<Square> {
    king_square_on_board(&game_state.board, color)
}

pub(crate) fn king_square_on_board(board: &Board, color: Color) -> ChessResult<Square> {
    let kings = board.mask_of(Piece::new(PieceKind::King, color));
    if kings.count_ones() != 1 {
        return Err(ChessError::CorruptedState(format!(
            "expected exactly one {color} king, found {}",
            kings.count_ones()
        )));
    }

    Square::iter_mask(kings)
        .next()
        .ok_or_else(|| ChessError::CorruptedState(format!("no {color} king on the board")))
}

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> ChessResult<bool> {
    let king_sq = king_square(game_state, color)?;
    Ok(is_square_attacked(game_state, king_sq, color.opposite()))
}

#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    square_attacked_on_board(&game_state.board, square, attacker_color)
}

/// Geometry only: pins are ignored and the attacked square may hold anything.
pub(crate) fn square_attacked_on_board(board: &Board, square: Square, attacker_color: Color) -> bool {
    let of = |kind| board.mask_of(Piece::new(kind, attacker_color));
    let occupancy = board.occupancy();

    // A pawn of `attacker_color` hits `square` iff a pawn of the other colour
    // standing on `square` would hit the attacker's square.
    if pawn_attacks(attacker_color.opposite(), square) & of(PieceKind::Pawn) != 0 {
        return true;
    }

    if knight_attacks(square) & of(PieceKind::Knight) != 0 {
        return true;
    }

    if king_attacks(square) & of(PieceKind::King) != 0 {
        return true;
    }

    let bishops_queens = of(PieceKind::Bishop) | of(PieceKind::Queen);
    if bishop_attacks(square, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = of(PieceKind::Rook) | of(PieceKind::Queen);
    rook_attacks(square, occupancy) & rooks_queens != 0
}
