//! Move execution.
//!
//! `execute_move` is the only public way to advance a game. It validates
//! first and then builds a fresh state; a rejected move never touches the
//! caller's state.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{castling_lane_for_king_move, castling_lane_for_rook_square};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::is_legal_move;
use crate::moves::move_descriptions::Move;

/// Validates `mv` against `game_state` and returns the successor state.
///
/// A pawn move onto the last rank without a promotion kind is reported as
/// `IncompletePromotion` when naming a kind would make it legal.
pub fn execute_move(game_state: &GameState, mv: Move) -> ChessResult<GameState> {
    if mv.piece.color != game_state.side_to_move {
        return Err(ChessError::IllegalMove(mv));
    }

    if mv.reaches_promotion_rank() && mv.promotion_piece.is_none() {
        let completed = mv.with_promotion(PieceKind::Queen);
        return if is_legal_move(game_state, &completed)? {
            Err(ChessError::IncompletePromotion {
                from: mv.from,
                to: mv.to,
            })
        } else {
            Err(ChessError::IllegalMove(mv))
        };
    }

    if !is_legal_move(game_state, &mv)? {
        return Err(ChessError::IllegalMove(mv));
    }

    Ok(apply_move(game_state, &mv))
}

/// Applies an already validated move.
pub(crate) fn apply_move(game_state: &GameState, mv: &Move) -> GameState {
    let mut next = game_state.clone();
    next.board = apply_to_board(&game_state.board, mv);

    update_castling_rights(&mut next.castling_rights, mv);

    next.en_passant_target = if mv.is_double_pawn_push() {
        Some(mv.from.between_on_file(mv.to))
    } else {
        None
    };

    next.halfmove_clock = if mv.is_pawn_move() || mv.is_capture() {
        0
    } else {
        game_state.halfmove_clock.saturating_add(1)
    };

    if mv.piece.color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.move_history.push(*mv);
    next.side_to_move = game_state.side_to_move.opposite();
    next.position_history.push(next.position_key());
    next
}

/// Piece placement after `mv`, without touching any other state.
pub(crate) fn apply_to_board(board: &Board, mv: &Move) -> Board {
    let mut next = *board;
    next.remove(mv.from);

    if mv.is_en_passant {
        next.remove(mv.en_passant_victim_square());
    }

    if mv.is_castling {
        if let Some(lane) = castling_lane_for_king_move(mv.piece.color, mv.from, mv.to) {
            if let Some(rook) = next.remove(lane.rook_from) {
                next.place(lane.rook_to, rook);
            }
        }
    }

    next.place(mv.to, mv.placed_piece());
    next
}

fn update_castling_rights(rights: &mut CastlingRights, mv: &Move) {
    match mv.piece.kind {
        PieceKind::King => rights.revoke_all_for(mv.piece.color),
        PieceKind::Rook => {
            if let Some(lane) = castling_lane_for_rook_square(mv.from) {
                if lane.color == mv.piece.color {
                    rights.revoke(lane.color, lane.side);
                }
            }
        }
        _ => {}
    }

    // Rook captured at home, whoever captured it.
    if let Some(victim) = mv.captured_piece {
        if victim.kind == PieceKind::Rook {
            if let Some(lane) = castling_lane_for_rook_square(mv.to) {
                if lane.color == victim.color {
                    rights.revoke(lane.color, lane.side);
                }
            }
        }
    }
}
