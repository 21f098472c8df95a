//! Pseudo-legal king steps and castling candidates.
//!
//! Castling is proposed on static preconditions only: the right is still
//! held, king and rook stand on their original squares and everything
//! between them is empty. Check and attacked-path rules are applied by the
//! legal move filter.

use crate::game_state::chess_rules::castling_lane;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::push_target_moves;
use crate::moves::leaper_moves::king_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    push_target_moves(&game_state.board, from, king, king_attacks(from), out);
    generate_castling_candidates(game_state, from, king, out);
}

fn generate_castling_candidates(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let own_rook = Piece::new(PieceKind::Rook, king.color);

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !game_state.castling_rights.allows(king.color, side) {
            continue;
        }

        let lane = castling_lane(king.color, side);
        if from != lane.king_from || board.piece_at(lane.rook_from) != Some(own_rook) {
            continue;
        }

        if lane.between.iter().all(|square| board.is_empty(*square)) {
            out.push(Move::castle(lane.king_from, lane.king_to, king));
        }
    }
}
