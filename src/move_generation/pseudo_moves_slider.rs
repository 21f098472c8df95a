//! Pseudo-legal bishop, rook and queen moves.
//!
//! Rays run until the first occupied square; an enemy there is a capture, an
//! own piece is dropped by the target mask.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::push_target_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::slider_moves::{bishop_attacks, queen_attacks, rook_attacks};

pub fn generate_slider_moves(game_state: &GameState, from: Square, slider: Piece, out: &mut Vec<Move>) {
    let occupancy = game_state.board.occupancy();
    let targets = match slider.kind {
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => 0,
    };
    push_target_moves(&game_state.board, from, slider, targets, out);
}
