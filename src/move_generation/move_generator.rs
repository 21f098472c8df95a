//! Pseudo-legal move generation and the generator abstraction used by perft
//! and the engines.
//!
//! Piece geometry is dispatched by an exhaustive match on `PieceKind`; the
//! per-kind rules live in the `pseudo_moves_*` modules. Nothing here looks
//! at check; that filtering belongs to `legal_move_generator`.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_slider::generate_slider_moves;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub game_after_move: GameState,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>>;
}

/// Every pseudo-legal move for `side`, in board order.
pub fn pseudo_legal_moves(game_state: &GameState, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (square, piece) in game_state.board.pieces_of(side) {
        generate_piece_moves(game_state, square, piece, &mut out);
    }
    out
}

/// Pseudo-legal moves of the piece on `square`; empty when the square is empty
/// or holds a piece of the side not to move.
pub fn pseudo_legal_moves_for(game_state: &GameState, square: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(piece) = game_state.board.piece_at(square) {
        if piece.color == game_state.side_to_move {
            generate_piece_moves(game_state, square, piece, &mut out);
        }
    }
    out
}

pub(crate) fn generate_piece_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slider_moves(game_state, from, piece, out)
        }
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

/// Turns an attack mask into quiet moves and captures, dropping own-occupied
/// targets.
pub(crate) fn push_target_moves(board: &Board, from: Square, piece: Piece, targets: u64, out: &mut Vec<Move>) {
    for to in Square::iter_mask(targets & !board.occupancy_of(piece.color)) {
        match board.piece_at(to) {
            Some(victim) => out.push(Move::capture(from, to, piece, victim)),
            None => out.push(Move::quiet(from, to, piece)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{pseudo_legal_moves, pseudo_legal_moves_for};
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_has_twenty_pseudo_moves_per_side() {
        let game = GameState::new_game();
        assert_eq!(pseudo_legal_moves(&game, Color::White).len(), 20);
        assert_eq!(pseudo_legal_moves(&game, Color::Black).len(), 20);
    }

    #[test]
    fn square_query_is_empty_for_empty_or_opponent_squares() {
        let game = GameState::new_game();
        let e4: Square = "e4".parse().expect("e4");
        let e7: Square = "e7".parse().expect("e7");
        let g1: Square = "g1".parse().expect("g1");

        assert!(pseudo_legal_moves_for(&game, e4).is_empty());
        assert!(pseudo_legal_moves_for(&game, e7).is_empty());
        assert_eq!(pseudo_legal_moves_for(&game, g1).len(), 2);
    }

    #[test]
    fn pseudo_moves_may_leave_the_king_in_check() {
        // The e2 knight is pinned by the e8 rook but still generates moves here.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let e2: Square = "e2".parse().expect("e2");
        assert_eq!(pseudo_legal_moves_for(&game, e2).len(), 6);
    }
}
