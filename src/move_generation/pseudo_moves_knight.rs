use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::push_target_moves;
use crate::moves::leaper_moves::knight_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, from: Square, knight: Piece, out: &mut Vec<Move>) {
    push_target_moves(&game_state.board, from, knight, knight_attacks(from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn knight_skips_own_pieces_and_captures_enemies() {
        let game = GameState::from_fen("4k3/8/8/8/8/2p5/3P4/1N2K3 w - - 0 1").expect("FEN should parse");
        let from = "b1".parse().expect("b1");
        let knight = game.piece_at(from).expect("knight on b1");
        let mut out = Vec::new();
        generate_knight_moves(&game, from, knight, &mut out);

        // a3, c3 (capture); d2 holds a white pawn.
        assert_eq!(out.len(), 2);
        assert_eq!(out.iter().filter(|mv| mv.is_capture()).count(), 1);
    }
}
