//! Pseudo-legal pawn moves: pushes, double pushes, captures, en passant and
//! promotion expansion.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let color = pawn.color;

    if let Some(one_step) = from.offset(0, color.forward()) {
        if board.is_empty(one_step) {
            push_with_promotions(Move::quiet(from, one_step, pawn), out);

            if from.rank() == color.pawn_start_rank() {
                if let Some(two_step) = from.offset(0, 2 * color.forward()) {
                    if board.is_empty(two_step) {
                        out.push(Move::quiet(from, two_step, pawn));
                    }
                }
            }
        }
    }

    for target in Square::iter_mask(pawn_attacks(color, from)) {
        match board.piece_at(target) {
            Some(victim) if victim.color != color => {
                push_with_promotions(Move::capture(from, target, pawn, victim), out);
            }
            None if is_en_passant_target(game_state, color, target) => {
                let victim = Piece::new(PieceKind::Pawn, color.opposite());
                let mv = Move::en_passant(from, target, pawn, victim);
                if board.piece_at(mv.en_passant_victim_square()) == Some(victim) {
                    out.push(mv);
                }
            }
            _ => {}
        }
    }
}

/// The target only belongs to the side to move; it expires after one reply.
#[inline]
fn is_en_passant_target(game_state: &GameState, color: Color, target: Square) -> bool {
    game_state.side_to_move == color && game_state.en_passant_target == Some(target)
}

fn push_with_promotions(mv: Move, out: &mut Vec<Move>) {
    if mv.reaches_promotion_rank() {
        for kind in PieceKind::PROMOTION_CHOICES {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::Move;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn pawn_moves(fen: &str, from: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let from = sq(from);
        let pawn = game.piece_at(from).expect("pawn should be on the square");
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, pawn, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", "e2");
        let targets: Vec<Square> = moves.iter().map(|mv| mv.to).collect();
        assert_eq!(targets, vec![sq("e3"), sq("e4")]);
    }

    #[test]
    fn blocked_intermediate_square_prevents_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2");
        assert!(moves.is_empty());

        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("e3"));
    }

    #[test]
    fn push_to_last_rank_yields_four_promotions() {
        let moves = pawn_moves("7k/P7/8/8/8/8/8/K7 w - - 0 1", "a7");
        assert_eq!(moves.len(), 4);
        let kinds: Vec<Option<PieceKind>> = moves.iter().map(|mv| mv.promotion_piece).collect();
        assert_eq!(
            kinds,
            vec![
                Some(PieceKind::Queen),
                Some(PieceKind::Rook),
                Some(PieceKind::Bishop),
                Some(PieceKind::Knight)
            ]
        );
    }

    #[test]
    fn capture_promotions_carry_the_victim() {
        let moves = pawn_moves("1r5k/P7/8/8/8/8/8/K7 w - - 0 1", "a7");
        assert_eq!(moves.len(), 8);
        let captures = moves.iter().filter(|mv| mv.is_capture()).count();
        assert_eq!(captures, 4);
        assert!(moves
            .iter()
            .filter(|mv| mv.is_capture())
            .all(|mv| mv.captured_piece == Some(Piece::new(PieceKind::Rook, Color::Black))));
    }

    #[test]
    fn en_passant_only_onto_the_target_square() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5");
        let ep: Vec<&Move> = moves.iter().filter(|mv| mv.is_en_passant).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, sq("d6"));

        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1", "e5");
        assert!(moves.iter().all(|mv| !mv.is_en_passant));
    }
}
