//! Full legal move generation pipeline.
//!
//! Takes the pseudo-legal candidates, simulates each on a scratch board and
//! drops those that leave the mover's king attacked or capture a king. Castling candidates are
//! also rejected when the king starts in check or crosses an attacked square.

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_rules::castling_lane_for_king_move;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, apply_to_board};
use crate::move_generation::legal_move_checks::{
    is_in_check, is_square_attacked, king_square_on_board, square_attacked_on_board,
};
use crate::move_generation::move_generator::{
    generate_piece_moves, pseudo_legal_moves, GeneratedMove, MoveAnnotations, MoveGenerator,
};
use crate::moves::move_descriptions::Move;

/// Legal moves for `side`. En passant is only offered to the side to move.
pub fn legal_moves(game_state: &GameState, side: Color) -> ChessResult<Vec<Move>> {
    filter_legal(game_state, pseudo_legal_moves(game_state, side))
}

/// Legal moves of whatever piece stands on `square`, for either colour.
pub fn legal_moves_from(game_state: &GameState, square: Square) -> ChessResult<Vec<Move>> {
    let Some(piece) = game_state.board.piece_at(square) else {
        return Ok(Vec::new());
    };

    let mut pseudo = Vec::new();
    generate_piece_moves(game_state, square, piece, &mut pseudo);
    filter_legal(game_state, pseudo)
}

/// True when playing `mv` would leave the mover's own king attacked.
pub fn would_leave_in_check(game_state: &GameState, mv: &Move) -> ChessResult<bool> {
    let color = mv.piece.color;
    let scratch = apply_to_board(&game_state.board, mv);
    let king_sq = king_square_on_board(&scratch, color)?;
    Ok(square_attacked_on_board(&scratch, king_sq, color.opposite()))
}

/// Set membership against the legal moves of the mover's colour.
pub fn is_legal_move(game_state: &GameState, mv: &Move) -> ChessResult<bool> {
    if game_state.board.piece_at(mv.from) != Some(mv.piece) {
        return Ok(false);
    }
    Ok(legal_moves_from(game_state, mv.from)?.contains(mv))
}

fn filter_legal(game_state: &GameState, pseudo: Vec<Move>) -> ChessResult<Vec<Move>> {
    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        // Kings are never captured; such a candidate only exists in a broken setup.
        if mv.captured_piece.is_some_and(|victim| victim.kind == PieceKind::King) {
            continue;
        }
        if mv.is_castling && !castling_path_is_safe(game_state, &mv)? {
            continue;
        }
        if would_leave_in_check(game_state, &mv)? {
            continue;
        }
        legal.push(mv);
    }
    Ok(legal)
}

fn castling_path_is_safe(game_state: &GameState, mv: &Move) -> ChessResult<bool> {
    let color = mv.piece.color;
    if is_in_check(game_state, color)? {
        return Ok(false);
    }

    let Some(lane) = castling_lane_for_king_move(color, mv.from, mv.to) else {
        return Ok(false);
    };
    Ok(!lane
        .king_path
        .iter()
        .any(|square| is_square_attacked(game_state, *square, color.opposite())))
}

/// Generates legal moves together with their successor states and check
/// annotations.
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
        let moves = legal_moves(game_state, game_state.side_to_move)?;
        let mut generated = Vec::with_capacity(moves.len());

        for mv in moves {
            let next = apply_move(game_state, &mv);
            let annotations = annotate(&next)?;
            generated.push(GeneratedMove {
                mv,
                game_after_move: next,
                annotations,
            });
        }

        Ok(generated)
    }
}

fn annotate(next: &GameState) -> ChessResult<MoveAnnotations> {
    if !is_in_check(next, next.side_to_move)? {
        return Ok(MoveAnnotations::default());
    }

    let replies = legal_moves(next, next.side_to_move)?;
    Ok(MoveAnnotations {
        gives_check: true,
        is_checkmate: replies.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::{is_legal_move, legal_moves, legal_moves_from, would_leave_in_check, LegalMoveGenerator};
    use crate::game_state::board::Board;
    use crate::game_state::chess_errors::ChessError;
    use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::{apply_move, execute_move};
    use crate::move_generation::legal_move_checks::is_in_check;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::moves::move_descriptions::Move;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(legal_moves(&game, Color::White).expect("legal moves").len(), 20);
        let generated = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("generation should succeed");
        assert_eq!(generated.len(), 20);
        assert!(generated.iter().all(|g| !g.annotations.gives_check));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(legal_moves_from(&game, sq("e2")).expect("legal moves").is_empty());

        let knight = Piece::new(PieceKind::Knight, Color::White);
        let mv = Move::quiet(sq("e2"), sq("c3"), knight);
        assert!(would_leave_in_check(&game, &mv).expect("kings present"));
        assert!(!is_legal_move(&game, &mv).expect("kings present"));
    }

    #[test]
    fn every_legal_move_escapes_check() {
        let game = GameState::from_fen("4k3/8/8/8/7b/8/3P4/3QK1N1 w - - 0 1").expect("FEN should parse");
        assert!(is_in_check(&game, Color::White).expect("kings present"));

        let moves = legal_moves(&game, Color::White).expect("legal moves");
        assert!(!moves.is_empty());
        for mv in moves {
            let next = apply_move(&game, &mv);
            assert!(!is_in_check(&next, Color::White).expect("kings present"), "{mv} leaves check");
        }
    }

    #[test]
    fn castling_through_or_out_of_check_is_rejected() {
        let through = GameState::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(legal_moves_from(&through, Square::E1)
            .expect("legal moves")
            .iter()
            .all(|mv| !mv.is_castling));

        let in_check = GameState::from_fen("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(legal_moves_from(&in_check, Square::E1)
            .expect("legal moves")
            .iter()
            .all(|mv| !mv.is_castling));

        // b1 attacked does not matter for the queenside king path.
        let b1_attacked = GameState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        assert!(legal_moves_from(&b1_attacked, Square::E1)
            .expect("legal moves")
            .iter()
            .any(|mv| mv.is_castling && mv.to == Square::C1));
    }

    #[test]
    fn horizontally_pinned_en_passant_is_illegal() {
        // Capturing exd6 would clear the fifth rank between the a5 king and h5 rook.
        let game = GameState::from_fen("4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1").expect("FEN should parse");
        let moves = legal_moves_from(&game, sq("e5")).expect("legal moves");
        assert!(moves.iter().all(|mv| !mv.is_en_passant));
        assert!(moves.iter().any(|mv| mv.to == sq("e6")));
    }

    #[test]
    fn king_captures_are_never_legal() {
        // Black stands in check with White to move; only reachable through direct setup.
        let mut board = Board::empty();
        board.place(Square::E8, Piece::new(PieceKind::King, Color::Black));
        board.place(Square::E1, Piece::new(PieceKind::Queen, Color::White));
        board.place(Square::F1, Piece::new(PieceKind::King, Color::White));
        let game = GameState::from_setup(board, Color::White, CastlingRights::NONE, None, 0, 1);

        let moves = legal_moves(&game, Color::White).expect("legal moves");
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.to != Square::E8));

        let queen = Piece::new(PieceKind::Queen, Color::White);
        let king = Piece::new(PieceKind::King, Color::Black);
        let capture = Move::capture(Square::E1, Square::E8, queen, king);
        assert!(!is_legal_move(&game, &capture).expect("kings present"));
        assert!(matches!(execute_move(&game, capture), Err(ChessError::IllegalMove(_))));
    }

    #[test]
    fn scholars_mate_moves_are_each_legal_before_execution() {
        let mut game = GameState::new_game();
        for text in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
            let from = sq(&text[0..2]);
            let to = sq(&text[2..4]);
            let mv = legal_moves(&game, game.side_to_move())
                .expect("legal moves")
                .into_iter()
                .find(|mv| mv.from == from && mv.to == to)
                .unwrap_or_else(|| panic!("{text} should be legal"));
            game = apply_move(&game, &mv);
        }

        let last = game.last_move().expect("history should not be empty");
        assert!(last.is_capture());
        assert!(legal_moves(&game, Color::Black).expect("legal moves").is_empty());
    }
}
