//! Long algebraic input (`e2e4`, `e7e8q`) and square-to-square intent turned
//! into candidate `Move` values.
//!
//! Candidates are only shaped here: capture, castling and en-passant flags are
//! read off the position so the result can be compared structurally against
//! the legal move set. Legality is decided by `execute_move`. A pawn reaching
//! the last rank without a promotion letter is returned bare, and execution
//! reports it as an incomplete promotion.

use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::castling_lane_for_king_move;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn build_candidate_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<Move> {
    let piece = game_state
        .piece_at(from)
        .ok_or_else(|| ChessError::InvalidMoveText(format!("no piece on {from}")))?;
    let target = game_state.piece_at(to);

    let mv = if piece.kind == PieceKind::King
        && castling_lane_for_king_move(piece.color, from, to).is_some()
    {
        Move::castle(from, to, piece)
    } else if piece.kind == PieceKind::Pawn
        && from.file() != to.file()
        && target.is_none()
        && game_state.en_passant_target() == Some(to)
    {
        Move::en_passant(from, to, piece, Piece::new(PieceKind::Pawn, piece.color.opposite()))
    } else {
        match target {
            Some(victim) => Move::capture(from, to, piece, victim),
            None => Move::quiet(from, to, piece),
        }
    };

    let Some(kind) = promotion else {
        return Ok(mv);
    };

    if !kind.is_promotion_choice() {
        return Err(ChessError::InvalidMoveText(format!("cannot promote to {kind:?}")));
    }
    if !mv.reaches_promotion_rank() {
        return Err(ChessError::InvalidMoveText(format!(
            "{from}{to} does not reach the promotion rank"
        )));
    }

    Ok(mv.with_promotion(kind))
}

pub fn parse_long_algebraic(text: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = text.trim();
    let invalid = || ChessError::InvalidMoveText(text.to_owned());

    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;

    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(PieceKind::from_promotion_char(ch).ok_or_else(invalid)?),
        None => None,
    };

    build_candidate_move(game_state, from, to, promotion)
}

#[cfg(test)]
mod tests {
    use super::{build_candidate_move, parse_long_algebraic};
    use crate::game_state::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::execute_move;
    use crate::move_generation::legal_move_generator::is_legal_move;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn simple_move_matches_the_generated_one() {
        let game = GameState::new_game();
        let mv = parse_long_algebraic("e2e4", &game).expect("move should parse");
        assert!(is_legal_move(&game, &mv).expect("kings present"));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn castling_and_en_passant_are_detected() {
        let castle_state =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = parse_long_algebraic("e1g1", &castle_state).expect("castle should parse");
        assert!(castle.is_castling);
        assert!(is_legal_move(&castle_state, &castle).expect("kings present"));

        let ep_state =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let ep = parse_long_algebraic("e5d6", &ep_state).expect("en passant should parse");
        assert!(ep.is_en_passant);
        assert_eq!(ep.captured_piece, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(is_legal_move(&ep_state, &ep).expect("kings present"));
    }

    #[test]
    fn promotion_letter_is_applied_or_left_for_the_executor() {
        let game = GameState::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");

        let promoted = parse_long_algebraic("a7a8n", &game).expect("promotion should parse");
        assert_eq!(promoted.promotion_piece, Some(PieceKind::Knight));
        assert_eq!(promoted.to_string(), "a7a8n");

        let bare = parse_long_algebraic("a7a8", &game).expect("bare push should parse");
        assert_eq!(
            execute_move(&game, bare),
            Err(ChessError::IncompletePromotion {
                from: sq("a7"),
                to: sq("a8")
            })
        );
    }

    #[test]
    fn malformed_text_is_rejected() {
        let game = GameState::new_game();
        for text in ["", "e2", "e2e9", "e2e4x", "e2e4qq", "z1a1"] {
            assert!(
                matches!(parse_long_algebraic(text, &game), Err(ChessError::InvalidMoveText(_))),
                "{text:?} should be rejected"
            );
        }

        assert!(matches!(
            build_candidate_move(&game, sq("e4"), sq("e5"), None),
            Err(ChessError::InvalidMoveText(_))
        ));
        assert!(matches!(
            build_candidate_move(&game, sq("e2"), sq("e4"), Some(PieceKind::Queen)),
            Err(ChessError::InvalidMoveText(_))
        ));
    }
}
