//! Standard algebraic notation for executed moves.
//!
//! Rendering needs both sides of the transition: the pre-move position for
//! disambiguation and the post-move position for the check or mate suffix.

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_rules::castling_lane_for_king_move;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;

pub fn render_notation(pre: &GameState, mv: &Move, post: &GameState) -> ChessResult<String> {
    let mut out = String::new();

    if mv.is_castling {
        let side = castling_lane_for_king_move(mv.piece.color, mv.from, mv.to)
            .map(|lane| lane.side)
            .unwrap_or(if mv.to.file() > mv.from.file() {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            });
        out.push_str(match side {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        });
    } else {
        match mv.piece.kind.letter() {
            None => {
                if mv.is_capture() {
                    out.push(file_char(mv.from));
                }
            }
            Some(letter) => {
                out.push(letter);
                if mv.piece.kind != PieceKind::King {
                    push_disambiguation(pre, mv, &mut out)?;
                }
            }
        }

        if mv.is_capture() {
            out.push('x');
        }
        out.push_str(&mv.to.to_string());

        if let Some(letter) = mv.promotion_piece.and_then(PieceKind::letter) {
            out.push('=');
            out.push(letter);
        }
    }

    let defender = post.side_to_move();
    if is_in_check(post, defender)? {
        if legal_moves(post, defender)?.is_empty() {
            out.push('#');
        } else {
            out.push('+');
        }
    }

    Ok(out)
}

/// File if it tells the candidates apart, else rank, else both.
fn push_disambiguation(pre: &GameState, mv: &Move, out: &mut String) -> ChessResult<()> {
    let rivals: Vec<Square> = legal_moves(pre, mv.piece.color)?
        .into_iter()
        .filter(|other| other.piece == mv.piece && other.to == mv.to && other.from != mv.from)
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        return Ok(());
    }

    let shares_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());

    if !shares_file {
        out.push(file_char(mv.from));
    } else if !shares_rank {
        out.push(rank_char(mv.from));
    } else {
        out.push(file_char(mv.from));
        out.push(rank_char(mv.from));
    }

    Ok(())
}

#[inline]
fn file_char(square: Square) -> char {
    char::from(b'a' + square.file())
}

#[inline]
fn rank_char(square: Square) -> char {
    char::from(b'1' + square.rank())
}
