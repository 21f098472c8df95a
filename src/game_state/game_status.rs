//! Game-end classification.
//!
//! Checkmate and stalemate come first. Draw conditions are only consulted
//! when the side to move still has a legal move: insufficient material
//! (forced), then threefold repetition and the fifty-move rule (claimable).

use std::fmt;

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_CLAIM_COUNT};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl DrawReason {
    /// Repetition and the fifty-move rule are offers a player may claim; the
    /// controller decides whether they end the game.
    #[inline]
    pub const fn is_claim(self) -> bool {
        matches!(self, DrawReason::ThreefoldRepetition | DrawReason::FiftyMoveRule)
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::FiftyMoveRule => "fifty-move rule",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    /// Outcomes that end the game without anyone claiming them.
    #[inline]
    pub const fn is_forced_end(self) -> bool {
        match self {
            GameStatus::Checkmate { .. } | GameStatus::Stalemate => true,
            GameStatus::Draw(reason) => !reason.is_claim(),
            GameStatus::InProgress => false,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

pub fn status(game_state: &GameState) -> ChessResult<GameStatus> {
    let side = game_state.side_to_move;
    if legal_moves(game_state, side)?.is_empty() {
        return Ok(if is_in_check(game_state, side)? {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Stalemate
        });
    }

    if is_insufficient_material(game_state) {
        return Ok(GameStatus::Draw(DrawReason::InsufficientMaterial));
    }
    if is_threefold_repetition(game_state) {
        return Ok(GameStatus::Draw(DrawReason::ThreefoldRepetition));
    }
    if is_fifty_move_rule(game_state) {
        return Ok(GameStatus::Draw(DrawReason::FiftyMoveRule));
    }

    Ok(GameStatus::InProgress)
}

pub fn is_checkmate(game_state: &GameState) -> ChessResult<bool> {
    let side = game_state.side_to_move;
    Ok(is_in_check(game_state, side)? && legal_moves(game_state, side)?.is_empty())
}

pub fn is_stalemate(game_state: &GameState) -> ChessResult<bool> {
    let side = game_state.side_to_move;
    Ok(!is_in_check(game_state, side)? && legal_moves(game_state, side)?.is_empty())
}

#[inline]
pub fn is_threefold_repetition(game_state: &GameState) -> bool {
    game_state.repetition_count() >= REPETITION_CLAIM_COUNT
}

#[inline]
pub fn is_fifty_move_rule(game_state: &GameState) -> bool {
    game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVES
}

/// Bare kings, or a single minor piece (one bishop or one knight) on the
/// whole board besides them.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let mut minors = 0usize;
    for (_, piece) in game_state.board.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Bishop | PieceKind::Knight => minors += 1,
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }
    minors <= 1
}
