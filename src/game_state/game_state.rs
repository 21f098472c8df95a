//! Immutable game snapshot.
//!
//! `GameState` holds the board, side to move, castling rights, en-passant
//! target, clocks and both histories. Fields are crate-private: outside the
//! crate a new state is only obtained from `new_game`, `from_fen`, or by
//! executing a legal move, and every execution returns a fresh value while the
//! previous one stays valid.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Repetition-relevant part of a position: placement, side to move,
/// castling rights and en-passant target. Move counters are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) move_history: Vec<Move>,
    pub(crate) position_history: Vec<PositionKey>,
}

impl GameState {
    /// Standard starting position, White to move, all castling rights.
    pub fn new_game() -> Self {
        Self::from_setup(Board::standard(), Color::White, CastlingRights::ALL, None, 0, 1)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Builds a state with empty move history whose position history holds
    /// the key of this setup only.
    pub(crate) fn from_setup(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            move_history: Vec::new(),
            position_history: Vec::new(),
        };
        state.position_history.push(state.position_key());
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    #[inline]
    pub fn position_history(&self) -> &[PositionKey] {
        &self.position_history
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn position_key(&self) -> PositionKey {
        PositionKey {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        }
    }

    /// How many times the current position key appears in the position history.
    pub fn repetition_count(&self) -> usize {
        let current = self.position_key();
        self.position_history
            .iter()
            .filter(|key| **key == current)
            .count()
    }
}
