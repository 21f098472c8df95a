//! Crate root module declarations for the Plum Rules chess rules engine.
//!
//! The rules core (`game_state`, `moves`, `move_generation` and the notation
//! helpers in `utils`) is a set of pure functions over `GameState` values.
//! `engines` and `session` are clients layered on top of it.

pub mod game_state {
    pub mod board;
    pub mod chess_errors;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
}

pub mod moves {
    pub mod leaper_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod slider_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_slider;
}

pub mod engines {
    pub mod engine_material;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
    pub mod standard_algebraic;
}

pub use game_state::board::Board;
pub use game_state::chess_errors::{ChessError, ChessResult};
pub use game_state::chess_types::{CastleSide, CastlingRights, Color, Piece, PieceKind, Square};
pub use game_state::game_state::{GameState, PositionKey};
pub use game_state::game_status::{status, DrawReason, GameStatus};
pub use move_generation::legal_move_apply::execute_move;
pub use move_generation::legal_move_checks::{is_in_check, is_square_attacked, king_square};
pub use move_generation::legal_move_generator::{is_legal_move, legal_moves, legal_moves_from};
pub use moves::move_descriptions::Move;
pub use utils::standard_algebraic::render_notation;

/// Standard starting position, White to move.
#[inline]
pub fn new_game() -> GameState {
    GameState::new_game()
}
