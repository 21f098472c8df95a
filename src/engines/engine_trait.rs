//! Engine abstraction shared by the session controller and the binary.
//!
//! Engines are clients of the rules core: they read `GameState` values and
//! return a chosen `Move`, never mutating a game themselves.

use std::time::Duration;

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Wall-clock budget; once spent the engine answers with its best move so far.
    pub time_limit: Duration,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(&mut self, game_state: &GameState, params: &SearchParams) -> ChessResult<EngineOutput>;
}
