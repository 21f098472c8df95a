//! One-ply material engine.
//!
//! Plays a mate in one when available. Otherwise scores every legal move by
//! the mover's material balance afterwards, penalising quiet moves that put
//! the moved piece where the opponent can take it. Equal scores are broken at
//! random.

use std::time::Instant;

use log::{debug, trace};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{legal_moves, LegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::Move;

/// Share of the moved piece's value charged for leaving it en prise, in percent.
const HANGING_PENALTY_PERCENT: i32 = 90;

pub struct MaterialEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl MaterialEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic tie-breaking for tests and reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    /// Material of `color` minus material of the opponent.
    pub fn material_balance(board: &Board, color: Color) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| {
                let value = Self::piece_value(piece.kind);
                if piece.color == color {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }

    fn score_move(generated: &GeneratedMove, mover: Color) -> ChessResult<i32> {
        let mv = &generated.mv;
        let next = &generated.game_after_move;
        let mut score = Self::material_balance(next.board(), mover);

        if !mv.is_capture() && Self::is_hanging(next, mv)? {
            score -= Self::piece_value(mv.placed_piece().kind) * HANGING_PENALTY_PERCENT / 100;
        }

        Ok(score)
    }

    /// True when the opponent has a legal capture on the square just moved to.
    fn is_hanging(next: &GameState, mv: &Move) -> ChessResult<bool> {
        Ok(legal_moves(next, next.side_to_move())?
            .iter()
            .any(|reply| reply.to == mv.to && reply.is_capture()))
    }

    fn pick(&mut self, candidates: &[Move]) -> ChessResult<Move> {
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| ChessError::CorruptedState("no candidate move to choose from".to_owned()))
    }
}

impl Default for MaterialEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MaterialEngine {
    fn name(&self) -> &str {
        "Plum Rules Material"
    }

    fn choose_move(&mut self, game_state: &GameState, params: &SearchParams) -> ChessResult<EngineOutput> {
        let start = Instant::now();
        let mover = game_state.side_to_move();
        let generated = self.move_generator.generate_legal_moves(game_state)?;

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string material_engine legal_moves {}", generated.len()));
        debug!("{mover} to move, {} legal moves", generated.len());

        if generated.is_empty() {
            return Ok(out);
        }

        let mates: Vec<Move> = generated
            .iter()
            .filter(|g| g.annotations.is_checkmate)
            .map(|g| g.mv)
            .collect();
        if !mates.is_empty() {
            let picked = self.pick(&mates)?;
            debug!("mate in one: {picked}");
            out.info_lines
                .push(format!("info string material_engine mate_in_one {picked}"));
            out.best_move = Some(picked);
            return Ok(out);
        }

        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();
        let mut evaluated = 0usize;

        for g in &generated {
            if !best_moves.is_empty() && start.elapsed() >= params.time_limit {
                debug!(
                    "time limit of {:?} reached after {evaluated} of {} moves",
                    params.time_limit,
                    generated.len()
                );
                out.info_lines.push(format!(
                    "info string material_engine time_limit_hit evaluated {evaluated}"
                ));
                break;
            }

            let value = Self::score_move(g, mover)?;
            trace!("{} scores {value}", g.mv);
            evaluated += 1;

            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(g.mv);
            } else if value == best_value {
                best_moves.push(g.mv);
            }
        }

        let picked = self.pick(&best_moves)?;
        debug!("chose {picked} with score {best_value} among {} tied moves", best_moves.len());
        out.info_lines
            .push(format!("info string material_engine score {best_value}"));
        out.best_move = Some(picked);
        Ok(out)
    }
}
