//! Game controller.
//!
//! Owns the current `GameState` value and sequences turns: square selection,
//! the promotion prompt, engine replies, the notation log and the draw-claim
//! policy. Rule failures come back as `MoveRejected` events and leave the
//! game where it was; a corrupted state is returned as an error.

use log::{debug, info, warn};

use crate::engines::engine_material::MaterialEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::{status, DrawReason, GameStatus};
use crate::move_generation::legal_move_apply::execute_move;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::move_descriptions::Move;
use crate::session::session_config::{GameMode, SessionConfig};
use crate::utils::long_algebraic::build_candidate_move;
use crate::utils::standard_algebraic::render_notation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An own piece was selected; these are its legal moves.
    Selected { square: Square, legal_moves: Vec<Move> },
    SelectionCleared,
    /// The move needs a promotion piece before it can be played.
    PromotionRequired { from: Square, to: Square },
    MoveRejected(ChessError),
    MovePlayed {
        mv: Move,
        notation: String,
        status: GameStatus,
    },
    /// The engine holds the turn; human input is ignored.
    EngineToMove,
    /// A draw was claimed but none is available.
    ClaimRefused,
    GameOver(GameStatus),
}

pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    selected: Option<Square>,
    pending_promotion: Option<Move>,
    notation_log: Vec<String>,
    outcome: Option<GameStatus>,
    engine: Option<Box<dyn Engine>>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        let engine: Option<Box<dyn Engine>> = match config.mode {
            GameMode::LocalTwoPlayer => None,
            GameMode::VersusEngine { .. } => Some(Box::new(MaterialEngine::new())),
        };
        Self::assemble(config, GameState::new_game(), engine, None)
    }

    /// Starts from an arbitrary position, with an explicit engine for
    /// `VersusEngine` mode (ignored otherwise).
    pub fn from_state(
        config: SessionConfig,
        state: GameState,
        engine: Option<Box<dyn Engine>>,
    ) -> ChessResult<Self> {
        let current = status(&state)?;
        let outcome = Self::ends_game(&config, current).then_some(current);
        let engine = match config.mode {
            GameMode::LocalTwoPlayer => None,
            GameMode::VersusEngine { .. } => {
                Some(engine.unwrap_or_else(|| Box::new(MaterialEngine::new()) as Box<dyn Engine>))
            }
        };
        Ok(Self::assemble(config, state, engine, outcome))
    }

    fn assemble(
        config: SessionConfig,
        state: GameState,
        engine: Option<Box<dyn Engine>>,
        outcome: Option<GameStatus>,
    ) -> Self {
        Self {
            config,
            state,
            selected: None,
            pending_promotion: None,
            notation_log: Vec::new(),
            outcome,
            engine,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<&Move> {
        self.pending_promotion.as_ref()
    }

    /// SAN of every move played in this session, in order.
    #[inline]
    pub fn notation_log(&self) -> &[String] {
        &self.notation_log
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameStatus> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn engine_color(&self) -> Option<Color> {
        match self.config.mode {
            GameMode::LocalTwoPlayer => None,
            GameMode::VersusEngine { engine_color } => Some(engine_color),
        }
    }

    pub fn is_engine_turn(&self) -> bool {
        !self.is_over() && self.engine_color() == Some(self.state.side_to_move())
    }

    pub fn select_square(&mut self, square: Square) -> ChessResult<SessionEvent> {
        if let Some(event) = self.blocked_event() {
            return Ok(event);
        }

        let own_piece = self
            .state
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.state.side_to_move());

        if own_piece {
            self.selected = Some(square);
            return Ok(SessionEvent::Selected {
                square,
                legal_moves: legal_moves_from(&self.state, square)?,
            });
        }

        match self.selected {
            Some(from) => self.attempt_move(from, square),
            None => Ok(SessionEvent::SelectionCleared),
        }
    }

    pub fn attempt_move(&mut self, from: Square, to: Square) -> ChessResult<SessionEvent> {
        if let Some(event) = self.blocked_event() {
            return Ok(event);
        }

        match build_candidate_move(&self.state, from, to, None) {
            Ok(mv) => self.play(mv),
            Err(err) => Ok(self.reject(err)),
        }
    }

    /// Plays a fully formed move from the human side.
    pub fn submit_move(&mut self, mv: Move) -> ChessResult<SessionEvent> {
        if let Some(event) = self.blocked_event() {
            return Ok(event);
        }
        self.play(mv)
    }

    pub fn choose_promotion(&mut self, kind: PieceKind) -> ChessResult<SessionEvent> {
        let Some(pending) = self.pending_promotion.take() else {
            return Ok(self.reject(ChessError::InvalidMoveText("no promotion is pending".to_owned())));
        };

        if !kind.is_promotion_choice() {
            self.pending_promotion = Some(pending);
            return Ok(SessionEvent::MoveRejected(ChessError::InvalidMoveText(format!(
                "cannot promote to {kind:?}"
            ))));
        }

        self.play(pending.with_promotion(kind))
    }

    /// Lets the engine move when it holds the turn. `None` when it does not.
    pub fn play_engine_move(&mut self) -> ChessResult<Option<SessionEvent>> {
        if !self.is_engine_turn() {
            return Ok(None);
        }

        let params = self.config.search_params();
        let Some(engine) = self.engine.as_mut() else {
            return Ok(None);
        };

        let output = engine.choose_move(&self.state, &params)?;
        for line in &output.info_lines {
            debug!("{}: {line}", engine.name());
        }

        match output.best_move {
            Some(mv) => self.play(mv).map(Some),
            None => {
                let current = status(&self.state)?;
                info!("game over: {current}");
                self.outcome = Some(current);
                Ok(Some(SessionEvent::GameOver(current)))
            }
        }
    }

    /// Accepts a repetition or fifty-move draw when one is claimable.
    pub fn claim_draw(&mut self) -> ChessResult<SessionEvent> {
        if let Some(outcome) = self.outcome {
            return Ok(SessionEvent::GameOver(outcome));
        }

        let current = status(&self.state)?;
        match current {
            GameStatus::Draw(reason) if reason.is_claim() => {
                info!("draw claimed by {}: {reason}", self.state.side_to_move());
                self.outcome = Some(current);
                Ok(SessionEvent::GameOver(current))
            }
            _ => Ok(SessionEvent::ClaimRefused),
        }
    }

    /// Draw the side to move could claim right now, if any.
    pub fn claimable_draw(&self) -> ChessResult<Option<DrawReason>> {
        Ok(match status(&self.state)? {
            GameStatus::Draw(reason) if reason.is_claim() => Some(reason),
            _ => None,
        })
    }

    fn blocked_event(&self) -> Option<SessionEvent> {
        if let Some(outcome) = self.outcome {
            return Some(SessionEvent::GameOver(outcome));
        }
        if let Some(pending) = &self.pending_promotion {
            return Some(SessionEvent::PromotionRequired {
                from: pending.from,
                to: pending.to,
            });
        }
        if self.is_engine_turn() {
            return Some(SessionEvent::EngineToMove);
        }
        None
    }

    fn play(&mut self, mv: Move) -> ChessResult<SessionEvent> {
        let next = match execute_move(&self.state, mv) {
            Ok(next) => next,
            Err(ChessError::IncompletePromotion { from, to }) => {
                self.selected = None;
                self.pending_promotion = Some(mv);
                return Ok(SessionEvent::PromotionRequired { from, to });
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => return Ok(self.reject(err)),
        };

        let notation = render_notation(&self.state, &mv, &next)?;
        let current = status(&next)?;
        info!("{} played {notation}", mv.piece.color);

        self.state = next;
        self.selected = None;
        self.notation_log.push(notation.clone());

        if Self::ends_game(&self.config, current) {
            info!("game over: {current}");
            self.outcome = Some(current);
        }

        Ok(SessionEvent::MovePlayed {
            mv,
            notation,
            status: current,
        })
    }

    fn reject(&mut self, err: ChessError) -> SessionEvent {
        warn!("move rejected: {err}");
        self.selected = None;
        SessionEvent::MoveRejected(err)
    }

    fn ends_game(config: &SessionConfig, current: GameStatus) -> bool {
        match current {
            GameStatus::InProgress => false,
            GameStatus::Draw(reason) if reason.is_claim() => config.auto_accept_draw_claims,
            _ => true,
        }
    }
}
