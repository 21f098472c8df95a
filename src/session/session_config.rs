//! Session configuration, read from the environment.
//!
//! | variable | values | default |
//! |---|---|---|
//! | `PLUM_RULES_MODE` | `local`, `engine-white`, `engine-black` | `local` |
//! | `PLUM_RULES_ENGINE_MS` | engine time budget in milliseconds | `5000` |
//! | `PLUM_RULES_AUTO_DRAW` | `true` / `false` | `false` |
//!
//! `engine-white` means the engine plays White.

use std::time::Duration;

use crate::engines::engine_trait::{SearchParams, DEFAULT_TIME_LIMIT};
use crate::game_state::chess_types::Color;

pub const MODE_VAR: &str = "PLUM_RULES_MODE";
pub const ENGINE_MS_VAR: &str = "PLUM_RULES_ENGINE_MS";
pub const AUTO_DRAW_VAR: &str = "PLUM_RULES_AUTO_DRAW";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    LocalTwoPlayer,
    VersusEngine { engine_color: Color },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionConfigError {
    #[error("unknown PLUM_RULES_MODE value '{0}' (expected local, engine-white or engine-black)")]
    UnknownMode(String),

    #[error("invalid PLUM_RULES_ENGINE_MS value '{0}' (expected milliseconds)")]
    InvalidTimeLimit(String),

    #[error("invalid PLUM_RULES_AUTO_DRAW value '{0}' (expected true or false)")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub engine_time_limit: Duration,
    /// End the game as soon as a repetition or fifty-move draw becomes
    /// claimable instead of waiting for a claim.
    pub auto_accept_draw_claims: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::LocalTwoPlayer,
            engine_time_limit: DEFAULT_TIME_LIMIT,
            auto_accept_draw_claims: false,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, SessionConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SessionConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MODE_VAR) {
            config.mode = match raw.trim().to_ascii_lowercase().as_str() {
                "local" => GameMode::LocalTwoPlayer,
                "engine-white" => GameMode::VersusEngine {
                    engine_color: Color::White,
                },
                "engine-black" => GameMode::VersusEngine {
                    engine_color: Color::Black,
                },
                _ => return Err(SessionConfigError::UnknownMode(raw)),
            };
        }

        if let Some(raw) = lookup(ENGINE_MS_VAR) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| SessionConfigError::InvalidTimeLimit(raw.clone()))?;
            config.engine_time_limit = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(AUTO_DRAW_VAR) {
            config.auto_accept_draw_claims = match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(SessionConfigError::InvalidFlag(raw)),
            };
        }

        Ok(config)
    }

    #[inline]
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            time_limit: self.engine_time_limit,
        }
    }
}
