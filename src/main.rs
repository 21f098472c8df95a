//! Terminal chess game.
//!
//! Moves are typed in long algebraic form (`e2e4`, `e7e8q`). Other commands:
//! `moves` lists the legal moves, `claim` claims an available draw, `quit`
//! leaves. Configuration comes from `PLUM_RULES_*` environment variables and
//! logging from `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::error;

use plum_rules::game_state::chess_errors::ChessError;
use plum_rules::game_state::chess_types::PieceKind;
use plum_rules::{legal_moves, GameStatus};
use plum_rules::session::game_session::{GameSession, SessionEvent};
use plum_rules::session::session_config::SessionConfig;
use plum_rules::utils::long_algebraic::parse_long_algebraic;
use plum_rules::utils::render_game_state::render_game_state;

fn main() -> ExitCode {
    env_logger::init();

    let config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = GameSession::new(config);
    match run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("aborting: {err}");
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(session: &mut GameSession) -> Result<(), ChessError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        while let Some(event) = session.play_engine_move()? {
            report(&event);
        }

        println!("{}", render_game_state(session.state()));
        if let Some(outcome) = session.outcome() {
            println!("Game over: {outcome}");
            println!("{}", session.notation_log().join(" "));
            return Ok(());
        }

        if session.pending_promotion().is_some() {
            print!("Promote to (q, r, b, n): ");
        } else {
            print!("{} to move: ", session.state().side_to_move());
        }
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            return Ok(());
        };
        let input = line.trim();

        let event = if session.pending_promotion().is_some() {
            match input.chars().next().and_then(PieceKind::from_promotion_char) {
                Some(kind) => session.choose_promotion(kind)?,
                None => {
                    println!("Choose one of q, r, b or n.");
                    continue;
                }
            }
        } else {
            match input {
                "" => continue,
                "quit" => return Ok(()),
                "moves" => {
                    let state = session.state();
                    let listed: Vec<String> = legal_moves(state, state.side_to_move())?
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    println!("{}", listed.join(" "));
                    continue;
                }
                "claim" => session.claim_draw()?,
                text => match parse_long_algebraic(text, session.state()) {
                    Ok(mv) => session.submit_move(mv)?,
                    Err(err) => SessionEvent::MoveRejected(err),
                },
            }
        };

        report(&event);
    }
}

fn report(event: &SessionEvent) {
    match event {
        SessionEvent::MovePlayed { notation, status, .. } => {
            println!("{notation}");
            if let GameStatus::Draw(reason) = status {
                if reason.is_claim() {
                    println!("A draw by {reason} can be claimed (type `claim`).");
                }
            }
        }
        SessionEvent::MoveRejected(err) => println!("Rejected: {err}"),
        SessionEvent::PromotionRequired { from, to } => println!("{from}{to} promotes."),
        SessionEvent::ClaimRefused => println!("No draw is available to claim."),
        SessionEvent::EngineToMove => println!("Waiting for the engine."),
        SessionEvent::GameOver(_) | SessionEvent::Selected { .. } | SessionEvent::SelectionCleared => {}
    }
}
