//! Perft: exhaustive legal-move tree walk used to validate generation and
//! execution against published reference counts.

use std::sync::Arc;
use std::thread;

use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Perft with the crate's legal move generator.
pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft_with(&LegalMoveGenerator, game_state, depth)
}

pub fn perft_with<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut total = PerftCounts::default();

    for mv in root_moves {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

/// Splits the root moves across one thread each.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &mv, depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| ChessError::CorruptedState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    generated: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if current_depth == search_depth {
        let mv = &generated.mv;
        counts.nodes += 1;

        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant {
            counts.en_passant += 1;
        }
        if mv.is_castling {
            counts.castles += 1;
        }
        if mv.promotion_piece.is_some() {
            counts.promotions += 1;
        }
        if generated.annotations.gives_check {
            counts.checks += 1;
        }
        if generated.annotations.is_checkmate {
            counts.checkmates += 1;
        }

        return Ok(());
    }

    let moves = generator.generate_legal_moves(&generated.game_after_move)?;
    for child in moves {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{perft, perft_multi_threaded, PerftCounts};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4_FEN: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
    const POSITION_5_FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    fn nodes(fen: &str, depth: u8) -> usize {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        perft(&game, depth).expect("perft should run").nodes
    }

    #[test]
    fn depth_zero_counts_single_node() {
        let game = GameState::new_game();
        assert_eq!(
            perft(&game, 0).expect("perft should run"),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_reference_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).expect("perft should run").nodes, 20);
        assert_eq!(perft(&game, 2).expect("perft should run").nodes, 400);

        let depth_3 = perft(&game, 3).expect("perft should run");
        assert_eq!(depth_3.nodes, 8_902);
        assert_eq!(depth_3.captures, 34);
        assert_eq!(depth_3.checks, 12);
        assert_eq!(depth_3.checkmates, 0);
    }

    #[test]
    fn kiwipete_reference_counts() {
        let game = GameState::from_fen(KIWIPETE_FEN).expect("FEN should parse");
        let depth_1 = perft(&game, 1).expect("perft should run");
        assert_eq!(depth_1.nodes, 48);
        assert_eq!(depth_1.captures, 8);
        assert_eq!(depth_1.castles, 2);

        let depth_2 = perft(&game, 2).expect("perft should run");
        assert_eq!(depth_2.nodes, 2_039);
        assert_eq!(depth_2.captures, 351);
        assert_eq!(depth_2.en_passant, 1);
        assert_eq!(depth_2.castles, 91);
        assert_eq!(depth_2.checks, 3);
    }

    #[test]
    fn endgame_and_promotion_positions() {
        assert_eq!(nodes(POSITION_3_FEN, 1), 14);
        assert_eq!(nodes(POSITION_3_FEN, 2), 191);
        assert_eq!(nodes(POSITION_3_FEN, 3), 2_812);
        assert_eq!(nodes(POSITION_4_FEN, 1), 6);
        assert_eq!(nodes(POSITION_4_FEN, 2), 264);
        assert_eq!(nodes(POSITION_5_FEN, 1), 44);
        assert_eq!(nodes(POSITION_5_FEN, 2), 1_486);
    }

    #[test]
    fn multi_threaded_matches_single_thread() {
        let game = GameState::from_fen(KIWIPETE_FEN).expect("FEN should parse");
        let single = perft(&game, 2).expect("perft should run");
        let multi = perft_multi_threaded(Arc::new(LegalMoveGenerator), &game, 2).expect("perft should run");
        assert_eq!(single, multi);
    }
}
