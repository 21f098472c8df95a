//! FEN-to-GameState parser.
//!
//! Position setup for tests, tooling and the perft benchmark. Boards without
//! exactly one king per colour, or where the side not to move stands in
//! check, are rejected so a corrupted state cannot be built through this path.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{king_square_on_board, square_attacked_on_board};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let resting_king = king_square_on_board(&board, side_to_move.opposite())?;
    if square_attacked_on_board(&board, resting_king, side_to_move) {
        return Err(invalid(&format!("{} is in check with {side_to_move} to move", side_to_move.opposite())));
    }
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u32>()
        .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?;
    // Some tools write 0 here; treat it as the first move.
    let fullmove_number = fullmove_part
        .parse::<u32>()
        .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?
        .max(1);

    Ok(GameState::from_setup(
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    ))
}

fn invalid(detail: &str) -> ChessError {
    ChessError::InvalidFen(detail.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;
            let square = Square::new(file, board_rank)
                .ok_or_else(|| invalid(&format!("rank {} has too many files", board_rank + 1)))?;
            board.place(square, piece);
            file += 1;
        }

        if file != 8 {
            return Err(invalid(&format!("rank {} does not sum to 8 files", board_rank + 1)));
        }
    }

    for color in [Color::White, Color::Black] {
        let kings = board.mask_of(Piece::new(PieceKind::King, color)).count_ones();
        if kings != 1 {
            return Err(invalid(&format!("expected one {color} king, found {kings}")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let (mut wk, mut wq, mut bk, mut bq) = (false, false, false, false);
    for ch in castling_part.chars() {
        match ch {
            'K' => wk = true,
            'Q' => wq = true,
            'k' => bk = true,
            'q' => bq = true,
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        }
    }

    Ok(CastlingRights::from_flags(wk, wq, bk, bq))
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("en-passant square '{en_passant_part}'")))?;
    if square.rank() != 2 && square.rank() != 5 {
        return Err(invalid(&format!("en-passant square '{en_passant_part}' is not on rank 3 or 6")));
    }
    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
