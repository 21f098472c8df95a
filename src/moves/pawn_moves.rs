use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = build_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = build_pawn_attacks(-1);

/// Diagonal capture targets of a `color` pawn standing on `square`.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

const fn build_pawn_attacks(rank_step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let target_rank = (sq / 8) as i32 + rank_step;
        let mut attacks = 0u64;

        if target_rank >= 0 && target_rank < 8 {
            if file > 0 {
                attacks |= 1u64 << (target_rank * 8 + file - 1);
            }
            if file < 7 {
                attacks |= 1u64 << (target_rank * 8 + file + 1);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Square};

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        let expected = sq("d3").bit() | sq("f3").bit();
        assert_eq!(pawn_attacks(Color::White, sq("e2")), expected);
    }

    #[test]
    fn black_pawn_attacks_from_a7() {
        assert_eq!(pawn_attacks(Color::Black, sq("a7")), sq("b6").bit());
    }

    #[test]
    fn pawns_on_last_rank_attack_nothing() {
        assert_eq!(pawn_attacks(Color::White, sq("c8")), 0);
        assert_eq!(pawn_attacks(Color::Black, sq("c1")), 0);
    }
}
