//! King adjacency table.
//!
//! Built once at compile time from single-bit masks; castling is not an
//! attack and is handled by the king move generator.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::board_masks::{NOT_FILE_A, NOT_FILE_H};

pub const KING_ATTACKS: [Bitboard; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let bit = 1u64 << sq;
        let sideways = ((bit << 1) & NOT_FILE_A) | ((bit >> 1) & NOT_FILE_H);
        let row = bit | sideways;

        table[sq] = sideways | (row << 8) | (row >> 8);
        sq += 1;
    }

    table
}
