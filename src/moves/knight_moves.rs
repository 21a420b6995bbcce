use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::board_masks::{NOT_FILE_A, NOT_FILE_AB, NOT_FILE_GH, NOT_FILE_H};

pub const KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

const fn generate_knight_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = knight_attack_mask(1u64 << sq);
        sq += 1;
    }

    table
}

/// Knight jumps from a single-bit mask: one-file hops shifted two ranks,
/// two-file hops shifted one rank.
const fn knight_attack_mask(bit: Bitboard) -> Bitboard {
    let one_file = ((bit << 1) & NOT_FILE_A) | ((bit >> 1) & NOT_FILE_H);
    let two_files = ((bit << 2) & NOT_FILE_AB) | ((bit >> 2) & NOT_FILE_GH);

    (one_file << 16) | (one_file >> 16) | (two_files << 8) | (two_files >> 8)
}
