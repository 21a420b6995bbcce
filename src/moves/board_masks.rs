//! Square indexing and file/rank mask constants.
//!
//! Squares are file-major within a rank: `index = rank * 8 + file`, so `a1`
//! is bit 0 and `h8` is bit 63. The `NOT_FILE_*` masks are applied before a
//! horizontal shift so a piece on the edge cannot wrap onto the opposite side.

use crate::game_state::chess_types::{Bitboard, Square};

pub const FILE_A: Bitboard = 0x0101_0101_0101_0101;
pub const FILE_B: Bitboard = FILE_A << 1;
pub const FILE_G: Bitboard = FILE_A << 6;
pub const FILE_H: Bitboard = FILE_A << 7;

pub const NOT_FILE_A: Bitboard = !FILE_A;
pub const NOT_FILE_H: Bitboard = !FILE_H;
pub const NOT_FILE_AB: Bitboard = !(FILE_A | FILE_B);
pub const NOT_FILE_GH: Bitboard = !(FILE_G | FILE_H);

pub const RANK_1: Bitboard = 0x0000_0000_0000_00FF;
pub const RANK_2: Bitboard = RANK_1 << 8;
pub const RANK_7: Bitboard = RANK_1 << 48;
pub const RANK_8: Bitboard = RANK_1 << 56;

#[inline]
pub const fn square_index(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn bit_at(square: Square) -> Bitboard {
    1u64 << square
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}
