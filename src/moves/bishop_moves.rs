//! Bishop attack generation.
//!
//! Diagonal rays are cast against the full-board occupancy on every call,
//! so the result includes the first blocker in each direction.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::sliding_rays::{cast_rays, DIAGONAL_STEPS};

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    cast_rays(square, &DIAGONAL_STEPS, occupancy)
}
