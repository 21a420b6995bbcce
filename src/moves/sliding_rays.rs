//! On-the-fly ray casting for sliding pieces.
//!
//! Slider attacks are not tabulated. A ray walks outward from the origin,
//! includes the first occupied square it meets (friend or foe) and stops
//! there; callers mask off their own pieces afterwards.

use crate::game_state::chess_types::{Bitboard, Square};

pub const DIAGONAL_STEPS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn cast_rays(square: Square, steps: &[(i32, i32)], occupancy: Bitboard) -> Bitboard {
    let sq = square as i32;
    steps.iter().fold(0u64, |attacks, &(file_step, rank_step)| {
        attacks | trace_ray(sq, file_step, rank_step, occupancy)
    })
}

fn trace_ray(square: i32, file_step: i32, rank_step: i32, occupancy: Bitboard) -> Bitboard {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let target = (rank * 8 + file) as usize;
        let bit = 1u64 << target;
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}
