use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::sliding_rays::{cast_rays, ORTHOGONAL_STEPS};

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    cast_rays(square, &ORTHOGONAL_STEPS, occupancy)
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;

    #[test]
    fn rook_on_empty_board_from_d4_sees_fourteen_squares() {
        let d4 = 27u8;
        assert_eq!(rook_attacks(d4, 0).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
    }
}
