use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::chess_types::*;
use crate::moves::board_masks::{bit_at, rank_of};
use crate::moves::pawn_moves::{pawn_attacks, pawn_push};

/// Pseudo-legal destinations of the pawn on `from`.
///
/// Captures are restricted to enemy-occupied squares, except the en-passant
/// target which is always empty.
pub fn pawn_destinations(position: &Position, from: Square, side: Color) -> Bitboard {
    let pawn = bit_at(from);
    let empty = !position.occupancy_all();
    let enemy_occ = position.occupancy(side.opposite());

    let one_step = pawn_push(side, pawn) & empty;
    let mut moves = one_step;

    if one_step != 0 && rank_of(from) == pawn_home_rank(side) {
        moves |= pawn_push(side, one_step) & empty;
    }

    let attacks = pawn_attacks(side, pawn);
    moves |= attacks & enemy_occ;

    if let Some(ep_square) = position.en_passant_square {
        moves |= attacks & bit_at(ep_square);
    }

    moves
}
