//! Attack and check detection.
//!
//! Answers "is this square attacked by that side" kind by kind, cheapest
//! first, and returns on the first hit. Slider attacks are cast from the
//! target square outward and intersected with the attacker's sliders, which
//! is equivalent to casting from every slider toward the target.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::board_masks::bit_at;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

pub fn is_square_attacked(position: &Position, square: Square, attacker: Color) -> bool {
    let target_mask = bit_at(square);

    let pawns = position.pieces(attacker, PieceKind::Pawn);
    if pawn_attacks(attacker, pawns) & target_mask != 0 {
        return true;
    }

    let knights = position.pieces(attacker, PieceKind::Knight);
    if knight_attacks(square) & knights != 0 {
        return true;
    }

    let kings = position.pieces(attacker, PieceKind::King);
    if king_attacks(square) & kings != 0 {
        return true;
    }

    let occupancy = position.occupancy_all();
    let queens = position.pieces(attacker, PieceKind::Queen);

    let bishops_queens = position.pieces(attacker, PieceKind::Bishop) | queens;
    if bishops_queens != 0 && bishop_attacks(square, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = position.pieces(attacker, PieceKind::Rook) | queens;
    if rooks_queens != 0 && rook_attacks(square, occupancy) & rooks_queens != 0 {
        return true;
    }

    false
}

/// A side without a king is never in check.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = position.king_square(color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

/// Caller-facing name for [`is_king_in_check`].
#[inline]
pub fn is_in_check(position: &Position, color: Color) -> bool {
    is_king_in_check(position, color)
}
