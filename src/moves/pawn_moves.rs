use crate::game_state::chess_types::{Bitboard, Color};
use crate::moves::board_masks::{NOT_FILE_A, NOT_FILE_H};

/// Squares attacked by every pawn in `pawns` at once, shifted one rank
/// toward the opponent and one file either way.
#[inline]
pub const fn pawn_attacks(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::White => ((pawns & NOT_FILE_A) << 7) | ((pawns & NOT_FILE_H) << 9),
        Color::Black => ((pawns & NOT_FILE_H) >> 7) | ((pawns & NOT_FILE_A) >> 9),
    }
}

/// Single step toward the opponent's back rank.
#[inline]
pub const fn pawn_push(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::White => pawns << 8,
        Color::Black => pawns >> 8,
    }
}
