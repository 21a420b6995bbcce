//! Canonical chess-rule constants.
//!
//! Starting array and castling geometry. Castling is described as data so the
//! generator and the executor read the same squares.

use crate::game_state::chess_types::*;
use crate::moves::board_masks::bit_at;

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const E1: Square = 4;
pub const E8: Square = 60;
pub const A1: Square = 0;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const H8: Square = 63;

/// Home square of each side's king.
#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => E1,
        Color::Black => E8,
    }
}

/// Rank index (`0..=7`) on which `color` promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Rank index from which `color` may double push.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// One castling option: which right gates it and which squares it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub color: Color,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: Bitboard,
    /// Start, passed-through and destination squares; none may be attacked.
    pub king_path: [Square; 3],
}

pub const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        color: Color::White,
        right: CASTLE_WHITE_KINGSIDE,
        king_from: E1,
        king_to: 6,
        rook_from: H1,
        rook_to: 5,
        between: bit_at(5) | bit_at(6),
        king_path: [E1, 5, 6],
    },
    CastlingLane {
        color: Color::White,
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: E1,
        king_to: 2,
        rook_from: A1,
        rook_to: 3,
        between: bit_at(1) | bit_at(2) | bit_at(3),
        king_path: [E1, 3, 2],
    },
    CastlingLane {
        color: Color::Black,
        right: CASTLE_BLACK_KINGSIDE,
        king_from: E8,
        king_to: 62,
        rook_from: H8,
        rook_to: 61,
        between: bit_at(61) | bit_at(62),
        king_path: [E8, 61, 62],
    },
    CastlingLane {
        color: Color::Black,
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: E8,
        king_to: 58,
        rook_from: A8,
        rook_to: 59,
        between: bit_at(57) | bit_at(58) | bit_at(59),
        king_path: [E8, 59, 58],
    },
];

/// The two lanes available to `color`.
#[inline]
pub fn castling_lanes(color: Color) -> &'static [CastlingLane] {
    match color {
        Color::White => &CASTLING_LANES[..2],
        Color::Black => &CASTLING_LANES[2..],
    }
}

/// The lane whose king move is `from -> to`, if any.
pub fn castling_lane_for_king_move(
    color: Color,
    from: Square,
    to: Square,
) -> Option<&'static CastlingLane> {
    castling_lanes(color)
        .iter()
        .find(|lane| lane.king_from == from && lane.king_to == to)
}

/// Right lost when a rook leaves, or anything lands on, `square`.
#[inline]
pub const fn castling_right_for_rook_square(square: Square) -> CastlingRights {
    match square {
        A1 => CASTLE_WHITE_QUEENSIDE,
        H1 => CASTLE_WHITE_KINGSIDE,
        A8 => CASTLE_BLACK_QUEENSIDE,
        H8 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}
