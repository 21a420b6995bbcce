//! Destination generation: pseudo-legal dispatch and the legality filter.
//!
//! Destinations are bitmasks, one per origin square, which is what a caller
//! highlighting a selected piece wants. The legality filter is the single
//! authoritative gate: every candidate is played on a scratch copy and kept
//! only if the mover's king is safe afterwards.

use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::king_destinations;
use crate::move_generation::legal_moves_pawn::pawn_destinations;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::board_masks::{bit_at, rank_of};
use crate::moves::knight_moves::knight_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Pseudo-legal destinations of the piece on `square`, ignoring self-check.
///
/// An empty or out-of-range square, or a piece of the other side, yields an
/// empty mask.
pub fn moves_from(position: &Position, square: Square, side: Color) -> Bitboard {
    if square > 63 {
        return 0;
    }
    let Some(piece) = position.piece_at(square) else {
        return 0;
    };
    if piece.color != side {
        return 0;
    }

    let own_occ = position.occupancy(side);
    let occupancy = position.occupancy_all();

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(position, square, side),
        PieceKind::Knight => knight_attacks(square) & !own_occ,
        PieceKind::Bishop => bishop_attacks(square, occupancy) & !own_occ,
        PieceKind::Rook => rook_attacks(square, occupancy) & !own_occ,
        PieceKind::Queen => queen_attacks(square, occupancy) & !own_occ,
        PieceKind::King => king_destinations(position, square, side),
    }
}

/// Destinations from `square` that do not leave `side`'s king in check.
pub fn legal_moves_from(position: &Position, square: Square, side: Color) -> Bitboard {
    let mut legal = 0u64;
    let mut pseudo = moves_from(position, square, side);

    while pseudo != 0 {
        let to = pseudo.trailing_zeros() as Square;
        pseudo &= pseudo - 1;

        let mut scratch = *position;
        if make_move(&mut scratch, square, to, side, None) && !is_king_in_check(&scratch, side) {
            legal |= bit_at(to);
        }
    }

    legal
}

/// Caller-facing name for [`legal_moves_from`].
#[inline]
pub fn legal_destinations(position: &Position, square: Square, side: Color) -> Bitboard {
    legal_moves_from(position, square, side)
}

/// True iff some piece of `side` has at least one legal destination.
pub fn has_any_legal_move(position: &Position, side: Color) -> bool {
    let mut own = position.occupancy(side);
    while own != 0 {
        let from = own.trailing_zeros() as Square;
        if legal_moves_from(position, from, side) != 0 {
            return true;
        }
        own &= own - 1;
    }
    false
}

/// True iff `from -> to` is a pawn reaching its far rank.
pub fn is_promotion_move(position: &Position, from: Square, to: Square) -> bool {
    if from > 63 || to > 63 {
        return false;
    }
    match position.piece_at(from) {
        Some(Piece {
            color,
            kind: PieceKind::Pawn,
        }) => rank_of(to) == promotion_rank(color),
        _ => false,
    }
}

/// Every legal move of `side` as a list, with promotions expanded into one
/// entry per promotion choice.
pub fn legal_moves(position: &Position, side: Color) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    let mut own = position.occupancy(side);

    while own != 0 {
        let from = own.trailing_zeros() as Square;
        own &= own - 1;

        let mut targets = legal_moves_from(position, from, side);
        while targets != 0 {
            let to = targets.trailing_zeros() as Square;
            targets &= targets - 1;

            if is_promotion_move(position, from, to) {
                for kind in PieceKind::PROMOTIONS {
                    out.push(ChessMove::with_promotion(from, to, kind));
                }
            } else {
                out.push(ChessMove::new(from, to));
            }
        }
    }

    out
}
