//! Authoritative in-place move execution.
//!
//! Exactly one of three paths runs per call: castling, en-passant capture, or
//! the generic capture/move/promotion path. Every path leaves the twelve piece
//! sets, the en-passant target and the castling rights mutually consistent.
//! The executor trusts its caller on legality; only malformed requests (bad
//! square, empty origin, wrong side) are refused, and a refusal never
//! mutates the position.

use tracing::{debug, trace};

use crate::game_state::chess_rules::{
    castling_lane_for_king_move, castling_right_for_rook_square, king_home, pawn_home_rank,
    promotion_rank,
};
use crate::game_state::chess_types::*;
use crate::move_generation::move_errors::{MoveError, MoveResult};
use crate::moves::board_masks::{bit_at, file_of, rank_of};

/// Which execution path a move took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    DoublePawnPush,
    Capture,
    EnPassant,
    Castle,
    Promotion { captured: bool },
}

/// Execute `from -> to` for `side`, returning `false` for malformed requests.
#[inline]
pub fn make_move(
    position: &mut Position,
    from: Square,
    to: Square,
    side: Color,
    promotion: Option<PieceKind>,
) -> bool {
    try_make_move(position, from, to, side, promotion).is_ok()
}

/// Caller-facing name for [`make_move`].
#[inline]
pub fn apply_move(
    position: &mut Position,
    from: Square,
    to: Square,
    side: Color,
    promotion: Option<PieceKind>,
) -> bool {
    make_move(position, from, to, side, promotion)
}

/// Same as [`make_move`] but reports why a request was refused.
pub fn try_make_move(
    position: &mut Position,
    from: Square,
    to: Square,
    side: Color,
    promotion: Option<PieceKind>,
) -> MoveResult<MoveKind> {
    for square in [from, to] {
        if square > 63 {
            debug!(square, "rejected move: square out of range");
            return Err(MoveError::SquareOutOfRange { square });
        }
    }

    let Some(piece) = position.piece_at(from) else {
        debug!(from, "rejected move: empty origin");
        return Err(MoveError::EmptySquare { square: from });
    };
    if piece.color != side {
        debug!(from, %side, "rejected move: piece belongs to the other side");
        return Err(MoveError::WrongSide { square: from, side });
    }

    let kind = if let Some(kind) = castle(position, piece, from, to) {
        kind
    } else if let Some(kind) = capture_en_passant(position, piece, from, to) {
        kind
    } else {
        generic_move(position, piece, from, to, promotion)
    };

    trace!(from, to, %side, ?kind, "move executed");
    Ok(kind)
}

fn castle(position: &mut Position, piece: Piece, from: Square, to: Square) -> Option<MoveKind> {
    if piece.kind != PieceKind::King || from != king_home(piece.color) {
        return None;
    }
    let lane = castling_lane_for_king_move(piece.color, from, to)?;
    // Without its rook on the corner and an open lane this is a plain king step.
    let rook_home = position.pieces(piece.color, PieceKind::Rook) & bit_at(lane.rook_from) != 0;
    if !rook_home || position.occupancy_all() & lane.between != 0 {
        return None;
    }

    let king = position.pieces_mut(piece.color, PieceKind::King);
    *king = (*king & !bit_at(lane.king_from)) | bit_at(lane.king_to);
    let rooks = position.pieces_mut(piece.color, PieceKind::Rook);
    *rooks = (*rooks & !bit_at(lane.rook_from)) | bit_at(lane.rook_to);

    position.castling_rights &= !castling_rights_of(piece.color);
    position.en_passant_square = None;
    Some(MoveKind::Castle)
}

fn capture_en_passant(
    position: &mut Position,
    piece: Piece,
    from: Square,
    to: Square,
) -> Option<MoveKind> {
    if piece.kind != PieceKind::Pawn
        || position.en_passant_square != Some(to)
        || file_of(from) == file_of(to)
    {
        return None;
    }

    let captured_square = match piece.color {
        Color::White => to.checked_sub(8)?,
        Color::Black => Some(to + 8).filter(|&square| square < 64)?,
    };

    let pawns = position.pieces_mut(piece.color, PieceKind::Pawn);
    *pawns = (*pawns & !bit_at(from)) | bit_at(to);
    *position.pieces_mut(piece.color.opposite(), PieceKind::Pawn) &= !bit_at(captured_square);

    position.en_passant_square = None;
    revoke_castling_rights(position, piece, from, to);
    Some(MoveKind::EnPassant)
}

fn generic_move(
    position: &mut Position,
    piece: Piece,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> MoveKind {
    let captured = position.occupancy(piece.color.opposite()) & bit_at(to) != 0;
    position.clear_square_for(piece.color.opposite(), to);
    *position.pieces_mut(piece.color, piece.kind) &= !bit_at(from);

    let promotes = piece.kind == PieceKind::Pawn && rank_of(to) == promotion_rank(piece.color);
    let landing_kind = if promotes {
        promotion
            .filter(|kind| kind.is_promotion_target())
            .unwrap_or(PieceKind::Queen)
    } else {
        piece.kind
    };
    *position.pieces_mut(piece.color, landing_kind) |= bit_at(to);

    let double_push = piece.kind == PieceKind::Pawn
        && rank_of(from) == pawn_home_rank(piece.color)
        && from.abs_diff(to) == 16;
    position.en_passant_square = if double_push {
        Some((from + to) / 2)
    } else {
        None
    };

    revoke_castling_rights(position, piece, from, to);

    if promotes {
        MoveKind::Promotion { captured }
    } else if captured {
        MoveKind::Capture
    } else if double_push {
        MoveKind::DoublePawnPush
    } else {
        MoveKind::Quiet
    }
}

/// Rights only ever shrink: king moves, rooks leaving a corner, and anything
/// landing on a corner all clear bits.
fn revoke_castling_rights(position: &mut Position, piece: Piece, from: Square, to: Square) {
    if piece.kind == PieceKind::King {
        position.castling_rights &= !castling_rights_of(piece.color);
    }
    if piece.kind == PieceKind::Rook {
        position.castling_rights &= !castling_right_for_rook_square(from);
    }
    position.castling_rights &= !castling_right_for_rook_square(to);
}
