use crate::game_state::chess_rules::castling_lanes;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::board_masks::bit_at;
use crate::moves::king_moves::king_attacks;

/// Pseudo-legal king destinations: adjacent squares that are neither
/// own-occupied nor attacked, plus castling targets.
pub fn king_destinations(position: &Position, from: Square, side: Color) -> Bitboard {
    let enemy = side.opposite();
    let candidates = king_attacks(from) & !position.occupancy(side);

    let mut safe = 0u64;
    let mut remaining = candidates;
    while remaining != 0 {
        let to = remaining.trailing_zeros() as Square;
        if !is_square_attacked(position, to, enemy) {
            safe |= bit_at(to);
        }
        remaining &= remaining - 1;
    }

    safe | castling_destinations(position, from, side)
}

fn castling_destinations(position: &Position, king_from: Square, side: Color) -> Bitboard {
    let enemy = side.opposite();
    let occupancy = position.occupancy_all();
    let own_rooks = position.pieces(side, PieceKind::Rook);

    let mut targets = 0u64;
    for lane in castling_lanes(side) {
        if lane.king_from != king_from || !position.has_castling_right(lane.right) {
            continue;
        }
        if own_rooks & bit_at(lane.rook_from) == 0 || occupancy & lane.between != 0 {
            continue;
        }
        if lane
            .king_path
            .iter()
            .any(|&square| is_square_attacked(position, square, enemy))
        {
            continue;
        }
        targets |= bit_at(lane.king_to);
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::king_destinations;
    use crate::game_state::chess_types::*;

    fn castling_setup() -> Position {
        let mut position = Position::empty();
        position.put_piece(4, Piece::new(Color::White, PieceKind::King));
        position.put_piece(0, Piece::new(Color::White, PieceKind::Rook));
        position.put_piece(7, Piece::new(Color::White, PieceKind::Rook));
        position.put_piece(60, Piece::new(Color::Black, PieceKind::King));
        position.castling_rights = CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE;
        position
    }

    #[test]
    fn king_cannot_step_onto_attacked_square() {
        let mut position = Position::empty();
        position.put_piece(4, Piece::new(Color::White, PieceKind::King));
        position.put_piece(59, Piece::new(Color::Black, PieceKind::Rook));
        let moves = king_destinations(&position, 4, Color::White);
        assert_eq!(moves & ((1u64 << 3) | (1u64 << 11)), 0);
        assert_ne!(moves & (1u64 << 5), 0);
    }

    #[test]
    fn both_castles_available_when_clear() {
        let position = castling_setup();
        let moves = king_destinations(&position, 4, Color::White);
        assert_ne!(moves & (1u64 << 6), 0);
        assert_ne!(moves & (1u64 << 2), 0);
    }

    #[test]
    fn castling_requires_the_right() {
        let mut position = castling_setup();
        position.castling_rights = CASTLE_WHITE_QUEENSIDE;
        let moves = king_destinations(&position, 4, Color::White);
        assert_eq!(moves & (1u64 << 6), 0);
        assert_ne!(moves & (1u64 << 2), 0);
    }

    #[test]
    fn castling_blocked_by_piece_on_b_file() {
        let mut position = castling_setup();
        position.put_piece(1, Piece::new(Color::White, PieceKind::Knight));
        let moves = king_destinations(&position, 4, Color::White);
        assert_eq!(moves & (1u64 << 2), 0);
        assert_ne!(moves & (1u64 << 6), 0);
    }

    #[test]
    fn cannot_castle_through_attacked_square() {
        let mut position = castling_setup();
        position.put_piece(61, Piece::new(Color::Black, PieceKind::Rook));
        let moves = king_destinations(&position, 4, Color::White);
        assert_eq!(moves & (1u64 << 6), 0);
        assert_ne!(moves & (1u64 << 2), 0);
    }

    #[test]
    fn cannot_castle_out_of_check() {
        let mut position = castling_setup();
        position.put_piece(36, Piece::new(Color::Black, PieceKind::Rook));
        let moves = king_destinations(&position, 4, Color::White);
        assert_eq!(moves & ((1u64 << 6) | (1u64 << 2)), 0);
    }

    #[test]
    fn attacked_b_file_square_does_not_stop_queenside() {
        let mut position = castling_setup();
        position.put_piece(57, Piece::new(Color::Black, PieceKind::Rook));
        let moves = king_destinations(&position, 4, Color::White);
        assert_ne!(moves & (1u64 << 2), 0);
    }
}
