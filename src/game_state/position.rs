//! Position state: twelve piece bitboards plus en-passant and castling state.
//!
//! `Position` is a plain `Copy` value. Speculative move checks and perft take
//! a snapshot with a single copy and restore it the same way, so adding a
//! field can never leave one half of a save/restore pair behind. Occupancy
//! is always derived from the piece sets on demand and never cached.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;
use crate::moves::board_masks::{bit_at, square_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// `[color][piece_kind]`
    pub pieces: [[Bitboard; 6]; 2],
    pub en_passant_square: Option<Square>,
    pub castling_rights: CastlingRights,
}

impl Position {
    /// Board with no pieces, no rights and no en-passant target.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting array with all four castling rights.
    pub fn new_game() -> Self {
        let mut position = Self::empty();
        position.reset_to_standard();
        position
    }

    /// Reset in place to the standard starting array.
    pub fn reset_to_standard(&mut self) {
        *self = Self::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            self.put_piece(square_index(file, 0), Piece::new(Color::White, kind));
            self.put_piece(square_index(file, 1), Piece::new(Color::White, PieceKind::Pawn));
            self.put_piece(square_index(file, 6), Piece::new(Color::Black, PieceKind::Pawn));
            self.put_piece(square_index(file, 7), Piece::new(Color::Black, kind));
        }
        self.castling_rights = CASTLE_ALL;
        self.en_passant_square = None;
    }

    /// The bit-set of one (color, kind) pair.
    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// Mutable access to the bit-set of one (color, kind) pair.
    #[inline]
    pub fn pieces_mut(&mut self, color: Color, kind: PieceKind) -> &mut Bitboard {
        &mut self.pieces[color.index()][kind.index()]
    }

    /// Place `piece` on `square`, clearing whatever stood there first.
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        self.clear_square(square);
        *self.pieces_mut(piece.color, piece.kind) |= bit_at(square);
    }

    /// Remove any piece of either color from `square`.
    pub fn clear_square(&mut self, square: Square) {
        for color in Color::BOTH {
            self.clear_square_for(color, square);
        }
    }

    /// Remove any piece of `color` from `square`.
    #[inline]
    pub fn clear_square_for(&mut self, color: Color, square: Square) {
        let mask = !bit_at(square);
        for bitboard in self.pieces[color.index()].iter_mut() {
            *bitboard &= mask;
        }
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(0u64, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn occupancy_all(&self) -> Bitboard {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = bit_at(square);
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                if self.pieces(color, kind) & mask != 0 {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    /// Square of `color`'s king, or `None` for a king-less position.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }
}
