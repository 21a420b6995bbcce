//! Square and move conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`, `e2e4`, `e7e8q`)
//! and internal square/bitboard representations. This is the notation perft
//! divide output is printed in; no SAN is supported.

use std::fmt;

use crate::game_state::chess_types::{Bitboard, ChessMove, PieceKind, Square};
use crate::move_generation::move_errors::{MoveError, MoveResult};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> MoveResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(MoveError::InvalidNotation(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(MoveError::InvalidNotation(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(MoveError::InvalidNotation(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> MoveResult<String> {
    if square > 63 {
        return Err(MoveError::SquareOutOfRange { square });
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);

    Ok(format!("{file_char}{rank_char}"))
}

/// Render every set bit of `bitboard` as a space-separated square list.
pub fn bitboard_to_squares(bitboard: Bitboard) -> String {
    let mut names = Vec::with_capacity(bitboard.count_ones() as usize);
    let mut remaining = bitboard;
    while remaining != 0 {
        let square = remaining.trailing_zeros() as Square;
        names.push(format!("{}{}", char::from(b'a' + square % 8), square / 8 + 1));
        remaining &= remaining - 1;
    }
    names.join(" ")
}

/// Coordinate notation for a move (`e2e4`, promotions as `e7e8q`).
pub fn move_to_coordinate(chess_move: ChessMove) -> String {
    chess_move.to_string()
}

/// Parse `e2e4` / `e7e8q`.
pub fn coordinate_to_move(text: &str) -> MoveResult<ChessMove> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(MoveError::InvalidNotation(format!("invalid move: {text}")));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(letter) => match PieceKind::from_letter(letter) {
            Some(kind) if kind.is_promotion_target() => Some(kind),
            _ => {
                return Err(MoveError::InvalidNotation(format!(
                    "invalid promotion piece: {letter}"
                )))
            }
        },
    };

    Ok(ChessMove { from, to, promotion })
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in [self.from, self.to] {
            match square_to_algebraic(square) {
                Ok(name) => f.write_str(&name)?,
                Err(_) => write!(f, "?{square}")?,
            }
        }
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
