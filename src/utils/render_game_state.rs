//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the piece bitboards for the CLI,
//! tests and diagnostics in text environments.

use crate::game_state::chess_types::*;
use crate::moves::board_masks::square_index;

/// Render the board to a Unicode string, white at the bottom.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match position.piece_at(square_index(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_position;
    use crate::game_state::chess_types::Position;

    #[test]
    fn start_position_renders_ranks_top_down() {
        let text = render_position(&Position::new_game());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }
}
