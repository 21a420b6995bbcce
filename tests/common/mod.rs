//! Shared test utilities for the rules-core test suite.
#![allow(dead_code)]

use bitboard_rules::game_state::chess_types::*;
use bitboard_rules::move_generation::legal_move_apply::make_move;
use bitboard_rules::move_generation::move_generator::legal_moves;

/// Build a position from eight rows, rank 8 first, one character per file.
/// Uppercase is white, lowercase is black, `.` is an empty square.
pub fn position_from_diagram(
    rows: [&str; 8],
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
) -> Position {
    let mut position = Position::empty();
    for (row, text) in rows.iter().enumerate() {
        let rank = 7 - row as u8;
        let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), 8, "diagram row {row} must have 8 cells: {text:?}");

        for (file, &cell) in cells.iter().enumerate() {
            if cell == '.' {
                continue;
            }
            let kind = PieceKind::from_letter(cell)
                .unwrap_or_else(|| panic!("unknown piece letter {cell:?}"));
            let color = if cell.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            position.put_piece(rank * 8 + file as u8, Piece::new(color, kind));
        }
    }
    position.castling_rights = castling_rights;
    position.en_passant_square = en_passant_square;
    position
}

/// Walk from the start position, picking each move by `choices[i] % count`.
/// Stops early when the side to move has no legal move.
pub fn walk_from_start(choices: &[u16]) -> (Position, Color) {
    let mut position = Position::new_game();
    let mut side = Color::White;
    for &choice in choices {
        let moves = legal_moves(&position, side);
        if moves.is_empty() {
            break;
        }
        let chess_move = moves[choice as usize % moves.len()];
        assert!(make_move(
            &mut position,
            chess_move.from,
            chess_move.to,
            side,
            chess_move.promotion
        ));
        side = side.opposite();
    }
    (position, side)
}

/// Well-known perft positions with published node counts.
pub mod positions {
    use super::*;

    pub fn kiwipete() -> Position {
        position_from_diagram(
            [
                "r...k..r",
                "p.ppqpb.",
                "bn..pnp.",
                "...PN...",
                ".p..P...",
                "..N..Q.p",
                "PPPBBPPP",
                "R...K..R",
            ],
            CASTLE_ALL,
            None,
        )
    }

    pub fn rook_endgame() -> Position {
        position_from_diagram(
            [
                "........",
                "..p.....",
                "...p....",
                "KP.....r",
                ".R...p.k",
                "........",
                "....P.P.",
                "........",
            ],
            0,
            None,
        )
    }

    pub fn promotion_tangle() -> Position {
        position_from_diagram(
            [
                "r...k..r",
                "Pppp.ppp",
                ".b...nbN",
                "nP......",
                "BBP.P...",
                "q....N..",
                "Pp.P..PP",
                "R..Q.RK.",
            ],
            CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
            None,
        )
    }

    pub fn discovered_promotion() -> Position {
        position_from_diagram(
            [
                "rnbq.k.r",
                "pp.Pbppp",
                "..p.....",
                "........",
                "..B.....",
                "........",
                "PPP.NnPP",
                "RNBQK..R",
            ],
            CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
            None,
        )
    }
}
