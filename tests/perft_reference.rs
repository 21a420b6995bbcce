//! Perft node counts against published reference tables.

mod common;

use bitboard_rules::game_state::chess_types::*;
use bitboard_rules::move_generation::perft::{count_positions, divide, perft};

use common::positions;

fn assert_counts(name: &str, position: &Position, side: Color, expected: &[u64]) {
    for (depth_idx, &nodes) in expected.iter().enumerate() {
        let depth = depth_idx as u32 + 1;
        assert_eq!(
            count_positions(position, depth, side),
            nodes,
            "node mismatch for {name} depth {depth}"
        );
    }
}

#[test]
fn start_position_counts() {
    assert_counts(
        "start",
        &Position::new_game(),
        Color::White,
        &[20, 400, 8902, 197_281],
    );
}

#[test]
#[ignore = "slow in debug builds"]
fn start_position_depth_five() {
    assert_eq!(
        count_positions(&Position::new_game(), 5, Color::White),
        4_865_609
    );
}

#[test]
fn kiwipete_counts() {
    assert_counts(
        "kiwipete",
        &positions::kiwipete(),
        Color::White,
        &[48, 2039, 97_862],
    );
}

#[test]
fn rook_endgame_counts() {
    assert_counts(
        "rook_endgame",
        &positions::rook_endgame(),
        Color::White,
        &[14, 191, 2812, 43_238],
    );
}

#[test]
fn promotion_tangle_counts() {
    assert_counts(
        "promotion_tangle",
        &positions::promotion_tangle(),
        Color::White,
        &[6, 264, 9467],
    );
}

#[test]
fn discovered_promotion_counts() {
    assert_counts(
        "discovered_promotion",
        &positions::discovered_promotion(),
        Color::White,
        &[44, 1486, 62_379],
    );
}

#[test]
fn perft_restores_the_position() {
    let mut position = positions::kiwipete();
    let before = position;
    perft(&mut position, 2, Color::White);
    assert_eq!(position, before);
}

#[test]
fn divide_sums_to_perft() {
    let position = positions::kiwipete();
    let breakdown = divide(&position, 2, Color::White);

    assert_eq!(breakdown.entries.len(), 48);
    assert_eq!(breakdown.total, 2039);
    assert_eq!(
        breakdown.entries.iter().map(|entry| entry.nodes).sum::<u64>(),
        breakdown.total
    );
    // e1g1 is castling kingside; the published divide has 43 replies.
    assert_eq!(breakdown.nodes_for(ChessMove::new(4, 6)), Some(43));
}
