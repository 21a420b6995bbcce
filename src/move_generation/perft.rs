//! Perft: exhaustive leaf counting used to validate move generation.
//!
//! Each node enumerates every legal destination of every piece of the side
//! to move, snapshots the position by copy, plays the move, recurses and
//! restores the copy. A pawn reaching its last rank is expanded into all four
//! promotion choices so counts line up with published reference tables.

use std::fmt;

use tracing::debug;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::move_generator::{is_promotion_move, legal_moves_from};
use crate::utils::algebraic::move_to_coordinate;

/// Leaf positions reachable from `position` in exactly `depth` plies with
/// `side` to move. Depth 0 counts the position itself.
pub fn perft(position: &mut Position, depth: u32, side: Color) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for_each_legal_move(position, side, |position, _| {
        nodes += perft(position, depth - 1, side.opposite());
    });
    nodes
}

/// Caller-facing name for [`perft`] that leaves the input untouched.
pub fn count_positions(position: &Position, depth: u32, side: Color) -> u64 {
    let mut scratch = *position;
    perft(&mut scratch, depth, side)
}

/// Node count below one root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideEntry {
    pub chess_move: ChessMove,
    pub nodes: u64,
}

/// Per-root-move breakdown plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerftDivide {
    pub entries: Vec<DivideEntry>,
    pub total: u64,
}

impl PerftDivide {
    /// Count under a given root move, if it was played.
    pub fn nodes_for(&self, chess_move: ChessMove) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.chess_move == chess_move)
            .map(|entry| entry.nodes)
    }
}

impl fmt::Display for PerftDivide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {}", move_to_coordinate(entry.chess_move), entry.nodes)?;
        }
        write!(f, "Total: {}", self.total)
    }
}

/// One ply of [`perft`] by hand, recording the count under each root move.
///
/// Depth 0 has no root moves and reports an empty breakdown with total 1.
pub fn perft_divide(position: &mut Position, depth: u32, side: Color) -> PerftDivide {
    if depth == 0 {
        return PerftDivide {
            entries: Vec::new(),
            total: 1,
        };
    }

    let mut divide = PerftDivide::default();
    for_each_legal_move(position, side, |position, chess_move| {
        let nodes = perft(position, depth - 1, side.opposite());
        debug!(%chess_move, nodes, "divide root move");
        divide.entries.push(DivideEntry { chess_move, nodes });
        divide.total += nodes;
    });
    divide
}

/// Caller-facing name for [`perft_divide`] that leaves the input untouched.
pub fn divide(position: &Position, depth: u32, side: Color) -> PerftDivide {
    let mut scratch = *position;
    perft_divide(&mut scratch, depth, side)
}

/// Play every legal move of `side` in turn, handing the visitor the position
/// after the move, then restore the snapshot.
fn for_each_legal_move<F>(position: &mut Position, side: Color, mut visit: F)
where
    F: FnMut(&mut Position, ChessMove),
{
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
                    let chess_move = ChessMove::with_promotion(from, to, kind);
                    play_and_restore(position, chess_move, side, &mut visit);
                }
            } else {
                play_and_restore(position, ChessMove::new(from, to), side, &mut visit);
            }
        }
    }
}

#[inline]
fn play_and_restore<F>(position: &mut Position, chess_move: ChessMove, side: Color, visit: &mut F)
where
    F: FnMut(&mut Position, ChessMove),
{
    let snapshot = *position;
    if make_move(position, chess_move.from, chess_move.to, side, chess_move.promotion) {
        visit(position, chess_move);
    }
    *position = snapshot;
}
