//! Typed reasons a move request can be refused.
//!
//! The core still answers with plain booleans and empty masks; these variants
//! exist so callers that want to explain a refusal can do so.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square index {square} is out of range (must be 0-63)")]
    SquareOutOfRange { square: Square },

    #[error("no piece on square {square}")]
    EmptySquare { square: Square },

    #[error("piece on square {square} does not belong to {side}")]
    WrongSide { square: Square, side: Color },

    #[error("move from {from} to {to} is not legal for {side}")]
    IllegalMove { from: Square, to: Square, side: Color },

    #[error("the game is already over")]
    GameOver,

    #[error("invalid notation: {0}")]
    InvalidNotation(String),
}

pub type MoveResult<T> = Result<T, MoveError>;
