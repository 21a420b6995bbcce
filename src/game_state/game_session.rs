//! A played game: a position plus whose turn it is.
//!
//! This is the surface an interactive front end drives: ask for the
//! destinations of a selected square, play a chosen move, then classify the
//! resulting position. Moves are validated against the legal destination set
//! before they reach the executor, so a session can never enter an illegal
//! position.

use tracing::info;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{try_make_move, MoveKind};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_errors::{MoveError, MoveResult};
use crate::move_generation::move_generator::{
    has_any_legal_move, is_promotion_move, legal_destinations, legal_moves,
};
use crate::moves::board_masks::bit_at;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Classify `position` for `side` to move.
pub fn classify(position: &Position, side: Color) -> GameStatus {
    let in_check = is_king_in_check(position, side);
    match (in_check, has_any_legal_move(position, side)) {
        (true, false) => GameStatus::Checkmate {
            winner: side.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}

/// What happened when a move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub chess_move: ChessMove,
    pub kind: MoveKind,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    pub position: Position,
    pub side_to_move: Color,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            position: Position::new_game(),
            side_to_move: Color::White,
        }
    }

    pub fn from_position(position: Position, side_to_move: Color) -> Self {
        Self {
            position,
            side_to_move,
        }
    }

    /// Legal destinations of the piece on `square` for the side to move.
    #[inline]
    pub fn destinations_from(&self, square: Square) -> Bitboard {
        legal_destinations(&self.position, square, self.side_to_move)
    }

    /// Whether `from -> to` would need a promotion choice.
    #[inline]
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        is_promotion_move(&self.position, from, to)
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        legal_moves(&self.position, self.side_to_move)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        classify(&self.position, self.side_to_move)
    }

    /// Validate and play a move, then hand the turn over.
    pub fn play(&mut self, chess_move: ChessMove) -> MoveResult<MoveOutcome> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        let side = self.side_to_move;
        let ChessMove { from, to, promotion } = chess_move;
        if to > 63 || self.destinations_from(from) & bit_at(to) == 0 {
            return Err(self.refusal_reason(from, to));
        }

        let kind = try_make_move(&mut self.position, from, to, side, promotion)?;
        self.side_to_move = side.opposite();

        let status = self.status();
        if status.is_over() {
            info!(?status, "game finished");
        }

        Ok(MoveOutcome {
            chess_move,
            kind,
            status,
        })
    }

    fn refusal_reason(&self, from: Square, to: Square) -> MoveError {
        let side = self.side_to_move;
        for square in [from, to] {
            if square > 63 {
                return MoveError::SquareOutOfRange { square };
            }
        }
        match self.position.piece_at(from) {
            None => MoveError::EmptySquare { square: from },
            Some(piece) if piece.color != side => MoveError::WrongSide { square: from, side },
            Some(_) => MoveError::IllegalMove { from, to, side },
        }
    }
}
