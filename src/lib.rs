//! Crate root module declarations for the bitboard chess rules core.
//!
//! This file exposes the position model, attack tables, legal move
//! generation, move execution, perft and the text helpers so the CLI,
//! benchmarks and integration tests can import stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_session;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod board_masks;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_rays;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod move_errors;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_game;
    pub mod render_game_state;
}
