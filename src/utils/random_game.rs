//! Random legal playouts from the starting position.
//!
//! Picks uniformly among legal moves until the game ends or a ply cap is
//! hit. Used by the CLI for soak runs and by tests that want many realistic
//! positions without a hand-written move list.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::info;

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_session::{GameSession, GameStatus};

#[derive(Debug, Clone)]
pub struct RandomGameConfig {
    pub max_plies: u16,
}

impl Default for RandomGameConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomGameOutcome {
    Finished(GameStatus),
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct RandomGameReport {
    pub outcome: RandomGameOutcome,
    pub moves: Vec<ChessMove>,
    pub final_session: GameSession,
}

impl RandomGameReport {
    #[inline]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

pub fn play_random_game<R: Rng + ?Sized>(
    config: &RandomGameConfig,
    rng: &mut R,
) -> RandomGameReport {
    let mut session = GameSession::new();
    let mut moves = Vec::with_capacity(config.max_plies as usize);

    let outcome = loop {
        let status = session.status();
        if status.is_over() {
            break RandomGameOutcome::Finished(status);
        }
        if moves.len() >= config.max_plies as usize {
            break RandomGameOutcome::MaxPlies;
        }

        let legal = session.legal_moves();
        let Some(&chess_move) = legal.as_slice().choose(rng) else {
            break RandomGameOutcome::Finished(status);
        };
        match session.play(chess_move) {
            Ok(_) => moves.push(chess_move),
            Err(_) => break RandomGameOutcome::Finished(status),
        }
    };

    info!(plies = moves.len(), ?outcome, "random game finished");

    RandomGameReport {
        outcome,
        moves,
        final_session: session,
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn same_seed_replays_same_game() {
        let config = RandomGameConfig { max_plies: 60 };
        let first = play_random_game(&config, &mut StdRng::seed_from_u64(7));
        let second = play_random_game(&config, &mut StdRng::seed_from_u64(7));
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.final_session, second.final_session);
    }

    #[test]
    fn ply_cap_is_respected() {
        let config = RandomGameConfig { max_plies: 10 };
        let report = play_random_game(&config, &mut StdRng::seed_from_u64(11));
        assert!(report.plies() <= 10);
        if report.outcome == RandomGameOutcome::MaxPlies {
            assert_eq!(report.plies(), 10);
        }
    }

    #[test]
    fn finished_games_end_in_a_terminal_status() {
        let config = RandomGameConfig::default();
        for seed in 0..4 {
            let report = play_random_game(&config, &mut StdRng::seed_from_u64(seed));
            if let RandomGameOutcome::Finished(status) = report.outcome {
                assert!(status.is_over());
                assert_eq!(report.final_session.status(), status);
            }
        }
    }
}
