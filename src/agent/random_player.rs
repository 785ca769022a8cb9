//! RandomPlayer - picks a random piece, then a random legal destination.
//!
//! Pieces are drawn until one with at least one legal move turns up, so every
//! movable piece is equally likely regardless of how many moves it has.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::player::Player;
use crate::game_repr::{Color, Move, Position};

pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible random player.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, position: &mut Position, color: Color) -> Option<Move> {
        let mut candidates = position.piece_ids_of(color);
        candidates.shuffle(&mut self.rng);

        // Shuffled order is the same as drawing without replacement
        for id in candidates {
            let moves = position.legal_moves(id);
            if let Some(&to) = moves.choose(&mut self.rng) {
                return Some(Move::new(id, position.piece(id).square, to));
            }
        }
        None
    }

    fn name(&self) -> &str {
        &self.name
    }
}
