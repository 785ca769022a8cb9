//! Player trait for chess game agents.
//!
//! This module provides the core abstraction for entities that can provide
//! chess moves. The orchestrator asks the player whose turn it is for a move,
//! executes it through the game facade, and tells both players how the game
//! ended.
//!
//! The trait focuses on **behavior** rather than construction: a random mover
//! needs only a seed, a search player needs a search configuration, so each
//! implementation provides its own constructor.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking. The orchestrator calls it and waits, which is
//! all a turn-based game needs.

use crate::game_repr::{Color, GameResult, Move, Position};

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented. All other methods have default
/// implementations that can be overridden as needed.
pub trait Player {
    /// Request the next move from this player.
    ///
    /// The player may use `position` as scratch space for look-ahead but must
    /// leave it as it found it. Returning `None` means the player has no move
    /// to offer; the caller then consults the game-end classifier instead of
    /// playing a null move.
    fn get_move(&mut self, position: &mut Position, color: Color) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
