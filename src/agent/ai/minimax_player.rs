//! MinimaxPlayer - chess AI using plain minimax with a quiescence extension
//!
//! The player implements the [`Player`] trait and delegates move selection to
//! a [`Searcher`], which it keeps between moves so the random piece order keeps
//! advancing instead of restarting from the same seed every turn.
//!
//! # Difficulty Levels
//!
//! Minimax without pruning visits every node, so depths stay small:
//! - **Easy**: depth 1 + 1 quiescence ply
//! - **Medium**: depth 2 + 2 quiescence plies
//! - **Hard**: depth 3 + 3 quiescence plies

use super::search::{CancelToken, Searcher};
use crate::agent::player::Player;
use crate::config::SearchConfig;
use crate::game_repr::{Color, GameResult, Move, Position};

/// AI difficulty levels that map to search depths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Sees one ply ahead plus one ply of forcing replies
    Easy,
    /// Sees one full move ahead
    Medium,
    /// Three plies plus three plies of forcing moves
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Get the full-width search depth in plies for this difficulty level
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Get the number of extra forcing plies searched past `max_depth`
    pub fn quiescence_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Case-insensitive inverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// Search parameters for this level, randomized piece order included.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.max_depth(),
            quiescence_depth: self.quiescence_depth(),
            ..SearchConfig::default()
        }
    }
}

/// AI Player that uses minimax search
///
/// Equal scores are common with a material-only evaluation, so the searcher
/// shuffles piece order unless its configuration says otherwise.
pub struct MinimaxPlayer {
    searcher: Searcher,

    /// Display name for this AI player
    name: String,
}

impl MinimaxPlayer {
    /// Create a new MinimaxPlayer with custom search parameters and name
    pub fn new(config: SearchConfig, name: String) -> Self {
        Self {
            searcher: Searcher::new(config),
            name,
        }
    }

    /// Create a new MinimaxPlayer with specified difficulty and auto-generated name
    ///
    /// The player name is generated as "AI ({difficulty})" based on the difficulty level.
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.search_config(), format!("AI ({})", difficulty.name()))
    }

    /// Like [`with_difficulty`](Self::with_difficulty) with a reproducible piece order.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        let config = difficulty.search_config().seeded(seed);
        Self::new(config, format!("AI ({})", difficulty.name()))
    }

    /// Stop a running search when `token` is raised.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.searcher = self.searcher.with_cancel_token(token);
        self
    }

    pub fn search_config(&self) -> &SearchConfig {
        self.searcher.config()
    }
}

impl Player for MinimaxPlayer {
    /// Searches the position and returns the best move found, or `None`
    /// when `color` has no legal move.
    fn get_move(&mut self, position: &mut Position, color: Color) -> Option<Move> {
        self.searcher.select_move(position, color).best_move
    }

    fn game_ended(&mut self, _result: GameResult) {
        // No cleanup needed for minimax player
    }

    fn name(&self) -> &str {
        &self.name
    }
}
