//! Configuration types for self-play games and move search.
//!
//! A [`GameConfig`] carries everything the orchestrator needs to start a
//! game: who plays each side, an optional ply cap, and an optional seed so
//! that games with randomized players can be replayed.

use crate::agent::ai::Difficulty;
use crate::game_repr::Color;

/// Parameters of one move search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Full-width minimax depth in plies. A depth of 0 is searched as 1.
    pub depth: u8,
    /// Extra plies of forcing moves explored past `depth`.
    pub quiescence_depth: u8,
    /// Shuffle the order in which own pieces are tried, so equal scores do
    /// not always resolve to the same move.
    pub randomize: bool,
    /// Seed for the shuffle; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            quiescence_depth: 2,
            randomize: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Same search with a fixed piece order.
    pub fn deterministic(mut self) -> Self {
        self.randomize = false;
        self
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Plays a random legal move
    Random,
    /// Minimax player with specified difficulty
    Ai { difficulty: Difficulty },
}

impl PlayerConfig {
    /// Parses a command line player name: `random`, `easy`, `medium` or `hard`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "random" => Some(PlayerConfig::Random),
            other => Difficulty::from_name(other).map(|difficulty| PlayerConfig::Ai { difficulty }),
        }
    }
}

/// Complete configuration of a self-play game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Configuration for the White player
    pub white: PlayerConfig,
    /// Configuration for the Black player
    pub black: PlayerConfig,
    /// Stop after this many plies even if the game is not over.
    pub max_plies: Option<u32>,
    /// Base seed for every randomized player in the game.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::aivai(Difficulty::Easy, Difficulty::Easy)
    }
}

impl GameConfig {
    /// Create an AIvAI game configuration.
    ///
    /// # Arguments
    /// * `white_difficulty` - Difficulty for the White AI
    /// * `black_difficulty` - Difficulty for the Black AI
    pub fn aivai(white_difficulty: Difficulty, black_difficulty: Difficulty) -> Self {
        Self {
            white: PlayerConfig::Ai { difficulty: white_difficulty },
            black: PlayerConfig::Ai { difficulty: black_difficulty },
            max_plies: None,
            seed: None,
        }
    }

    /// Two random movers, the quickest way to exercise the rules end to end.
    pub fn random() -> Self {
        Self {
            white: PlayerConfig::Random,
            black: PlayerConfig::Random,
            max_plies: None,
            seed: None,
        }
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Seed for the player of `color`, distinct per side.
    pub fn player_seed(&self, color: Color) -> Option<u64> {
        let offset = match color {
            Color::White => 0,
            Color::Black => 1,
        };
        self.seed.map(|seed| seed.wrapping_mul(2).wrapping_add(offset))
    }
}
