//! Headless game loop.
//!
//! The [`Orchestrator`] owns a [`Game`] and one [`Player`] per side and
//! drives them turn by turn:
//!
//! ```text
//! [Request Move] -> [Execute through Game] -> [Notify Opponent]
//!   -> [Classify] -> [Check ply cap] -> [Request Move] ...
//! ```
//!
//! Players never touch the live position. Each one searches on a copy, and
//! every move it offers goes through the same validation as a move typed by
//! a user.

use log::{info, warn};

use crate::agent::{MinimaxPlayer, Player, RandomPlayer};
use crate::config::{GameConfig, PlayerConfig};
use crate::game::{Game, MoveError, MoveOutcome};
use crate::game_repr::{Color, GameResult, Move, Position};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The game reached a result
    Finished,
    /// The configured ply cap was hit first
    PlyLimit,
    /// A player offered no move although the game was still on
    NoMoveOffered(Color),
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub result: GameResult,
    pub termination: Termination,
    pub moves: Vec<Move>,
    pub final_position: Position,
}

impl GameSummary {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Builds the player described by `config`.
pub fn create_player(config: PlayerConfig, seed: Option<u64>) -> Box<dyn Player> {
    match (config, seed) {
        (PlayerConfig::Random, Some(seed)) => Box::new(RandomPlayer::seeded(seed)),
        (PlayerConfig::Random, None) => Box::new(RandomPlayer::new()),
        (PlayerConfig::Ai { difficulty }, Some(seed)) => {
            Box::new(MinimaxPlayer::seeded(difficulty, seed))
        }
        (PlayerConfig::Ai { difficulty }, None) => Box::new(MinimaxPlayer::with_difficulty(difficulty)),
    }
}

pub struct Orchestrator {
    game: Game,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    max_plies: Option<u32>,
    moves: Vec<Move>,
}

impl Orchestrator {
    /// A new game from the initial layout with players built from `config`.
    pub fn new(config: &GameConfig) -> Self {
        let white = create_player(config.white, config.player_seed(Color::White));
        let black = create_player(config.black, config.player_seed(Color::Black));
        let mut orchestrator = Self::with_players(Game::new(), white, black);
        orchestrator.max_plies = config.max_plies;
        orchestrator
    }

    pub fn with_players(game: Game, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            game,
            white,
            black,
            max_plies: None,
            moves: Vec::new(),
        }
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn players(&mut self, color: Color) -> (&mut Box<dyn Player>, &mut Box<dyn Player>) {
        match color {
            Color::White => (&mut self.white, &mut self.black),
            Color::Black => (&mut self.black, &mut self.white),
        }
    }

    /// Plays one ply. Returns `Ok(None)` when the side to move offers no move.
    ///
    /// A move the game rejects is returned as an error; the game is left as
    /// it was before the request.
    pub fn step(&mut self) -> Result<Option<MoveOutcome>, MoveError> {
        if self.game.is_over() {
            return Err(MoveError::GameOver(self.game.result()));
        }
        let side = self.game.side_to_move();
        let mut scratch = self.game.position().clone();
        let (player, _) = self.players(side);
        let Some(mv) = player.get_move(&mut scratch, side) else {
            warn!("{} ({:?}) offered no move", player.name(), side);
            return Ok(None);
        };
        let name = player.name().to_string();

        let outcome = self.game.play(mv)?;
        info!(
            "{:>3}. {} ({:?}) plays {}{}",
            self.moves.len() + 1,
            name,
            side,
            outcome.mv,
            if outcome.gives_check { "+" } else { "" }
        );
        self.moves.push(outcome.mv);

        let (_, opponent) = self.players(side);
        opponent.opponent_moved(outcome.mv);
        Ok(Some(outcome))
    }

    /// Plays until the game ends, a player gives up, or the ply cap is hit.
    pub fn run(mut self) -> Result<GameSummary, MoveError> {
        info!(
            "Starting game: {} (White) vs {} (Black)",
            self.white.name(),
            self.black.name()
        );

        let termination = loop {
            if self.game.is_over() {
                break Termination::Finished;
            }
            if self
                .max_plies
                .map_or(false, |limit| self.moves.len() as u32 >= limit)
            {
                break Termination::PlyLimit;
            }
            if self.step()?.is_none() {
                break Termination::NoMoveOffered(self.game.side_to_move());
            }
        };

        let result = self.game.result();
        match termination {
            Termination::Finished => info!("Game over after {} plies: {}", self.moves.len(), result),
            Termination::PlyLimit => info!("Stopped at the {} ply limit", self.moves.len()),
            Termination::NoMoveOffered(color) => warn!("Game abandoned, {:?} offered no move", color),
        }
        self.white.game_ended(result);
        self.black.game_ended(result);

        Ok(GameSummary {
            result,
            termination,
            moves: self.moves,
            final_position: self.game.position().clone(),
        })
    }
}
