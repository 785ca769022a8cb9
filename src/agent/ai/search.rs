// Move Selection
//
// Entry point of the search engine. A `Searcher` owns the configuration and
// the random generator used to shuffle piece order between searches; each
// call builds a `SearchContext` holding the per-search state (root side,
// node counters, cancellation) and runs minimax from the root.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::minimax::minimax;
use crate::config::SearchConfig;
use crate::game_repr::{Color, Destinations, Move, Position};

/// Shared flag that asks a running search to stop.
///
/// The search polls it at every node; once raised, the search unwinds and
/// reports the best root move completed so far.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Node counters of one search.
///
/// The two counters never overlap. A frontier node at depth 0 is handed to
/// quiescence unvisited by minimax, so it counts once, in `quiescence_nodes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Minimax nodes with depth left, the root included
    pub nodes: u64,
    /// Nodes visited by the quiescence extension, frontier nodes included
    pub quiescence_nodes: u64,
}

impl SearchStats {
    pub fn total(&self) -> u64 {
        self.nodes + self.quiescence_nodes
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Score of `best_move` in centipawns from the searching side's view.
    pub score: i32,
    pub depth: u8,
    pub stats: SearchStats,
    pub time_ms: u64,
    /// The search was stopped through its cancel token.
    pub cancelled: bool,
}

/// Per-search state threaded through minimax and quiescence.
pub(crate) struct SearchContext<'a> {
    /// Side whose material balance is maximized
    pub(crate) root: Color,
    pub(crate) quiescence_depth: u8,
    pub(crate) stats: SearchStats,
    rng: Option<&'a mut StdRng>,
    cancel: Option<&'a CancelToken>,
}

impl<'a> SearchContext<'a> {
    /// Context with fixed move order and no cancellation.
    pub(crate) fn new(root: Color, quiescence_depth: u8) -> Self {
        Self {
            root,
            quiescence_depth,
            stats: SearchStats::default(),
            rng: None,
            cancel: None,
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.map_or(false, CancelToken::is_cancelled)
    }

    /// All legal moves of `side`, grouped by piece. With a random generator
    /// present the order of the pieces is shuffled, otherwise it follows the
    /// piece arena.
    pub(crate) fn ordered_moves(&mut self, pos: &mut Position, side: Color) -> Vec<Move> {
        let mut ids = pos.piece_ids_of(side);
        if let Some(rng) = self.rng.as_deref_mut() {
            ids.shuffle(rng);
        }

        let mut moves = Vec::with_capacity(40);
        let mut destinations = Destinations::new();
        for id in ids {
            destinations.clear();
            pos.legal_moves_into(id, &mut destinations);
            let from = pos.piece(id).square;
            moves.extend(destinations.iter().map(|&to| Move::new(id, from, to)));
        }
        moves
    }
}

/// Reusable move selector.
pub struct Searcher {
    config: SearchConfig,
    rng: StdRng,
    cancel: Option<CancelToken>,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            cancel: None,
        }
    }

    /// Stop searching when `token` is raised.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds the best move for `color`.
    ///
    /// The position is used as scratch space and is left exactly as it was.
    pub fn select_move(&mut self, pos: &mut Position, color: Color) -> SearchResult {
        let start_time = Instant::now();

        // Ensure we search at least depth 1
        let depth = self.config.depth.max(1);

        let mut ctx = SearchContext {
            root: color,
            quiescence_depth: self.config.quiescence_depth,
            stats: SearchStats::default(),
            rng: self.config.randomize.then_some(&mut self.rng),
            cancel: self.cancel.as_ref(),
        };
        let (score, mut best_move) = minimax(&mut ctx, pos, color, depth, true, 0);
        let cancelled = ctx.is_cancelled();

        // Stopped before the first root move was scored
        if best_move.is_none() && cancelled {
            best_move = pos.all_legal_moves(color).first().copied();
        }

        let result = SearchResult {
            best_move,
            score,
            depth,
            stats: ctx.stats,
            time_ms: start_time.elapsed().as_millis() as u64,
            cancelled,
        };
        debug!(
            "{:?} searched depth {}+{}: {} score {} nodes {} (quiescence {}) in {} ms{}",
            color,
            depth,
            self.config.quiescence_depth,
            result.best_move.map_or_else(|| "no move".to_string(), |m| m.to_string()),
            result.score,
            result.stats.nodes,
            result.stats.quiescence_nodes,
            result.time_ms,
            if cancelled { " (cancelled)" } else { "" },
        );
        result
    }
}

/// One-shot search with a fresh `Searcher`.
pub fn select_move(pos: &mut Position, color: Color, config: &SearchConfig) -> SearchResult {
    Searcher::new(*config).select_move(pos, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::minimax::MATE_SCORE;
    use crate::game_repr::{Square, Type};

    fn sq(coordinate: &str) -> Square {
        Square::at(coordinate)
    }

    fn back_rank() -> Position {
        let mut pos = Position::empty();
        pos.place(Color::White, Type::King, sq("g1"));
        pos.place(Color::White, Type::Rook, sq("a1"));
        pos.place(Color::Black, Type::King, sq("g8"));
        pos.place(Color::Black, Type::Pawn, sq("f7"));
        pos.place(Color::Black, Type::Pawn, sq("g7"));
        pos.place(Color::Black, Type::Pawn, sq("h7"));
        pos
    }

    #[test]
    fn test_finds_mate_in_one() {
        let mut pos = back_rank();
        let config = SearchConfig::with_depth(1).deterministic();
        let result = select_move(&mut pos, Color::White, &config);

        let best = result.best_move.expect("a move exists");
        assert_eq!((best.from, best.to), (sq("a1"), sq("a8")));
        assert_eq!(result.score, MATE_SCORE - 1);
    }

    #[test]
    fn test_takes_hanging_queen() {
        let mut pos = Position::empty();
        pos.place(Color::White, Type::King, sq("h1"));
        pos.place(Color::White, Type::Rook, sq("a1"));
        pos.place(Color::Black, Type::King, sq("h8"));
        pos.place(Color::Black, Type::Queen, sq("a5"));

        let config = SearchConfig::with_depth(1).deterministic();
        let result = select_move(&mut pos, Color::White, &config);
        let best = result.best_move.expect("a move exists");
        assert_eq!(best.to, sq("a5"));
        assert!(result.score >= 500);
    }

    #[test]
    fn test_avoids_defended_pawn_with_queen() {
        let mut pos = Position::empty();
        pos.place(Color::White, Type::King, sq("g1"));
        pos.place(Color::Black, Type::King, sq("g8"));
        pos.place(Color::White, Type::Queen, sq("d1"));
        pos.place(Color::Black, Type::Pawn, sq("d5"));
        pos.place(Color::Black, Type::Pawn, sq("e6"));

        let config = SearchConfig::with_depth(1).deterministic();
        let result = select_move(&mut pos, Color::White, &config);
        let best = result.best_move.expect("a move exists");
        assert_ne!(best.to, sq("d5"));
        assert_eq!(result.score, 700);
    }

    #[test]
    fn test_search_restores_position() {
        let mut pos = Position::default();
        let before = pos.clone();
        let result = select_move(&mut pos, Color::White, &SearchConfig::default().seeded(3));
        assert!(result.best_move.is_some());
        assert!(result.stats.nodes > 20);
        assert_eq!(pos, before);
    }

    #[test]
    fn test_frontier_nodes_count_as_quiescence() {
        let mut pos = back_rank();
        let root_moves = pos.all_legal_moves(Color::White).len() as u64;
        let config = SearchConfig::with_depth(1).deterministic();
        let result = select_move(&mut pos, Color::White, &config);

        assert_eq!(result.stats.nodes, 1);
        assert!(result.stats.quiescence_nodes >= root_moves);
        assert_eq!(result.stats.total(), 1 + result.stats.quiescence_nodes);
    }

    #[test]
    fn test_no_move_when_checkmated() {
        let mut pos = back_rank();
        let rook = pos.piece_id_at(sq("a1")).unwrap();
        pos.apply_move(rook, sq("a8"), None);

        let result = select_move(&mut pos, Color::Black, &SearchConfig::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -MATE_SCORE);
    }

    #[test]
    fn test_no_move_when_stalemated() {
        let mut pos = Position::empty();
        pos.place(Color::Black, Type::King, sq("a8"));
        pos.place(Color::White, Type::Queen, sq("b6"));
        pos.place(Color::White, Type::King, sq("c6"));

        let result = select_move(&mut pos, Color::Black, &SearchConfig::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_same_seed_same_move() {
        let config = SearchConfig::with_depth(1).seeded(42);
        let first = select_move(&mut Position::default(), Color::White, &config);
        let second = select_move(&mut Position::default(), Color::White, &config);
        assert_eq!(first.best_move, second.best_move);
    }

    #[test]
    fn test_cancelled_search_still_returns_legal_move() {
        let token = CancelToken::new();
        token.cancel();
        let mut searcher = Searcher::new(SearchConfig::with_depth(3)).with_cancel_token(token.clone());
        let mut pos = Position::default();

        let result = searcher.select_move(&mut pos, Color::White);
        assert!(result.cancelled);
        let best = result.best_move.expect("fallback move");
        assert!(pos.is_legal(best.piece, best.to));

        token.reset();
        assert!(!token.is_cancelled());
    }
}
