// AI Agent - Minimax with Quiescence Search
//
// This module implements a classical chess AI: full-width minimax to a fixed
// depth over a material-only evaluation, extended at the leaves by a
// quiescence search over forcing moves.
//
// Key features:
// - Exact state rollback through scoped moves, no position copies
// - Checkmate scored by distance so quicker mates are preferred
// - Optional piece order shuffling so equal scores do not always pick the same move
// - Cooperative cancellation checked at every node

pub mod evaluation;
mod minimax;
mod quiescence;
mod search;
mod minimax_player;

pub use minimax::MATE_SCORE;
pub use minimax_player::{Difficulty, MinimaxPlayer};
pub use search::{select_move, CancelToken, SearchResult, SearchStats, Searcher};
