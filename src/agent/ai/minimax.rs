// Minimax Search
//
// Plain minimax over the legal move tree: the root side maximizes its
// material balance and the opponent minimizes it. There is no pruning, so
// the cost grows as the branching factor raised to the depth. Leaves continue
// into quiescence search so a position is never scored halfway through an
// exchange.
//
// Every move is simulated on the one live position through a scoped move,
// which undoes it when the child search returns.

use super::evaluation::evaluate;
use super::quiescence::quiescence;
use super::search::SearchContext;
use crate::game_repr::{Color, GameResult, Move, Position};

/// Checkmate score - use large value but leave room for mate distance
pub const MATE_SCORE: i32 = 30000;

/// Minimax search returning (score, best_move).
///
/// The score is always from the root side's point of view. `maximizing` is
/// true on the root side's turns. Ties keep the move found first in the
/// context's move order.
pub(crate) fn minimax(
    ctx: &mut SearchContext<'_>,
    pos: &mut Position,
    side: Color,
    depth: u8,
    maximizing: bool,
    ply: u32,
) -> (i32, Option<Move>) {
    // Frontier nodes are counted by quiescence only
    if depth == 0 {
        let quiescence_depth = ctx.quiescence_depth;
        let score = quiescence(ctx, pos, side, maximizing, quiescence_depth, ply);
        return (score, None);
    }

    ctx.stats.nodes += 1;
    if ctx.is_cancelled() {
        return (evaluate(pos, ctx.root), None);
    }

    let moves = ctx.ordered_moves(pos, side);
    // A drawn root with legal moves is still searched so the caller gets a move
    let outcome = pos.outcome(side, !moves.is_empty());
    if outcome.is_over() && (ply > 0 || moves.is_empty()) {
        return (terminal_score(outcome, ctx.root, ply), None);
    }

    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for mv in moves {
        if ctx.is_cancelled() {
            break;
        }

        let score = {
            let mut child = pos.scoped_move(mv.piece, mv.to, mv.promotion);
            minimax(ctx, &mut child, side.opposite(), depth - 1, !maximizing, ply + 1).0
        };

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    // Cancelled before any child finished
    if best_move.is_none() {
        return (evaluate(pos, ctx.root), None);
    }
    (best_score, best_move)
}

/// Exact score of a finished game from the root side's point of view.
/// Mates found closer to the root score higher.
pub(crate) fn terminal_score(outcome: GameResult, root: Color, ply: u32) -> i32 {
    let distance = ply as i32;
    match outcome.winner() {
        Some(winner) if winner == root => MATE_SCORE - distance,
        Some(_) => distance - MATE_SCORE,
        None => 0,
    }
}
