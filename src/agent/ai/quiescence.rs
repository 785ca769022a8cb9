// Quiescence Search - Tactical Stability Extension
//
// When the full-width search stops, the position may be in the middle of an
// exchange: stopping right after a queen capture but before the recapture
// would count a queen that is about to be lost.
//
// Quiescence search keeps going past the nominal depth with forcing moves
// only (captures, en passant, promotions and checks) until the position is
// quiet or `depth` extra plies have been spent. The side to move may always
// decline every forcing move and keep the static evaluation (stand-pat).

use super::evaluation::evaluate;
use super::minimax::terminal_score;
use super::search::SearchContext;
use crate::game_repr::{Color, Move, Position, Type};

/// Quiescence search - search until position is quiet
///
/// Scores are from the root side's point of view, like minimax. A finished
/// game scores exactly regardless of the remaining depth.
pub(crate) fn quiescence(
    ctx: &mut SearchContext<'_>,
    pos: &mut Position,
    side: Color,
    maximizing: bool,
    depth: u8,
    ply: u32,
) -> i32 {
    ctx.stats.quiescence_nodes += 1;
    let stand_pat = evaluate(pos, ctx.root);
    if ctx.is_cancelled() {
        return stand_pat;
    }

    // Mate and stalemate detection here costs a legal move probe at every
    // leaf, the largest share of leaf time. Pruning added later must keep
    // terminal leaves scored exactly.
    if depth == 0 {
        let has_moves = pos.has_legal_moves(side);
        let outcome = pos.outcome(side, has_moves);
        return if outcome.is_over() {
            terminal_score(outcome, ctx.root, ply)
        } else {
            stand_pat
        };
    }

    let moves = pos.all_legal_moves(side);
    let outcome = pos.outcome(side, !moves.is_empty());
    if outcome.is_over() {
        return terminal_score(outcome, ctx.root, ply);
    }

    let mut best = stand_pat;
    for mv in moves {
        if ctx.is_cancelled() {
            break;
        }
        if !is_forcing(pos, &mv) {
            continue;
        }

        let score = {
            let mut child = pos.scoped_move(mv.piece, mv.to, mv.promotion);
            quiescence(ctx, &mut child, side.opposite(), !maximizing, depth - 1, ply + 1)
        };
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Captures (en passant included), promotions and checking moves.
pub(crate) fn is_forcing(pos: &mut Position, mv: &Move) -> bool {
    if !pos.is_empty(mv.to) {
        return true;
    }

    let piece = *pos.piece(mv.piece);
    if piece.piece_type == Type::Pawn
        && (mv.from.file() != mv.to.file() || mv.to.row() == piece.color.promotion_row())
    {
        return true;
    }

    pos.gives_check(mv.piece, mv.to)
}
