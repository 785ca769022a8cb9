// Position evaluation function
// Returns material balance in centipawns (positive = good for `color`)

use crate::game_repr::{Color, Position};

/// Material balance from the point of view of `color`: the value of its own
/// live pieces minus the value of the opponent's. Kings count zero and there
/// are no positional terms.
pub fn evaluate(pos: &Position, color: Color) -> i32 {
    pos.live_pieces()
        .map(|piece| {
            if piece.color == color {
                piece.value()
            } else {
                -piece.value()
            }
        })
        .sum()
}

/// Total material of one side, kings excluded.
pub fn material(pos: &Position, color: Color) -> i32 {
    pos.pieces_of(color).map(|piece| piece.value()).sum()
}
