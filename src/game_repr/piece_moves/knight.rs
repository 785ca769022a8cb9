use super::Destinations;
use crate::game_repr::tables::KNIGHT_TARGETS;
use crate::game_repr::{Piece, Position};

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, knight: &Piece, moves: &mut Destinations) {
        self.jump_into(knight, &KNIGHT_TARGETS[knight.square.index()], moves);
    }
}
