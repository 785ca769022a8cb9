use super::Destinations;
use crate::game_repr::tables::ROOK_DIRECTIONS;
use crate::game_repr::{Piece, Position};

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, rook: &Piece, moves: &mut Destinations) {
        self.slide_into(rook, &ROOK_DIRECTIONS, moves);
    }
}
