use super::Destinations;
use crate::game_repr::tables::BISHOP_DIRECTIONS;
use crate::game_repr::{Piece, Position};

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, bishop: &Piece, moves: &mut Destinations) {
        self.slide_into(bishop, &BISHOP_DIRECTIONS, moves);
    }
}
