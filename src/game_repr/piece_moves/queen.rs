use super::Destinations;
use crate::game_repr::{Piece, Position};

impl Position {
    /// Generate queen moves into a provided buffer
    pub fn queen_moves_into(&self, queen: &Piece, moves: &mut Destinations) {
        self.bishop_moves_into(queen, moves);
        self.rook_moves_into(queen, moves);
    }
}
