use super::Destinations;
use crate::game_repr::tables::KING_TARGETS;
use crate::game_repr::{Piece, Position, Square, Type};

/// File the king starts on.
const KING_FILE: u8 = 4;

impl Position {
    /// Generate king moves into a provided buffer, castling included.
    ///
    /// Castling here only requires unmoved pieces and an empty path; whether
    /// the king crosses an attacked square is decided by the legality filter.
    pub fn king_moves_into(&self, king: &Piece, moves: &mut Destinations) {
        self.jump_into(king, &KING_TARGETS[king.square.index()], moves);
        self.castling_moves_into(king, moves);
    }

    fn castling_moves_into(&self, king: &Piece, moves: &mut Destinations) {
        let home_row = king.color.home_row();
        if king.has_moved() || king.square.row() != home_row || king.square.file() != KING_FILE {
            return;
        }

        // (rook file, direction the king travels)
        for (rook_file, direction) in [(7u8, 1i8), (0u8, -1i8)] {
            let Some(rook_square) = Square::from_file_row(rook_file, home_row) else {
                continue;
            };
            let Some(rook) = self.piece_at(rook_square) else {
                continue;
            };
            if rook.piece_type != Type::Rook || rook.color != king.color || rook.has_moved() {
                continue;
            }

            let (low, high) = if rook_file > KING_FILE {
                (KING_FILE + 1, rook_file)
            } else {
                (rook_file + 1, KING_FILE)
            };
            let path_clear = (low..high)
                .filter_map(|file| Square::from_file_row(file, home_row))
                .all(|sq| self.is_empty(sq));

            if path_clear {
                if let Some(destination) = king.square.offset(2 * direction, 0) {
                    moves.push(destination);
                }
            }
        }
    }
}
