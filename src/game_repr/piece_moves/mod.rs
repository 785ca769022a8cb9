pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::{Piece, PieceId, Position, Square, Type};

/// Destination squares of one piece. A queen in the open has 27, the most of any piece.
pub type Destinations = SmallVec<[Square; 32]>;

impl Position {
    /// Generate pseudo-legal destinations for a piece into a provided buffer.
    /// The buffer is NOT cleared before adding moves.
    ///
    /// Pseudo-legal moves obey movement rules and occupancy but may leave the
    /// mover's own king in check.
    pub fn pseudo_legal_moves_into(&self, id: PieceId, moves: &mut Destinations) {
        let piece = *self.piece(id);
        if piece.captured {
            return;
        }
        match piece.piece_type {
            Type::Pawn => self.pawn_moves_into(&piece, moves),
            Type::Knight => self.knight_moves_into(&piece, moves),
            Type::Bishop => self.bishop_moves_into(&piece, moves),
            Type::Rook => self.rook_moves_into(&piece, moves),
            Type::Queen => self.queen_moves_into(&piece, moves),
            Type::King => self.king_moves_into(&piece, moves),
        }
    }

    pub fn pseudo_legal_moves(&self, id: PieceId) -> Destinations {
        let mut moves = Destinations::new();
        self.pseudo_legal_moves_into(id, &mut moves);
        moves
    }

    /// Walks each ray one square at a time, stopping at the first occupied
    /// square, which is included only if it holds an enemy piece.
    pub(crate) fn slide_into(&self, piece: &Piece, directions: &[(i8, i8)], moves: &mut Destinations) {
        for &(file_delta, rank_delta) in directions {
            let mut current = piece.square;
            while let Some(next) = current.offset(file_delta, rank_delta) {
                match self.piece_at(next) {
                    None => moves.push(next),
                    Some(blocker) => {
                        if blocker.color != piece.color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }

    /// Adds every jump target not occupied by a friendly piece.
    pub(crate) fn jump_into(&self, piece: &Piece, targets: &[Square], moves: &mut Destinations) {
        moves.extend(
            targets
                .iter()
                .copied()
                .filter(|&sq| self.piece_at(sq).map_or(true, |p| p.color != piece.color)),
        );
    }
}
