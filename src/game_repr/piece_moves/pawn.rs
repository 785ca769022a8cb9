use super::Destinations;
use crate::game_repr::{Piece, PieceId, Position, Square};

impl Position {
    /// Generate pawn moves into a provided buffer: single and double advance,
    /// diagonal captures and en passant.
    pub fn pawn_moves_into(&self, pawn: &Piece, moves: &mut Destinations) {
        let forward = pawn.color.forward();

        if let Some(one) = pawn.square.offset(0, forward) {
            if self.is_empty(one) {
                moves.push(one);

                // Double step only from the original rank, through an empty square
                if pawn.square.row() == pawn.color.pawn_row() {
                    if let Some(two) = one.offset(0, forward) {
                        if self.is_empty(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for file_delta in [-1, 1] {
            let Some(target) = pawn.square.offset(file_delta, forward) else {
                continue;
            };
            if self.is_enemy(target, pawn.color) || self.en_passant_victim(pawn, target).is_some() {
                moves.push(target);
            }
        }
    }

    /// The enemy pawn `pawn` would capture en passant by moving to `target`.
    ///
    /// The victim must stand beside the capturing pawn, directly behind the
    /// empty target square, and its immediately preceding move (the previous
    /// ply) must have been a two-square advance.
    pub(crate) fn en_passant_victim(&self, pawn: &Piece, target: Square) -> Option<PieceId> {
        if !self.is_empty(target) || pawn.square.file_distance(target) != 1 {
            return None;
        }
        let beside = target.offset(0, -pawn.color.forward())?;
        if beside.row() != pawn.square.row() {
            return None;
        }
        let victim = self.piece_at(beside)?;
        (victim.color != pawn.color && victim.just_double_stepped(self.ply)).then_some(victim.id)
    }
}
