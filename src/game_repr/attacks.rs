use super::tables::{BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS};
use super::{Color, PieceId, Position, Square, Type};

impl Position {
    /// Checks if a square is under attack by any piece of the given color
    ///
    /// Looks outward from the target square instead of generating every enemy
    /// move: a square is attacked if an enemy knight or king sits a jump away,
    /// an enemy pawn sits diagonally behind it, or the first piece along a ray
    /// is an enemy slider moving along that ray. Pawns attack their diagonals
    /// whether or not those squares are occupied; king attacks never include
    /// castling.
    pub fn is_attacked(&self, square: Square, by_color: Color) -> bool {
        let is_attacker = |sq: Square, kinds: &[Type]| {
            self.piece_at(sq)
                .map_or(false, |p| p.color == by_color && kinds.contains(&p.piece_type))
        };

        // Pawns of `by_color` attack forward, so look one rank back from their point of view
        let pawn_attacked = [-1, 1].into_iter().any(|file_delta| {
            square
                .offset(file_delta, -by_color.forward())
                .map_or(false, |from| is_attacker(from, &[Type::Pawn]))
        });
        if pawn_attacked {
            return true;
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&from| is_attacker(from, &[Type::Knight]))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&from| is_attacker(from, &[Type::King]))
        {
            return true;
        }

        // Check diagonal attacks (bishop and queen)
        if BISHOP_DIRECTIONS
            .iter()
            .filter_map(|&dir| self.first_blocker(square, dir))
            .any(|sq| is_attacker(sq, &[Type::Bishop, Type::Queen]))
        {
            return true;
        }

        // Check rank/file attacks (rook and queen)
        ROOK_DIRECTIONS
            .iter()
            .filter_map(|&dir| self.first_blocker(square, dir))
            .any(|sq| is_attacker(sq, &[Type::Rook, Type::Queen]))
    }

    /// Checks if the king of the given color is currently in check
    ///
    /// # Panics
    ///
    /// Panics unless exactly one king of that color is on the board.
    pub fn is_in_check(&self, color: Color) -> bool {
        let king_square = self.king(color).square;
        self.is_attacked(king_square, color.opposite())
    }

    /// True if moving `id` to `to` attacks the enemy king.
    pub fn gives_check(&mut self, id: PieceId, to: Square) -> bool {
        let mover = self.piece(id).color;
        let probe = self.scoped_move(id, to, None);
        probe.is_in_check(mover.opposite())
    }

    /// First occupied square walking from `from` in `direction`, excluding `from`.
    fn first_blocker(&self, from: Square, (file_delta, rank_delta): (i8, i8)) -> Option<Square> {
        let mut current = from;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            if !self.is_empty(next) {
                return Some(next);
            }
            current = next;
        }
        None
    }
}
