use super::moves::RookRelocation;
use super::{MoveKind, MoveRecord, PieceId, Position, Square, Type};

impl Position {
    /// Executes a move and returns the record needed to undo it.
    ///
    /// No legality check happens here: the executor is shared by real moves
    /// (validated by the caller) and by search and legality probes. A pawn
    /// reaching the last rank becomes `promotion`, or a queen when none is given.
    ///
    /// # Panics
    ///
    /// Panics if the piece has been captured, if it would capture a piece of
    /// its own color, or if a promotion to a pawn or king is requested.
    pub fn apply_move(&mut self, id: PieceId, to: Square, promotion: Option<Type>) -> MoveRecord {
        let piece = *self.piece(id);
        assert!(!piece.captured, "cannot move captured piece {:?}", id);
        let from = piece.square;
        let mut kind = MoveKind::Normal;

        // Ordinary capture, otherwise an en passant victim behind the destination
        let captured = match self.board[to.index()] {
            Some(victim) => {
                assert!(
                    self.piece(victim).color != piece.color,
                    "{} cannot capture its own piece on {}",
                    from,
                    to
                );
                kind = MoveKind::Capture;
                Some(victim)
            }
            None if piece.piece_type == Type::Pawn => {
                let victim = self.en_passant_victim(&piece, to);
                if victim.is_some() {
                    kind = MoveKind::EnPassant;
                }
                victim
            }
            None => None,
        };
        if let Some(victim) = captured {
            self.remove_piece(victim);
        }

        let rook = if piece.piece_type == Type::King && from.file_distance(to) == 2 {
            kind = MoveKind::Castling;
            Some(self.relocate_castling_rook(from, to))
        } else {
            None
        };

        self.board[from.index()] = None;
        self.board[to.index()] = Some(id);
        let ply = self.ply;
        let moved = self.piece_mut(id);
        moved.square = to;
        moved.last_square = Some(from);
        moved.last_moved_ply = Some(ply);

        let promotion = if piece.piece_type == Type::Pawn && to.row() == piece.color.promotion_row() {
            let new_type = promotion.unwrap_or(Type::Queen);
            assert!(new_type.can_promote_to(), "cannot promote to {:?}", new_type);
            moved.piece_type = new_type;
            kind = MoveKind::Promotion;
            Some(new_type)
        } else {
            None
        };

        let prev_halfmove_clock = self.halfmove_clock;
        self.halfmove_clock = if piece.piece_type == Type::Pawn || captured.is_some() {
            0
        } else {
            prev_halfmove_clock + 1
        };
        let prev_side_to_move = self.side_to_move;
        self.side_to_move = piece.color.opposite();
        self.ply += 1;

        MoveRecord {
            piece: id,
            from,
            to,
            kind,
            captured,
            rook,
            promotion,
            prev_last_square: piece.last_square,
            prev_last_moved_ply: piece.last_moved_ply,
            prev_halfmove_clock,
            prev_side_to_move,
            ply,
        }
    }

    /// Exact inverse of [`apply_move`](Self::apply_move).
    ///
    /// # Panics
    ///
    /// Panics if `record` is not the most recently applied move.
    pub fn undo_move(&mut self, record: MoveRecord) {
        assert_eq!(
            self.ply,
            record.ply + 1,
            "moves must be undone in reverse order of application"
        );

        self.board[record.to.index()] = None;
        self.board[record.from.index()] = Some(record.piece);
        let moved = self.piece_mut(record.piece);
        moved.square = record.from;
        moved.last_square = record.prev_last_square;
        moved.last_moved_ply = record.prev_last_moved_ply;
        if record.promotion.is_some() {
            moved.piece_type = Type::Pawn;
        }

        if let Some(rook) = record.rook {
            self.board[rook.to.index()] = None;
            self.board[rook.from.index()] = Some(rook.rook);
            let restored = self.piece_mut(rook.rook);
            restored.square = rook.from;
            restored.last_square = rook.prev_last_square;
            restored.last_moved_ply = rook.prev_last_moved_ply;
        }

        if let Some(victim) = record.captured {
            let restored = self.piece_mut(victim);
            restored.captured = false;
            let square = restored.square;
            self.board[square.index()] = Some(victim);
        }

        self.halfmove_clock = record.prev_halfmove_clock;
        self.side_to_move = record.prev_side_to_move;
        self.ply = record.ply;
    }

    /// Swaps the kind of a piece in place, keeping its color, square and history.
    /// Used to apply the promotion choice after a pawn has reached the last rank.
    ///
    /// # Panics
    ///
    /// Panics if `new_type` is not a promotion kind.
    pub fn promote(&mut self, id: PieceId, new_type: Type) {
        assert!(new_type.can_promote_to(), "cannot promote to {:?}", new_type);
        self.piece_mut(id).piece_type = new_type;
    }

    fn remove_piece(&mut self, id: PieceId) {
        let piece = self.piece_mut(id);
        piece.captured = true;
        let square = piece.square;
        self.board[square.index()] = None;
    }

    /// Moves the rook next to a castling king, on the side the king moved to.
    fn relocate_castling_rook(&mut self, king_from: Square, king_to: Square) -> RookRelocation {
        let direction: i8 = if king_to.file() > king_from.file() { 1 } else { -1 };
        let rook_file = if direction > 0 { 7 } else { 0 };
        let rook_from = Square::from_file_row(rook_file, king_from.row())
            .expect("castling rook file is on the board");
        let rook_to = king_to
            .offset(-direction, 0)
            .expect("square beside the castled king is on the board");
        let rook_id = self.board[rook_from.index()]
            .unwrap_or_else(|| panic!("castling without a rook on {}", rook_from));

        let ply = self.ply;
        self.board[rook_from.index()] = None;
        self.board[rook_to.index()] = Some(rook_id);
        let rook = self.piece_mut(rook_id);
        let relocation = RookRelocation {
            rook: rook_id,
            from: rook_from,
            to: rook_to,
            prev_last_square: rook.last_square,
            prev_last_moved_ply: rook.last_moved_ply,
        };
        rook.square = rook_to;
        rook.last_square = Some(rook_from);
        rook.last_moved_ply = Some(ply);
        relocation
    }
}
