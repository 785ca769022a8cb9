use log::trace;

use super::piece_moves::Destinations;
use super::{Color, Move, Piece, PieceId, Position, Square, Type};

impl Position {
    /// Generate legal destinations for a piece into a provided buffer.
    /// The buffer is NOT cleared before adding moves.
    ///
    /// Every pseudo-legal destination is probed by playing it on this
    /// position and checking the mover's king afterwards; the probe is undone
    /// before the next candidate is looked at.
    pub fn legal_moves_into(&mut self, id: PieceId, moves: &mut Destinations) {
        let piece = *self.piece(id);
        if piece.captured {
            return;
        }

        let mut candidates = Destinations::new();
        self.pseudo_legal_moves_into(id, &mut candidates);
        for to in candidates {
            if self.is_safe(&piece, to) {
                moves.push(to);
            }
        }
    }

    /// Legal destinations of one piece, for highlighting and validation.
    pub fn legal_moves(&mut self, id: PieceId) -> Destinations {
        let mut moves = Destinations::new();
        self.legal_moves_into(id, &mut moves);
        moves
    }

    pub fn is_legal(&mut self, id: PieceId, to: Square) -> bool {
        self.legal_moves(id).contains(&to)
    }

    /// All legal moves of one side, in piece arena order.
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<Move> {
        let mut all_moves = Vec::with_capacity(40); // Typical position has 30-40 legal moves
        let mut destinations = Destinations::new();
        for id in self.piece_ids_of(color) {
            destinations.clear();
            self.legal_moves_into(id, &mut destinations);
            let from = self.piece(id).square;
            all_moves.extend(destinations.iter().map(|&to| Move::new(id, from, to)));
        }
        all_moves
    }

    /// Checks if the given color has ANY legal moves available
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        let mut destinations = Destinations::new();
        for id in self.piece_ids_of(color) {
            self.legal_moves_into(id, &mut destinations);
            if !destinations.is_empty() {
                return true;
            }
        }
        false
    }

    /// Decides whether a pseudo-legal move keeps the mover's king safe.
    ///
    /// Castling additionally requires that the king is not in check now and
    /// that the square it crosses is not attacked. The square it crosses is
    /// also where the rook lands.
    fn is_safe(&mut self, piece: &Piece, to: Square) -> bool {
        let opponent = piece.color.opposite();

        if piece.piece_type == Type::King && piece.square.file_distance(to) == 2 {
            if self.is_in_check(piece.color) {
                trace!("castling {}{} rejected: king is in check", piece.square, to);
                return false;
            }
            let direction = if to.file() > piece.square.file() { 1 } else { -1 };
            let transit = piece.square.offset(direction, 0);
            if transit.map_or(true, |sq| self.is_attacked(sq, opponent)) {
                trace!("castling {}{} rejected: transit square attacked", piece.square, to);
                return false;
            }
        }

        let probe = self.scoped_move(piece.id, to, None);
        let safe = !probe.is_in_check(piece.color);
        if !safe {
            trace!("{}{} rejected: leaves the king in check", piece.square, to);
        }
        safe
    }
}
