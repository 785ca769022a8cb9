use std::fmt;

use smallvec::SmallVec;

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Piece ids of one side, collected so the position can be mutated while iterating.
pub type PieceIds = SmallVec<[PieceId; 16]>;

/// Back rank layout from the a-file to the h-file.
const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Piece arena indexed by `PieceId`. Captured pieces stay here, flagged,
    /// so undo can restore them.
    pub(crate) pieces: Vec<Piece>,
    /// Square lookup kept in sync with `Piece::square` of every live piece.
    pub(crate) board: [Option<PieceId>; 64],
    pub(crate) side_to_move: Color,
    /// Plies since the last pawn move or capture.
    pub(crate) halfmove_clock: u32,
    /// Plies played since the position was set up.
    pub(crate) ply: u32,
}

impl Default for Position {
    fn default() -> Self {
        let mut pos = Self::empty();
        for color in [Color::White, Color::Black] {
            for file in 0..8u8 {
                let pawn_sq = Square::from_file_row(file, color.pawn_row())
                    .expect("pawn row is on the board");
                pos.place(color, Type::Pawn, pawn_sq);
            }
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let sq = Square::from_file_row(file as u8, color.home_row())
                    .expect("home row is on the board");
                pos.place(color, kind, sq);
            }
        }
        pos
    }
}

impl Position {
    /// A board with no pieces and White to move.
    pub fn empty() -> Self {
        Self {
            pieces: Vec::with_capacity(32),
            board: [None; 64],
            side_to_move: Color::White,
            halfmove_clock: 0,
            ply: 0,
        }
    }

    /// Puts a new, unmoved piece on an empty square.
    ///
    /// # Panics
    ///
    /// Panics if the square is already occupied.
    pub fn place(&mut self, color: Color, piece_type: Type, square: Square) -> PieceId {
        assert!(
            self.board[square.index()].is_none(),
            "square {} is already occupied",
            square
        );
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Piece::new(id, color, piece_type, square));
        self.board[square.index()] = Some(id);
        id
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn set_halfmove_clock(&mut self, plies: u32) {
        self.halfmove_clock = plies;
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Looks up a piece record by id, captured or not.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this position.
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub fn get_piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board[square.index()].map(|id| &self.pieces[id.index()])
    }

    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        self.board[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board[square.index()].is_none()
    }

    /// True if `square` holds a piece of the color opposite to `color`.
    #[inline]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).map_or(false, |p| p.color != color)
    }

    pub fn live_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| !p.captured)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.live_pieces().filter(move |p| p.color == color)
    }

    pub fn piece_ids_of(&self, color: Color) -> PieceIds {
        self.pieces_of(color).map(|p| p.id).collect()
    }

    /// The king of `color`.
    ///
    /// # Panics
    ///
    /// Panics unless exactly one king of that color is on the board.
    pub fn king(&self, color: Color) -> &Piece {
        let mut kings = self
            .pieces_of(color)
            .filter(|p| p.piece_type == Type::King);
        let king = kings
            .next()
            .unwrap_or_else(|| panic!("no {:?} king on the board", color));
        assert!(kings.next().is_none(), "more than one {:?} king", color);
        king
    }

    /// Perft (Performance Test) - counts leaf nodes of the legal move tree.
    /// Destinations are squares, so a promotion counts once.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves(self.side_to_move);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut child = self.scoped_move(mv.piece, mv.to, mv.promotion);
            nodes += child.perft(depth - 1);
        }
        nodes
    }

    /// Divide - perft count for each first-level move (debugging tool)
    pub fn divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.all_legal_moves(self.side_to_move);
        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            let mut child = self.scoped_move(mv.piece, mv.to, mv.promotion);
            counts.push((mv, child.perft(depth.saturating_sub(1))));
        }
        counts
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for file in 0..8u8 {
                let sq = Square::from_file_row(file, row).ok_or(fmt::Error)?;
                let symbol = self.piece_at(sq).map_or('.', |p| p.symbol());
                write!(f, "{}", symbol)?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
