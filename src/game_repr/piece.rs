use super::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    /// Material value in centipawns. The king is never traded, so it carries none.
    pub fn value(self) -> i32 {
        match self {
            Type::Pawn => 100,
            Type::Knight => 300,
            Type::Bishop => 320,
            Type::Rook => 500,
            Type::Queen => 900,
            Type::King => 0,
        }
    }

    pub fn is_minor(self) -> bool {
        matches!(self, Type::Bishop | Type::Knight)
    }

    pub fn can_promote_to(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// Upper-case letter for the kind, as used in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Type::King => 'K',
            Type::Queen => 'Q',
            Type::Rook => 'R',
            Type::Bishop => 'B',
            Type::Knight => 'N',
            Type::Pawn => 'P',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(Type::King),
            'Q' => Some(Type::Queen),
            'R' => Some(Type::Rook),
            'B' => Some(Type::Bishop),
            'N' => Some(Type::Knight),
            'P' => Some(Type::Pawn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Direction a pawn of this color advances, in ranks.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Row (0 = rank 8) this color's pawns start on.
    pub fn pawn_row(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Row holding this color's king and rooks at setup.
    pub fn home_row(&self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

/// Stable identity of a piece inside a [`Position`](super::Position) arena.
///
/// Ids are never reused within a game; a captured piece keeps its id so that
/// undo can put it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece record. The piece tracks its own square; the position mirrors it
/// in a square lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub piece_type: Type,
    pub square: Square,
    /// Square the piece left on its most recent move.
    pub last_square: Option<Square>,
    /// Ply on which the piece last moved; `None` while it has never moved.
    pub last_moved_ply: Option<u32>,
    pub captured: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, color: Color, piece_type: Type, square: Square) -> Self {
        Self {
            id,
            color,
            piece_type,
            square,
            last_square: None,
            last_moved_ply: None,
            captured: false,
        }
    }

    pub fn has_moved(&self) -> bool {
        self.last_moved_ply.is_some()
    }

    pub fn value(&self) -> i32 {
        self.piece_type.value()
    }

    /// Board-diagram letter: upper case for White, lower case for Black.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.piece_type.symbol(),
            Color::Black => self.piece_type.symbol().to_ascii_lowercase(),
        }
    }

    /// True if the previous move of this piece was a two-square pawn advance.
    pub fn just_double_stepped(&self, current_ply: u32) -> bool {
        self.piece_type == Type::Pawn
            && self.last_moved_ply.map(|ply| ply + 1) == Some(current_ply)
            && self
                .last_square
                .map_or(false, |from| from.row_distance(self.square) == 2)
    }
}
