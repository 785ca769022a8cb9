use std::fmt;

use super::{Color, Position, Type};

/// Plies without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_PLIES: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// Neither side has the material to deliver mate
    InsufficientMaterial,
    /// The half-move clock reached [`FIFTY_MOVE_PLIES`]
    FiftyMoveRule,
}

/// Outcome of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Play continues
    Ongoing,
    /// The side to move is in check with no legal move
    Checkmate { winner: Color },
    /// The side to move has no legal move but is not in check
    Stalemate,
    Draw(DrawReason),
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        GameResult::Checkmate { winner }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "game in progress"),
            GameResult::Checkmate { winner: Color::White } => write!(f, "checkmate, White won"),
            GameResult::Checkmate { winner: Color::Black } => write!(f, "checkmate, Black won"),
            GameResult::Stalemate => write!(f, "stalemate, draw"),
            GameResult::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "draw by insufficient material")
            }
            GameResult::Draw(DrawReason::FiftyMoveRule) => write!(f, "draw by the fifty-move rule"),
        }
    }
}

impl Position {
    /// Classifies the position for `side` to move.
    ///
    /// Checkmate and stalemate need the full set of legal moves and take
    /// priority; the draw rules are independent of whose turn it is.
    pub fn classify(&mut self, side: Color) -> GameResult {
        let has_moves = self.has_legal_moves(side);
        self.outcome(side, has_moves)
    }

    /// Same as [`classify`](Self::classify) for a caller that already knows
    /// whether `side` has a legal move.
    pub fn outcome(&self, side: Color, has_legal_moves: bool) -> GameResult {
        if !has_legal_moves {
            return if self.is_in_check(side) {
                GameResult::from_winner(side.opposite())
            } else {
                GameResult::Stalemate
            };
        }
        if self.is_insufficient_material() {
            return GameResult::Draw(DrawReason::InsufficientMaterial);
        }
        if self.is_fifty_move_draw() {
            return GameResult::Draw(DrawReason::FiftyMoveRule);
        }
        GameResult::Ongoing
    }

    /// Returns true if the given color is in checkmate
    /// (in check AND has no legal moves)
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Returns true if the given color is in stalemate
    /// (NOT in check AND has no legal moves)
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Material too thin for either side to mate: bare kings, a single minor
    /// piece, or two bishops standing on squares of the same color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut others = self
            .live_pieces()
            .filter(|p| p.piece_type != Type::King);

        match (others.next(), others.next(), others.next()) {
            (None, _, _) => true,
            (Some(only), None, _) => only.piece_type.is_minor(),
            (Some(first), Some(second), None) => {
                first.piece_type == Type::Bishop
                    && second.piece_type == Type::Bishop
                    && first.square.is_light() == second.square.is_light()
            }
            _ => false,
        }
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_PLIES
    }
}
