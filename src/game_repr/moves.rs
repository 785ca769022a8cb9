use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{Color, PieceId, Position, Square, Type};

/// Shape of an executed move, as seen by a caller that needs to react to it
/// (rook relocation, promotion picker, removed en passant victim).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Capture,
    EnPassant,
    Castling,
    Promotion,
}

/// A move request: which piece goes where, and what a promoting pawn becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Type>,
}

impl Move {
    pub fn new(piece: PieceId, from: Square, to: Square) -> Self {
        Self {
            piece,
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, promotion: Type) -> Self {
        self.promotion = Some(promotion);
        self
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.symbol().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// Everything needed to restore the position exactly as it was before a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub(crate) piece: PieceId,
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) kind: MoveKind,
    pub(crate) captured: Option<PieceId>,
    pub(crate) rook: Option<RookRelocation>,
    pub(crate) promotion: Option<Type>,
    pub(crate) prev_last_square: Option<Square>,
    pub(crate) prev_last_moved_ply: Option<u32>,
    pub(crate) prev_halfmove_clock: u32,
    pub(crate) prev_side_to_move: Color,
    pub(crate) ply: u32,
}

/// Rook move performed as part of castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RookRelocation {
    pub(crate) rook: PieceId,
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) prev_last_square: Option<Square>,
    pub(crate) prev_last_moved_ply: Option<u32>,
}

impl MoveRecord {
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The piece removed from the board by this move, including en passant victims.
    pub fn captured(&self) -> Option<PieceId> {
        self.captured
    }

    /// Kind the pawn was promoted to, if this move promoted.
    pub fn promotion(&self) -> Option<Type> {
        self.promotion
    }

    pub fn as_move(&self) -> Move {
        Move {
            piece: self.piece,
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

/// A move that is undone when the guard goes out of scope.
///
/// Legality probes and search both simulate moves on the one live position;
/// the guard makes the inverse application unconditional, including on early
/// return. The guard dereferences to the position in its post-move state.
pub struct ScopedMove<'a> {
    position: &'a mut Position,
    record: Option<MoveRecord>,
}

impl<'a> ScopedMove<'a> {
    pub(crate) fn new(
        position: &'a mut Position,
        piece: PieceId,
        to: Square,
        promotion: Option<Type>,
    ) -> Self {
        let record = position.apply_move(piece, to, promotion);
        Self {
            position,
            record: Some(record),
        }
    }

    pub fn record(&self) -> &MoveRecord {
        self.record
            .as_ref()
            .expect("scoped move record is only taken on drop")
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        if let Some(record) = self.record.take() {
            self.position.undo_move(record);
        }
    }
}

impl Position {
    /// Applies a move for the lifetime of the returned guard.
    pub fn scoped_move(
        &mut self,
        piece: PieceId,
        to: Square,
        promotion: Option<Type>,
    ) -> ScopedMove<'_> {
        ScopedMove::new(self, piece, to, promotion)
    }
}
