//! Game facade: the interface external collaborators use to play a game.
//!
//! A front end needs three things from the core: the legal destinations of a
//! piece, a way to execute a move (with an optional promotion choice), and the
//! result once the game is over. [`Game`] wraps a [`Position`] with the move
//! history and the current [`GameResult`] and validates every request before
//! touching the position. A rejected request returns a [`MoveError`] and
//! leaves the game exactly as it was.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::agent::ai::select_move;
use crate::agent::SearchResult;
use crate::config::SearchConfig;
use crate::game_repr::{
    Color, Destinations, GameResult, Move, MoveKind, MoveRecord, ParseSquareError, Piece, PieceId,
    Position, Square, Type,
};

/// Why a move request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece with id {0:?}")]
    UnknownPiece(PieceId),
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("piece {0:?} has been captured")]
    PieceCaptured(PieceId),
    #[error("it is {expected:?}'s turn to move")]
    NotYourTurn { expected: Color },
    #[error("{from}{to} is not a legal move")]
    IllegalDestination { from: Square, to: Square },
    #[error("the last move did not promote that piece")]
    NotPromotable,
    #[error("a pawn cannot promote to {0:?}")]
    InvalidPromotion(Type),
    #[error("malformed move {0:?}")]
    InvalidNotation(String),
    #[error(transparent)]
    InvalidSquare(#[from] ParseSquareError),
    #[error("the game is over: {0}")]
    GameOver(GameResult),
    #[error("no move to take back")]
    NothingToTakeBack,
}

/// What an executed move did, for a caller that has to react to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub kind: MoveKind,
    /// The removed piece, en passant victims included.
    pub captured: Option<Piece>,
    /// Kind a pawn turned into; a front end may still swap it with
    /// [`Game::promote`].
    pub promoted_to: Option<Type>,
    /// The opponent is now in check.
    pub gives_check: bool,
    /// Result for the side now to move.
    pub result: GameResult,
}

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    history: Vec<MoveRecord>,
    result: GameResult,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard initial layout.
    pub fn new() -> Self {
        Self::from_position(Position::default())
    }

    /// A game continuing from an arbitrary position. The result is classified
    /// immediately for the side to move.
    pub fn from_position(mut position: Position) -> Self {
        let result = position.classify(position.side_to_move());
        Self {
            position,
            history: Vec::new(),
            result,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Executed moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.position.piece_at(square)
    }

    /// Legal destinations of a piece. Empty for captured pieces, pieces of
    /// the side not to move, and once the game is over.
    pub fn legal_moves(&mut self, id: PieceId) -> Destinations {
        let movable = self
            .position
            .get_piece(id)
            .map_or(false, |p| !p.captured && p.color == self.side_to_move());
        if !movable || self.is_over() {
            return Destinations::new();
        }
        self.position.legal_moves(id)
    }

    /// Legal destinations of whatever piece stands on `square`.
    pub fn legal_moves_from(&mut self, square: Square) -> Destinations {
        match self.position.piece_id_at(square) {
            Some(id) => self.legal_moves(id),
            None => Destinations::new(),
        }
    }

    /// Every legal move of the side to move.
    pub fn all_legal_moves(&mut self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        let side = self.side_to_move();
        self.position.all_legal_moves(side)
    }

    /// Executes a move, promoting to a queen if a pawn reaches the last rank.
    pub fn execute_move(&mut self, id: PieceId, to: Square) -> Result<MoveOutcome, MoveError> {
        self.execute_move_with_promotion(id, to, None)
    }

    /// Executes a move after validating it against the legal moves of the
    /// side to move. `promotion` only matters for a pawn reaching the last
    /// rank and defaults to a queen.
    pub fn execute_move_with_promotion(
        &mut self,
        id: PieceId,
        to: Square,
        promotion: Option<Type>,
    ) -> Result<MoveOutcome, MoveError> {
        let piece = match self.validate(id, to, promotion) {
            Ok(piece) => piece,
            Err(err) => {
                debug!("rejected move of {:?} to {}: {}", id, to, err);
                return Err(err);
            }
        };

        let record = self.position.apply_move(id, to, promotion);
        let opponent = piece.color.opposite();
        let captured = record.captured().map(|victim| *self.position.piece(victim));
        let gives_check = self.position.is_in_check(opponent);
        self.result = self.position.classify(opponent);

        let outcome = MoveOutcome {
            mv: record.as_move(),
            kind: record.kind(),
            captured,
            promoted_to: record.promotion(),
            gives_check,
            result: self.result,
        };
        self.history.push(record);
        Ok(outcome)
    }

    /// Executes a move given as a [`Move`], e.g. one returned by a player.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.execute_move_with_promotion(mv.piece, mv.to, mv.promotion)
    }

    /// Parses coordinate notation like `"e2e4"` or `"e7e8n"` into a move of
    /// the piece standing on the origin square.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveError> {
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(MoveError::InvalidNotation(text.to_string()));
        }
        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;
        let promotion = match text[4..].chars().next() {
            Some(symbol) => Some(
                Type::from_symbol(symbol).ok_or_else(|| MoveError::InvalidNotation(text.to_string()))?,
            ),
            None => None,
        };

        let id = self
            .position
            .piece_id_at(from)
            .ok_or(MoveError::EmptySquare(from))?;
        Ok(Move {
            piece: id,
            from,
            to,
            promotion,
        })
    }

    /// Parses and executes a move in coordinate notation.
    pub fn play_notation(&mut self, text: &str) -> Result<MoveOutcome, MoveError> {
        let mv = self.parse_move(text).map_err(|err| {
            debug!("rejected move {:?}: {}", text, err);
            err
        })?;
        self.play(mv)
    }

    /// Swaps the kind of a pawn promoted by the last move, for a front end
    /// that lets the user pick the piece after the pawn has landed.
    pub fn promote(&mut self, id: PieceId, kind: Type) -> Result<(), MoveError> {
        if !kind.can_promote_to() {
            return Err(MoveError::InvalidPromotion(kind));
        }
        let record = self
            .history
            .last_mut()
            .filter(|record| record.piece() == id && record.kind() == MoveKind::Promotion)
            .ok_or(MoveError::NotPromotable)?;
        record.promotion = Some(kind);

        self.position.promote(id, kind);
        let side = self.side_to_move();
        self.result = self.position.classify(side);
        Ok(())
    }

    /// Result for the side to move, recomputed from the position.
    pub fn classify(&mut self) -> GameResult {
        let side = self.side_to_move();
        self.result = self.position.classify(side);
        self.result
    }

    /// Searches for the best move of the side to move without playing it.
    pub fn select_move(&mut self, config: &SearchConfig) -> SearchResult {
        let side = self.side_to_move();
        select_move(&mut self.position, side, config)
    }

    /// Undoes the last executed move.
    pub fn take_back(&mut self) -> Result<MoveRecord, MoveError> {
        let record = self.history.pop().ok_or(MoveError::NothingToTakeBack)?;
        self.position.undo_move(record.clone());
        self.classify();
        Ok(record)
    }

    fn validate(&mut self, id: PieceId, to: Square, promotion: Option<Type>) -> Result<Piece, MoveError> {
        if self.result.is_over() {
            return Err(MoveError::GameOver(self.result));
        }
        let piece = *self.position.get_piece(id).ok_or(MoveError::UnknownPiece(id))?;
        if piece.captured {
            return Err(MoveError::PieceCaptured(id));
        }
        let expected = self.side_to_move();
        if piece.color != expected {
            return Err(MoveError::NotYourTurn { expected });
        }
        if let Some(kind) = promotion.filter(|kind| !kind.can_promote_to()) {
            return Err(MoveError::InvalidPromotion(kind));
        }
        if !self.position.is_legal(id, to) {
            return Err(MoveError::IllegalDestination {
                from: piece.square,
                to,
            });
        }
        Ok(piece)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.position)?;
        write!(f, "{:?} to move, {}", self.side_to_move(), self.result)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game_repr::DrawReason;

    fn sq(coordinate: &str) -> Square {
        Square::at(coordinate)
    }

    fn id_at(game: &Game, coordinate: &str) -> PieceId {
        game.position().piece_id_at(sq(coordinate)).unwrap()
    }

    #[test]
    fn test_legal_moves_query() {
        let mut game = Game::new();
        let knight = id_at(&game, "g1");
        let moves = game.legal_moves(knight);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&sq("f3")));
        assert!(moves.contains(&sq("h3")));

        // Black pieces cannot move on White's turn
        assert!(game.legal_moves_from(sq("g8")).is_empty());
        assert!(game.legal_moves_from(sq("e4")).is_empty());
    }

    #[test]
    fn test_execute_move_updates_turn_and_history() {
        let mut game = Game::new();
        let pawn = id_at(&game, "e2");
        let outcome = game.execute_move(pawn, sq("e4")).unwrap();

        assert_eq!(outcome.kind, MoveKind::Normal);
        assert_eq!(outcome.mv.to_string(), "e2e4");
        assert_eq!(outcome.result, GameResult::Ongoing);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_rejected_moves_leave_game_unchanged() {
        let mut game = Game::new();
        let before = game.position().clone();

        let pawn = id_at(&game, "e2");
        assert_eq!(
            game.execute_move(pawn, sq("e5")),
            Err(MoveError::IllegalDestination { from: sq("e2"), to: sq("e5") })
        );
        let black_pawn = id_at(&game, "e7");
        assert_eq!(
            game.execute_move(black_pawn, sq("e5")),
            Err(MoveError::NotYourTurn { expected: Color::White })
        );
        assert_eq!(
            game.execute_move(PieceId(99), sq("e4")),
            Err(MoveError::UnknownPiece(PieceId(99)))
        );
        assert_eq!(
            game.execute_move_with_promotion(pawn, sq("e4"), Some(Type::King)),
            Err(MoveError::InvalidPromotion(Type::King))
        );

        assert_eq!(game.position(), &before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_captured_piece_cannot_move() {
        let mut game = Game::new();
        for mv in ["e2e4", "d7d5", "e4d5", "d8d5"] {
            game.play_notation(mv).unwrap();
        }
        let white_pawn = game.history()[2].piece();
        game.play_notation("b1c3").unwrap();
        game.play_notation("a7a6").unwrap();
        assert_eq!(
            game.execute_move(white_pawn, sq("d6")),
            Err(MoveError::PieceCaptured(white_pawn))
        );
    }

    #[test]
    fn test_move_outcome_reports_capture() {
        let mut game = Game::new();
        for mv in ["e2e4", "d7d5"] {
            game.play_notation(mv).unwrap();
        }
        let outcome = game.play_notation("e4d5").unwrap();
        assert_eq!(outcome.kind, MoveKind::Capture);
        let captured = outcome.captured.unwrap();
        assert_eq!(captured.piece_type, Type::Pawn);
        assert_eq!(captured.color, Color::Black);
        assert!(captured.captured);
    }

    #[test]
    fn test_parse_move_errors() {
        let game = Game::new();
        assert!(matches!(game.parse_move("e2"), Err(MoveError::InvalidNotation(_))));
        assert!(matches!(game.parse_move("z2e4"), Err(MoveError::InvalidSquare(_))));
        assert_eq!(game.parse_move("e4e5"), Err(MoveError::EmptySquare(sq("e4"))));
        assert!(matches!(game.parse_move("e7e8x"), Err(MoveError::InvalidNotation(_))));

        let mv = game.parse_move("b1c3").unwrap();
        assert_eq!(mv.from, sq("b1"));
        assert_eq!(mv.promotion, None);
    }

    #[test]
    fn test_promotion_choice_after_landing() {
        let mut pos = Position::empty();
        pos.place(Color::White, Type::King, sq("a1"));
        pos.place(Color::Black, Type::King, sq("h6"));
        pos.place(Color::Black, Type::Pawn, sq("a7"));
        let pawn = pos.place(Color::White, Type::Pawn, sq("e7"));
        let mut game = Game::from_position(pos);

        let outcome = game.execute_move(pawn, sq("e8")).unwrap();
        assert_eq!(outcome.kind, MoveKind::Promotion);
        assert_eq!(outcome.promoted_to, Some(Type::Queen));

        assert_eq!(game.promote(pawn, Type::Pawn), Err(MoveError::InvalidPromotion(Type::Pawn)));
        game.promote(pawn, Type::Knight).unwrap();
        assert_eq!(game.piece_at(sq("e8")).map(|p| p.piece_type), Some(Type::Knight));
        assert_eq!(game.history()[0].promotion(), Some(Type::Knight));

        // Only the piece that just promoted can be swapped
        let king = id_at(&game, "h6");
        game.play(Move::new(king, sq("h6"), sq("h5"))).unwrap();
        assert_eq!(game.promote(pawn, Type::Rook), Err(MoveError::NotPromotable));
    }

    #[test]
    fn test_underpromotion_to_lone_minor_is_a_draw() {
        let mut pos = Position::empty();
        pos.place(Color::White, Type::King, sq("a1"));
        pos.place(Color::Black, Type::King, sq("h6"));
        let pawn = pos.place(Color::White, Type::Pawn, sq("e7"));
        let mut game = Game::from_position(pos);

        game.execute_move(pawn, sq("e8")).unwrap();
        assert_eq!(game.result(), GameResult::Ongoing);

        game.promote(pawn, Type::Knight).unwrap();
        assert_eq!(game.result(), GameResult::Draw(DrawReason::InsufficientMaterial));
        let king = id_at(&game, "h6");
        assert_eq!(
            game.play(Move::new(king, sq("h6"), sq("h5"))),
            Err(MoveError::GameOver(GameResult::Draw(DrawReason::InsufficientMaterial)))
        );
    }

    #[test]
    fn test_promotion_via_notation() {
        let mut pos = Position::empty();
        pos.place(Color::White, Type::King, sq("a1"));
        pos.place(Color::Black, Type::King, sq("h6"));
        pos.place(Color::White, Type::Pawn, sq("e7"));
        let mut game = Game::from_position(pos);

        let outcome = game.play_notation("e7e8r").unwrap();
        assert_eq!(outcome.promoted_to, Some(Type::Rook));
        assert_eq!(outcome.mv.to_string(), "e7e8r");
    }

    #[test]
    fn test_take_back_restores_position() {
        let mut game = Game::new();
        let start = game.position().clone();
        for mv in ["e2e4", "e7e5", "g1f3"] {
            game.play_notation(mv).unwrap();
        }

        let record = game.take_back().unwrap();
        assert_eq!(record.as_move().to_string(), "g1f3");
        assert_eq!(game.side_to_move(), Color::White);
        game.take_back().unwrap();
        game.take_back().unwrap();
        assert_eq!(game.position(), &start);
        assert_eq!(game.take_back(), Err(MoveError::NothingToTakeBack));
    }

    #[test]
    fn test_fools_mate_ends_game() {
        let mut game = Game::new();
        for mv in ["f2f3", "e7e5", "g2g4"] {
            assert_eq!(game.play_notation(mv).unwrap().result, GameResult::Ongoing);
        }
        let outcome = game.play_notation("d8h4").unwrap();
        assert!(outcome.gives_check);
        assert_eq!(outcome.result, GameResult::Checkmate { winner: Color::Black });
        assert!(game.is_over());
        assert!(game.all_legal_moves().is_empty());

        let pawn = id_at(&game, "a2");
        assert!(matches!(
            game.execute_move(pawn, sq("a3")),
            Err(MoveError::GameOver(GameResult::Checkmate { .. }))
        ));

        // Taking back the mating move reopens the game
        game.take_back().unwrap();
        assert_eq!(game.result(), GameResult::Ongoing);
    }

    #[test]
    fn test_select_move_does_not_play() {
        let mut game = Game::new();
        let config = SearchConfig::with_depth(1).seeded(1);
        let result = game.select_move(&config);
        let mv = result.best_move.unwrap();
        assert!(game.history().is_empty());
        game.play(mv).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
    }
}
