use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to parse a coordinate like "e4"
pub fn sq(coordinate: &str) -> Square {
    Square::at(coordinate)
}

/// Helper function to place a piece on a coordinate
pub fn place_piece(pos: &mut Position, coordinate: &str, color: Color, piece_type: Type) -> PieceId {
    pos.place(color, piece_type, sq(coordinate))
}

/// Helper function to check if a destination exists in the move list
pub fn has_move(moves: &[Square], to: &str) -> bool {
    moves.contains(&sq(to))
}

/// Legal destinations of the piece standing on `from`
pub fn moves_from(pos: &mut Position, from: &str) -> Destinations {
    let id = pos
        .piece_id_at(sq(from))
        .unwrap_or_else(|| panic!("no piece on {}", from));
    pos.legal_moves(id)
}

/// Builds a position from eight diagram rows, rank 8 first.
/// Upper case is White, lower case Black, '.' an empty square.
pub fn from_diagram(rows: [&str; 8]) -> Position {
    let mut pos = empty_board();
    for (row, line) in rows.iter().enumerate() {
        for (file, symbol) in line.chars().enumerate() {
            if symbol == '.' {
                continue;
            }
            let piece_type = Type::from_symbol(symbol)
                .unwrap_or_else(|| panic!("bad diagram symbol {:?}", symbol));
            let color = if symbol.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::from_file_row(file as u8, row as u8).unwrap();
            pos.place(color, piece_type, square);
        }
    }
    pos
}

/// Plays a move for whichever piece stands on `from`, asserting it is legal
pub fn play(pos: &mut Position, from: &str, to: &str) -> MoveRecord {
    let id = pos
        .piece_id_at(sq(from))
        .unwrap_or_else(|| panic!("no piece on {}", from));
    assert!(pos.is_legal(id, sq(to)), "{}{} should be legal", from, to);
    pos.apply_move(id, sq(to), None)
}

// ==================== TEST MODULES ====================

mod undo;
mod regression;
