// Regression tests for previously found bugs
//
// Linear index arithmetic wraps from the h-file to the a-file of the next
// rank; every generator has to reject those targets.

use super::*;

fn kings(pos: &mut Position) {
    place_piece(pos, "e1", Color::White, Type::King);
    place_piece(pos, "e8", Color::Black, Type::King);
}

// ==================== PAWN EDGE SQUARE BUG TEST ====================

#[test]
fn test_pawn_edge_square_capture_bug() {
    let mut pos = empty_board();
    kings(&mut pos);
    place_piece(&mut pos, "a3", Color::Black, Type::Pawn);
    // One index either side of the capture squares, across the board edge
    place_piece(&mut pos, "h3", Color::White, Type::Rook);
    place_piece(&mut pos, "h2", Color::White, Type::Rook);

    let moves = moves_from(&mut pos, "a3");
    assert_eq!(moves.len(), 1, "Black pawn at a3 should only have 1 move (a2)");
    assert!(has_move(&moves, "a2"));
    assert!(!has_move(&moves, "h2"), "BUG: pawn wrapped around the board edge");
}

#[test]
fn test_pawn_edge_square_right_edge() {
    let mut pos = empty_board();
    kings(&mut pos);
    place_piece(&mut pos, "h3", Color::White, Type::Pawn);
    place_piece(&mut pos, "a3", Color::Black, Type::Rook);
    place_piece(&mut pos, "a4", Color::Black, Type::Rook);

    let moves = moves_from(&mut pos, "h3");
    assert_eq!(moves.len(), 1, "White pawn at h3 should only have 1 move (h4)");
    assert!(has_move(&moves, "h4"));
}

// ==================== JUMPER AND SLIDER EDGE TESTS ====================

#[test]
fn test_knight_on_h_file_stays_on_board() {
    let mut pos = empty_board();
    kings(&mut pos);
    place_piece(&mut pos, "h4", Color::White, Type::Knight);

    let moves = moves_from(&mut pos, "h4");
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|to| to.file() >= 5));
}

#[test]
fn test_bishop_on_h_file_stays_on_board() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", Color::White, Type::King);
    place_piece(&mut pos, "a8", Color::Black, Type::King);
    place_piece(&mut pos, "h4", Color::White, Type::Bishop);

    let moves = moves_from(&mut pos, "h4");
    assert_eq!(moves.len(), 7);
    assert!(!has_move(&moves, "a4"));
    assert!(!has_move(&moves, "a5"));
}

#[test]
fn test_rook_on_h_file_does_not_continue_on_next_rank() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", Color::White, Type::King);
    place_piece(&mut pos, "a8", Color::Black, Type::King);
    place_piece(&mut pos, "h5", Color::White, Type::Rook);

    let moves = moves_from(&mut pos, "h5");
    assert_eq!(moves.len(), 14);
    assert!(!has_move(&moves, "a4"));
    assert!(!has_move(&moves, "a6"));
}

#[test]
fn test_castling_needs_rook_in_corner() {
    // Only a rook standing in the corner is a castling partner
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", Color::White, Type::King);
    place_piece(&mut pos, "g1", Color::White, Type::Rook);
    place_piece(&mut pos, "e8", Color::Black, Type::King);

    let moves = moves_from(&mut pos, "e1");
    assert!(!has_move(&moves, "g1"));
    assert!(!has_move(&moves, "c1"));
}
