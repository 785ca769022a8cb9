use pretty_assertions::assert_eq;

use super::*;

// ==================== APPLY / UNDO ROUND TRIPS ====================

/// Applies and undoes every legal move of the side to move, checking the
/// position comes back identical each time.
fn assert_round_trips(pos: &mut Position) {
    let before = pos.clone();
    let moves = pos.all_legal_moves(pos.side_to_move());
    assert!(!moves.is_empty());
    for mv in moves {
        let record = pos.apply_move(mv.piece, mv.to, mv.promotion);
        pos.undo_move(record);
        assert_eq!(*pos, before, "{} did not undo cleanly", mv);
    }
}

#[test]
fn test_round_trip_from_start() {
    assert_round_trips(&mut Position::default());
}

#[test]
fn test_round_trip_with_castling_and_captures() {
    let mut pos = from_diagram([
        "r...k..r",
        "p.ppqpb.",
        "bn..pnp.",
        "...PN...",
        ".p..P...",
        "..N..Q.p",
        "PPPBBPPP",
        "R...K..R",
    ]);
    assert_round_trips(&mut pos);
    pos.set_side_to_move(Color::Black);
    assert_round_trips(&mut pos);
}

#[test]
fn test_round_trip_en_passant() {
    let mut pos = Position::default();
    play(&mut pos, "e2", "e4");
    play(&mut pos, "e4", "e5");
    play(&mut pos, "d7", "d5");
    assert_round_trips(&mut pos);
}

#[test]
fn test_round_trip_promotion_with_capture() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", Color::White, Type::King);
    place_piece(&mut pos, "c6", Color::Black, Type::King);
    place_piece(&mut pos, "g7", Color::White, Type::Pawn);
    place_piece(&mut pos, "f8", Color::Black, Type::Knight);
    assert_round_trips(&mut pos);
}

#[test]
fn test_scoped_move_undoes_on_drop() {
    let mut pos = Position::default();
    let before = pos.clone();
    let pawn = pos.piece_id_at(sq("e2")).unwrap();
    {
        let probe = pos.scoped_move(pawn, sq("e4"), None);
        assert_eq!(probe.piece_at(sq("e4")).map(|p| p.id), Some(pawn));
        assert_eq!(probe.side_to_move(), Color::Black);
        assert_eq!(probe.record().kind(), MoveKind::Normal);
    }
    assert_eq!(pos, before);
}

#[test]
fn test_nested_scoped_moves_unwind_in_order() {
    let mut pos = Position::default();
    let before = pos.clone();
    let white_pawn = pos.piece_id_at(sq("e2")).unwrap();
    let black_pawn = pos.piece_id_at(sq("d7")).unwrap();
    {
        let mut first = pos.scoped_move(white_pawn, sq("e4"), None);
        let mut second = first.scoped_move(black_pawn, sq("d5"), None);
        let capture = second.scoped_move(white_pawn, sq("d5"), None);
        assert!(capture.piece(black_pawn).captured);
        assert_eq!(capture.ply(), 3);
    }
    assert_eq!(pos, before);
}

#[test]
fn test_legality_probe_leaves_no_trace() {
    let mut pos = Position::default();
    play(&mut pos, "e2", "e4");
    play(&mut pos, "d7", "d5");
    let before = pos.clone();

    let _ = pos.all_legal_moves(Color::White);
    let _ = pos.classify(Color::White);
    assert_eq!(pos, before);
}

#[test]
#[should_panic(expected = "reverse order")]
fn test_undo_out_of_order_panics() {
    let mut pos = Position::default();
    let first = play(&mut pos, "e2", "e4");
    play(&mut pos, "e7", "e5");
    pos.undo_move(first);
}
