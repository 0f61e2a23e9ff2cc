
use chess_engine::{
    position::Position,
    types::{Piece, PieceKind, Side, Square},
};
use test_utils::*;

mod opening {
    use super::*;

    #[test]
    fn test_e2_e4_is_legal_from_the_start() {
        let position = Position::new();

        assert!(is_legal(&position, "e2", "e4"));
        assert!(is_legal(&position, "e2", "e3"));
        assert!(position.is_legal(Square::new(4, 6), Square::new(4, 4)));
    }

    #[test]
    fn test_black_reply_only_after_white_moves() {
        let mut position = Position::new();

        assert!(!is_legal(&position, "e7", "e5"), "Black cannot move first");

        play(&mut position, &[("e2", "e4")]);

        assert_eq!(position.turn(), Side::Black);
        assert!(is_legal(&position, "e7", "e5"));
    }

    #[test]
    fn test_twenty_moves_each_side() {
        let position = Position::new();

        let moves = position.legal_moves();
        assert_eq!(moves.len(), 20);
        assert!(moves.contains(&(sq("g1"), sq("f3"))));
        assert!(moves.contains(&(sq("b1"), sq("c3"))));
        assert_eq!(position.legal_moves_for(Side::Black).len(), 20);
    }
}

mod pawns {
    use super::*;

    #[test]
    fn test_double_step_only_from_start_rank() {
        let mut position = position_with_kings(Side::White, "e1", "e8");
        add(&mut position, Side::White, PieceKind::Pawn, "a2");
        add(&mut position, Side::White, PieceKind::Pawn, "b3");

        assert!(is_legal(&position, "a2", "a4"));
        assert!(is_legal(&position, "b3", "b4"));
        assert!(!is_legal(&position, "b3", "b5"));
    }

    #[test]
    fn test_blocked_pawn_cannot_advance() {
        let mut position = position_with_kings(Side::White, "e1", "e8");
        add(&mut position, Side::White, PieceKind::Pawn, "d2");
        add(&mut position, Side::Black, PieceKind::Bishop, "d3");
        add(&mut position, Side::White, PieceKind::Pawn, "f2");
        add(&mut position, Side::Black, PieceKind::Knight, "f4");

        assert!(!is_legal(&position, "d2", "d3"), "Pushes never capture");
        assert!(!is_legal(&position, "d2", "d4"), "Cannot jump a blocker");
        assert!(is_legal(&position, "f2", "f3"));
        assert!(!is_legal(&position, "f2", "f4"), "Double step needs an empty target");
    }

    #[test]
    fn test_diagonal_only_captures() {
        let mut position = position_with_kings(Side::White, "e1", "e8");
        add(&mut position, Side::White, PieceKind::Pawn, "d4");
        add(&mut position, Side::Black, PieceKind::Pawn, "e5");
        add(&mut position, Side::White, PieceKind::Pawn, "c5");

        assert!(is_legal(&position, "d4", "e5"));
        assert!(!is_legal(&position, "d4", "c5"), "Own piece");
        assert!(!is_legal(&position, "d4", "e3"), "Backwards");
        assert!(!is_legal(&position, "d4", "c3"), "Backwards onto nothing");
    }

    #[test]
    fn test_black_pawns_move_down_the_board() {
        let mut position = position_with_kings(Side::Black, "e1", "e8");
        add(&mut position, Side::Black, PieceKind::Pawn, "c7");
        add(&mut position, Side::White, PieceKind::Bishop, "d6");

        assert!(is_legal(&position, "c7", "c5"));
        assert!(is_legal(&position, "c7", "d6"));
        assert!(!is_legal(&position, "c7", "c8"));
    }

    #[test]
    fn test_no_promotion_or_en_passant() {
        let mut position = position_with_kings(Side::White, "e1", "a8");
        add(&mut position, Side::White, PieceKind::Pawn, "g7");
        play(&mut position, &[("g7", "g8")]);

        assert!(
            position.piece_at(sq("g8")).is(Side::White, PieceKind::Pawn),
            "A pawn reaching the last rank stays a pawn"
        );

        let mut position = position_with_kings(Side::Black, "e1", "e8");
        add(&mut position, Side::White, PieceKind::Pawn, "e5");
        add(&mut position, Side::Black, PieceKind::Pawn, "d7");
        play(&mut position, &[("d7", "d5")]);

        assert!(!is_legal(&position, "e5", "d6"));
    }
}

mod pieces {
    use super::*;

    #[test]
    fn test_knight_jumps_over_pieces() {
        let position = Position::new();

        assert!(is_legal(&position, "g1", "h3"));
        assert!(!is_legal(&position, "g1", "g3"));
        assert!(!is_legal(&position, "g1", "e2"), "Own pawn");
    }

    #[test]
    fn test_bishop_needs_clear_diagonal() {
        let mut position = position_with_kings(Side::White, "h1", "h8");
        add(&mut position, Side::White, PieceKind::Bishop, "c1");
        add(&mut position, Side::White, PieceKind::Pawn, "e3");
        add(&mut position, Side::Black, PieceKind::Rook, "a3");

        assert!(is_legal(&position, "c1", "d2"));
        assert!(!is_legal(&position, "c1", "f4"), "Blocked by e3");
        assert!(is_legal(&position, "c1", "a3"));
        assert!(!is_legal(&position, "c1", "c4"), "Bishops do not move straight");
    }

    #[test]
    fn test_rook_moves_along_lines() {
        let mut position = position_with_kings(Side::White, "h1", "h8");
        add(&mut position, Side::White, PieceKind::Rook, "d4");
        add(&mut position, Side::Black, PieceKind::Pawn, "d7");

        assert!(is_legal(&position, "d4", "d7"));
        assert!(!is_legal(&position, "d4", "d8"), "Blocked by d7");
        assert!(is_legal(&position, "d4", "a4"));
        assert!(!is_legal(&position, "d4", "e5"));
        assert!(!is_legal(&position, "d4", "d4"), "Null move");
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let mut position = position_with_kings(Side::White, "h1", "h8");
        add(&mut position, Side::White, PieceKind::Queen, "d4");

        assert!(is_legal(&position, "d4", "d8"));
        assert!(is_legal(&position, "d4", "g7"));
        assert!(is_legal(&position, "d4", "a1"));
        assert!(!is_legal(&position, "d4", "e6"));
    }

    #[test]
    fn test_king_single_steps() {
        let position = position_with_kings(Side::White, "d4", "h8");

        assert!(is_legal(&position, "d4", "e5"));
        assert!(is_legal(&position, "d4", "d3"));
        assert!(!is_legal(&position, "d4", "d6"));
        assert!(!is_legal(&position, "d4", "f4"), "No castling away from home");
    }

    #[test]
    fn test_kings_are_never_captured() {
        // Black to move with White's king en prise: only reachable by hand set-up
        let mut position = position_with_kings(Side::Black, "e1", "a8");
        add(&mut position, Side::Black, PieceKind::Rook, "e5");

        assert!(!is_legal(&position, "e5", "e1"));
    }
}

mod king_safety {
    use super::*;

    #[test]
    fn test_pinned_piece_cannot_move() {
        let mut position = position_with_kings(Side::White, "e1", "a8");
        add(&mut position, Side::White, PieceKind::Knight, "e2");
        add(&mut position, Side::Black, PieceKind::Rook, "e8");

        assert!(
            position.legal_moves().iter().all(|(from, _)| *from != sq("e2")),
            "Pinned knight has no legal moves"
        );
    }

    #[test]
    fn test_pinned_rook_may_slide_along_the_pin() {
        let mut position = position_with_kings(Side::White, "e1", "a8");
        add(&mut position, Side::White, PieceKind::Rook, "e2");
        add(&mut position, Side::Black, PieceKind::Rook, "e8");

        assert!(is_legal(&position, "e2", "e5"));
        assert!(is_legal(&position, "e2", "e8"));
        assert!(!is_legal(&position, "e2", "d2"));
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut position = position_with_kings(Side::White, "e1", "a8");
        add(&mut position, Side::Black, PieceKind::Rook, "d8");
        add(&mut position, Side::Black, PieceKind::Pawn, "f3");

        assert!(!is_legal(&position, "e1", "d1"), "Rook covers the d-file");
        assert!(!is_legal(&position, "e1", "e2"), "Pawn covers e2");
        assert!(is_legal(&position, "e1", "f1"));
        assert!(is_legal(&position, "e1", "f2"));
    }

    #[test]
    fn test_check_must_be_answered() {
        let mut position = position_with_kings(Side::White, "e1", "a8");
        add(&mut position, Side::Black, PieceKind::Rook, "e8");
        add(&mut position, Side::White, PieceKind::Bishop, "c4");
        add(&mut position, Side::White, PieceKind::Knight, "b1");

        assert!(position.is_in_check(Side::White));
        assert!(is_legal(&position, "c4", "e6"), "Block");
        assert!(is_legal(&position, "e1", "d1"), "Step aside");
        assert!(!is_legal(&position, "b1", "c3"), "Ignores the check");
    }

    #[test]
    fn test_king_cannot_hide_behind_itself() {
        // Stepping back along the rook's line stays in check
        let mut position = position_with_kings(Side::White, "e2", "a8");
        add(&mut position, Side::Black, PieceKind::Rook, "e8");

        assert!(!is_legal(&position, "e2", "e1"));
        assert!(is_legal(&position, "e2", "d1"));
    }
}

mod state_changes {
    use super::*;

    #[test]
    fn test_successful_move_flips_turn() {
        let mut position = Position::new();

        assert!(position.apply_move(sq("g1"), sq("f3")));
        assert_eq!(position.turn(), Side::Black);
        assert!(position.piece_at(sq("g1")).is_empty());
        assert!(position.piece_at(sq("f3")).is(Side::White, PieceKind::Knight));

        assert!(position.apply_move(sq("g8"), sq("f6")));
        assert_eq!(position.turn(), Side::White);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut position = Position::new();
        let before = position;

        assert!(!position.apply_move(sq("e2"), sq("e5")));
        assert!(!position.apply_move(sq("e7"), sq("e5")), "Wrong side");
        assert!(!position.apply_move(sq("e4"), sq("e5")), "Empty square");
        assert_eq!(position, before);
    }

    #[test]
    fn test_captures_replace_the_target() {
        let mut position = Position::new();
        play(
            &mut position,
            &[("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("d8", "d5")],
        );

        assert!(position.piece_at(sq("d5")).is(Side::Black, PieceKind::Queen));
        assert_eq!(position.board().pieces().count(), 30);
    }

    #[test]
    fn test_rook_and_king_moves_update_rights() {
        let mut position = castling_position(Side::White);

        play(&mut position, &[("h1", "h2"), ("a8", "a7")]);

        let rights = position.castle_rights();
        assert!(rights.kingside_rook_moved[Side::White as usize]);
        assert!(!rights.queenside_rook_moved[Side::White as usize]);
        assert!(rights.queenside_rook_moved[Side::Black as usize]);
        assert!(!rights.king_moved[Side::Black as usize]);

        play(&mut position, &[("e1", "d1"), ("e8", "f8")]);

        let rights = position.castle_rights();
        assert!(rights.king_moved[Side::White as usize]);
        assert!(rights.king_moved[Side::Black as usize]);
    }

    #[test]
    fn test_rook_captured_at_home_loses_its_right() {
        let mut position = castling_position(Side::White);
        play(&mut position, &[("a1", "a8")]);

        let rights = position.castle_rights();
        assert!(rights.queenside_rook_moved[Side::Black as usize]);
        assert!(rights.queenside_rook_moved[Side::White as usize]);
    }
}

mod out_of_range {
    use super::*;

    #[test]
    fn test_off_board_queries_are_empty() {
        let position = Position::new();

        assert_eq!(position.piece_at(Square::new(-1, 0)), Piece::EMPTY);
        assert_eq!(position.piece_at(Square::new(0, 8)), Piece::EMPTY);
        assert!(!position.is_square_attacked(Square::new(8, 8), Side::White));
    }

    #[test]
    fn test_off_board_moves_are_illegal() {
        let mut position = Position::new();

        assert!(!position.is_legal(Square::new(4, 6), Square::new(4, -1)));
        assert!(!position.is_legal(Square::NONE, Square::new(4, 4)));
        assert!(!position.apply_move(Square::new(0, 7), Square::new(0, 12)));
        assert_eq!(position, Position::new());
    }
}
