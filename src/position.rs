use tracing::trace;

use crate::{
    constants::{BACK_RANK, KING_FILE, KINGSIDE_ROOK_FILE, PAWN_RANK, QUEENSIDE_ROOK_FILE},
    types::{Board, CastleRights, GameResult, Piece, PieceKind, Side, Square},
};

/// Full game state: piece grid, side to move and castling rights.
///
/// `Position` is `Copy`; the legality check and the search both work by copying
/// a position, mutating the copy and throwing it away.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "api", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    board: Board,
    turn: Side,
    rights: CastleRights,
}

impl Position {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::White,
            rights: CastleRights::default(),
        }
    }

    /// No validation happens here; hand-built positions need one king per side.
    pub fn from_parts(board: Board, turn: Side, rights: CastleRights) -> Self {
        Self {
            board,
            turn,
            rights,
        }
    }

    /// Empty board with castling unavailable. Set up with `board_mut`.
    pub fn empty(turn: Side) -> Self {
        Self::from_parts(Board::empty(), turn, CastleRights::none())
    }

    pub fn reset(&mut self) {
        *self = Position::new();
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Set-up access for hand-built positions. Play goes through `apply_move`.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.rights
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        self.board.piece_at(square)
    }

    /// Is `start -> end` legal for the side to move?
    pub fn is_legal(&self, start: Square, end: Square) -> bool {
        self.is_legal_for(self.turn, start, end)
    }

    /// Legality with the acting side given explicitly, so check and mate
    /// queries for the side not on move never have to touch `turn`.
    pub fn is_legal_for(&self, side: Side, start: Square, end: Square) -> bool {
        if !start.is_on_board() || !end.is_on_board() {
            return false;
        }

        let moving = self.piece_at(start);
        let target = self.piece_at(end);

        if !moving.belongs_to(side) || target.belongs_to(side) {
            return false;
        }

        // Kings are never captured
        if target.kind() == PieceKind::King {
            return false;
        }

        if !self.is_geometrically_valid(side, moving.kind(), start, end) {
            return false;
        }

        // Castling already checked every square the king touches
        if Self::is_castle(moving, start, end) {
            return true;
        }

        let mut scratch = self.board;
        scratch.update_piece(start, end);

        !Self::board_in_check(&scratch, side)
    }

    /// Plays a legal move for the side to move and hands the turn over.
    /// Illegal moves leave the position untouched.
    pub fn apply_move(&mut self, start: Square, end: Square) -> bool {
        if !self.is_legal(start, end) {
            trace!(%start, %end, side = ?self.turn, "rejected move");
            return false;
        }

        let moving = self.piece_at(start);
        let side = self.turn;

        if Self::is_castle(moving, start, end) {
            let (rook_from, rook_to) = match end.file > start.file {
                true => (KINGSIDE_ROOK_FILE, end.file - 1),
                false => (QUEENSIDE_ROOK_FILE, end.file + 1),
            };
            self.board.update_piece(
                Square::new(rook_from, start.rank),
                Square::new(rook_to, start.rank),
            );
        }

        if moving.kind() == PieceKind::King {
            self.rights.king_moved[side as usize] = true;
        }

        if moving.kind() == PieceKind::Rook && start.rank == BACK_RANK[side as usize] {
            match start.file {
                KINGSIDE_ROOK_FILE => self.rights.kingside_rook_moved[side as usize] = true,
                QUEENSIDE_ROOK_FILE => self.rights.queenside_rook_moved[side as usize] = true,
                _ => {}
            }
        }

        // A rook taken on its corner can never castle
        let enemy = side.opponent();
        if self.piece_at(end).is(enemy, PieceKind::Rook) && end.rank == BACK_RANK[enemy as usize] {
            match end.file {
                KINGSIDE_ROOK_FILE => self.rights.kingside_rook_moved[enemy as usize] = true,
                QUEENSIDE_ROOK_FILE => self.rights.queenside_rook_moved[enemy as usize] = true,
                _ => {}
            }
        }

        self.board.update_piece(start, end);
        self.turn = self.turn.opponent();

        true
    }

    /// Does any piece of `by` reach `square`? Pawns count only their capture
    /// diagonals. No king-safety replay happens here, which is what lets the
    /// legality check call this without recursing.
    pub fn is_square_attacked(&self, square: Square, by: Side) -> bool {
        Self::board_attacks(&self.board, square, by)
    }

    pub fn is_in_check(&self, side: Side) -> bool {
        Self::board_in_check(&self.board, side)
    }

    pub fn has_any_legal_move(&self, side: Side) -> bool {
        self.legal_move_iter(side).next().is_some()
    }

    pub fn is_checkmate(&self, side: Side) -> bool {
        self.is_in_check(side) && !self.has_any_legal_move(side)
    }

    pub fn is_stalemate(&self, side: Side) -> bool {
        !self.is_in_check(side) && !self.has_any_legal_move(side)
    }

    /// Legal (start, end) pairs for `side`, produced lazily in start file,
    /// start rank, end file, end rank order.
    pub fn legal_move_iter(&self, side: Side) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.board
            .pieces()
            .filter(move |(_, piece)| piece.belongs_to(side))
            .flat_map(move |(start, _)| {
                Square::iter()
                    .filter(move |&end| self.is_legal_for(side, start, end))
                    .map(move |end| (start, end))
            })
    }

    pub fn legal_moves_for(&self, side: Side) -> Vec<(Square, Square)> {
        self.legal_move_iter(side).collect()
    }

    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        self.legal_moves_for(self.turn)
    }

    /// Outcome from the point of view of the side to move
    pub fn game_result(&self) -> GameResult {
        if self.has_any_legal_move(self.turn) {
            return GameResult::InProgress;
        }

        match self.is_in_check(self.turn) {
            true => GameResult::Checkmate(self.turn.opponent()),
            false => GameResult::Stalemate,
        }
    }

    /// Board flipped top-to-bottom with colours, turn and rights exchanged.
    pub fn mirrored(&self) -> Self {
        Self {
            board: self.board.mirrored(),
            turn: self.turn.opponent(),
            rights: self.rights.swapped(),
        }
    }

    fn is_castle(moving: Piece, start: Square, end: Square) -> bool {
        moving.kind() == PieceKind::King
            && start.rank == end.rank
            && start.file.abs_diff(end.file) == 2
    }

    fn board_in_check(board: &Board, side: Side) -> bool {
        match board.find_king(side) {
            Some(king) => Self::board_attacks(board, king, side.opponent()),
            None => false,
        }
    }

    fn board_attacks(board: &Board, square: Square, by: Side) -> bool {
        if !square.is_on_board() {
            return false;
        }

        board
            .pieces()
            .filter(|(_, piece)| piece.belongs_to(by))
            .any(|(from, piece)| {
                if from == square {
                    return false;
                }

                let (file_delta, rank_delta) = from.delta_to(square);

                match piece.kind() {
                    PieceKind::Pawn => file_delta.abs() == 1 && rank_delta == by.forward(),
                    PieceKind::King => file_delta.abs() <= 1 && rank_delta.abs() <= 1,
                    kind => Self::reaches(board, kind, from, square),
                }
            })
    }

    /// Reach for knights and sliders, shared by attacks and move validation
    fn reaches(board: &Board, kind: PieceKind, from: Square, to: Square) -> bool {
        let (file_delta, rank_delta) = from.delta_to(to);
        let (file_distance, rank_distance) = (file_delta.abs(), rank_delta.abs());

        let diagonal = file_distance == rank_distance && file_distance != 0;
        let straight = (file_distance == 0) != (rank_distance == 0);

        match kind {
            PieceKind::Knight => {
                (file_distance == 1 && rank_distance == 2)
                    || (file_distance == 2 && rank_distance == 1)
            }
            PieceKind::Bishop => diagonal && board.is_path_clear(from, to),
            PieceKind::Rook => straight && board.is_path_clear(from, to),
            PieceKind::Queen => (diagonal || straight) && board.is_path_clear(from, to),
            _ => false,
        }
    }

    fn is_geometrically_valid(
        &self,
        side: Side,
        kind: PieceKind,
        start: Square,
        end: Square,
    ) -> bool {
        match kind {
            PieceKind::Pawn => self.is_valid_pawn_move(side, start, end),
            PieceKind::King => self.is_valid_king_move(side, start, end),
            PieceKind::Empty => false,
            _ => Self::reaches(&self.board, kind, start, end),
        }
    }

    fn is_valid_pawn_move(&self, side: Side, start: Square, end: Square) -> bool {
        let forward = side.forward();
        let (file_delta, rank_delta) = start.delta_to(end);
        let target = self.piece_at(end);

        match (file_delta.abs(), rank_delta) {
            (0, delta) if delta == forward => target.is_empty(),
            (0, delta) if delta == 2 * forward => {
                start.rank == PAWN_RANK[side as usize]
                    && target.is_empty()
                    && self.piece_at(start.offset(0, forward)).is_empty()
            }
            (1, delta) if delta == forward => target.belongs_to(side.opponent()),
            _ => false,
        }
    }

    fn is_valid_king_move(&self, side: Side, start: Square, end: Square) -> bool {
        let (file_delta, rank_delta) = start.delta_to(end);

        if file_delta.abs() <= 1 && rank_delta.abs() <= 1 {
            return true;
        }

        rank_delta == 0 && file_delta.abs() == 2 && self.can_castle(side, start, file_delta > 0)
    }

    /// King and rook unmoved and in place, nothing between them, king not in
    /// check, and neither the square it crosses nor the one it lands on attacked.
    fn can_castle(&self, side: Side, king: Square, kingside: bool) -> bool {
        let home = Square::new(KING_FILE, BACK_RANK[side as usize]);
        let rook = Square::new(
            match kingside {
                true => KINGSIDE_ROOK_FILE,
                false => QUEENSIDE_ROOK_FILE,
            },
            home.rank,
        );
        let step = if kingside { 1 } else { -1 };
        let enemy = side.opponent();

        king == home
            && !self.rights.king_moved[side as usize]
            && !self.rights.rook_moved(side, kingside)
            && self.piece_at(rook).is(side, PieceKind::Rook)
            && self.board.is_path_clear(king, rook)
            && !self.is_in_check(side)
            && !self.is_square_attacked(king.offset(step, 0), enemy)
            && !self.is_square_attacked(king.offset(2 * step, 0), enemy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
