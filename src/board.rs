use crate::{
    constants::{BACK_RANK, BACK_RANK_LAYOUT, NUM_FILES, NUM_RANKS, PAWN_RANK},
    types::{Board, Piece, PieceKind, Side, Square},
};

impl Board {
    /// Standard starting layout
    pub fn new() -> Self {
        let mut board = Board::empty();

        for side in Side::iter() {
            for file in 0..NUM_FILES as i8 {
                let kind = PieceKind::try_from(BACK_RANK_LAYOUT[file as usize])
                    .unwrap_or(PieceKind::Empty);

                board.add_piece(side, kind, Square::new(file, BACK_RANK[side as usize]));
                board.add_piece(
                    side,
                    PieceKind::Pawn,
                    Square::new(file, PAWN_RANK[side as usize]),
                );
            }
        }

        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[Piece::EMPTY; NUM_RANKS]; NUM_FILES],
        }
    }

    /// Off-board squares read as empty.
    pub fn piece_at(&self, square: Square) -> Piece {
        match square.is_on_board() {
            true => self.squares[square.file as usize][square.rank as usize],
            false => Piece::EMPTY,
        }
    }

    /// Places a piece, replacing whatever was there. Off-board squares are ignored.
    pub fn add_piece(&mut self, side: Side, kind: PieceKind, square: Square) {
        self.set(square, Piece::new(side, kind));
    }

    /// Clears a square and returns what stood on it
    pub fn remove_piece(&mut self, square: Square) -> Piece {
        let piece = self.piece_at(square);
        self.set(square, Piece::EMPTY);
        piece
    }

    /// Moves whatever is on `from` to `to`, returning the piece that was captured
    pub fn update_piece(&mut self, from: Square, to: Square) -> Piece {
        let moving = self.remove_piece(from);
        let captured = self.piece_at(to);
        self.set(to, moving);
        captured
    }

    fn set(&mut self, square: Square, piece: Piece) {
        if square.is_on_board() {
            self.squares[square.file as usize][square.rank as usize] = piece;
        }
    }

    /// Occupied squares with their pieces, file-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter()
            .map(|square| (square, self.piece_at(square)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(side, PieceKind::King))
            .map(|(square, _)| square)
    }

    /// True if every square strictly between `from` and `to` is empty. Only
    /// meaningful for squares sharing a file, rank or diagonal.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let (file_delta, rank_delta) = from.delta_to(to);
        let step = (file_delta.signum(), rank_delta.signum());

        let mut square = from.offset(step.0, step.1);
        while square != to {
            if !square.is_on_board() || !self.piece_at(square).is_empty() {
                return false;
            }
            square = square.offset(step.0, step.1);
        }

        true
    }

    /// Reflected top-to-bottom with every piece changing side
    pub fn mirrored(&self) -> Self {
        let mut board = Board::empty();

        for (square, piece) in self.pieces() {
            board.set(square.mirrored(), piece.recolored());
        }

        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
