use crate::{
    constants::{NUM_FILES, NUM_RANKS, SQUARE_SCORE},
    types::{Piece, PieceKind, Side, Square},
};

impl PieceKind {
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
            PieceKind::Empty => 0,
        }
    }

    pub fn iter() -> impl Iterator<Item = PieceKind> {
        [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
        .into_iter()
    }

    /// Upper-case letter used on text boards
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
            PieceKind::Empty => '.',
        }
    }
}

impl TryFrom<u8> for PieceKind {
    type Error = &'static str;

    /// Converts from a number representing the piece kind
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PieceKind::Pawn),
            1 => Ok(PieceKind::Knight),
            2 => Ok(PieceKind::Bishop),
            3 => Ok(PieceKind::Rook),
            4 => Ok(PieceKind::Queen),
            5 => Ok(PieceKind::King),
            6 => Ok(PieceKind::Empty),
            _ => Err("Piece index out of range (must be 0-6)"),
        }
    }
}

impl Piece {
    /// Bonus for standing on `square`. Tables are written for white, so black
    /// pieces look them up with the rank mirrored.
    pub fn square_score(self, square: Square) -> i32 {
        let Some(side) = self.side() else {
            return 0;
        };

        if !square.is_on_board() {
            return 0;
        }

        let row = match side {
            Side::White => square.rank as usize,
            Side::Black => NUM_RANKS - 1 - square.rank as usize,
        };
        let column = square.file as usize;
        debug_assert!(column < NUM_FILES);

        SQUARE_SCORE[self.kind() as usize][row][column]
    }

    /// Material plus square bonus
    pub fn worth(self, square: Square) -> i32 {
        self.kind().value() + self.square_score(square)
    }

    /// White pieces upper-case, black lower-case, empty cells '.'
    pub fn symbol(self) -> char {
        match self.side() {
            Some(Side::White) => self.kind().letter(),
            Some(Side::Black) => self.kind().letter().to_ascii_lowercase(),
            None => '.',
        }
    }

    /// Same kind, other side
    pub fn recolored(self) -> Piece {
        match self.side() {
            Some(side) => Piece::new(side.opponent(), self.kind()),
            None => Piece::EMPTY,
        }
    }
}
