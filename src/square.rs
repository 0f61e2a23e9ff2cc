use std::{fmt, str::FromStr};

use crate::{
    constants::{NUM_FILES, NUM_RANKS},
    error::ChessError,
    types::Square,
};

impl Square {
    /// Off-board marker used by `Move::NONE`.
    pub const NONE: Square = Square { file: -1, rank: -1 };

    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    pub const fn is_on_board(self) -> bool {
        self.file >= 0
            && self.file < NUM_FILES as i8
            && self.rank >= 0
            && self.rank < NUM_RANKS as i8
    }

    /// All 64 squares, file-major (a8, a7, ... a1, b8, ...).
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..NUM_FILES as i8)
            .flat_map(|file| (0..NUM_RANKS as i8).map(move |rank| Square::new(file, rank)))
    }

    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Square {
        Square::new(self.file + file_delta, self.rank + rank_delta)
    }

    /// Signed (file, rank) distance from `self` to `other`
    pub const fn delta_to(self, other: Square) -> (i8, i8) {
        (other.file - self.file, other.rank - self.rank)
    }

    /// Same file, rank reflected across the middle of the board.
    pub const fn mirrored(self) -> Square {
        Square::new(self.file, NUM_RANKS as i8 - 1 - self.rank)
    }
}

impl fmt::Display for Square {
    /// Algebraic name, e.g. rank 6 of file 4 is "e2".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "--");
        }

        write!(
            f,
            "{}{}",
            (b'a' + self.file as u8) as char,
            (b'8' - self.rank as u8) as char
        )
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();

        match bytes {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square::new((file - b'a') as i8, (b'8' - rank) as i8))
            }
            _ => Err(ChessError::InvalidSquare(s.to_string())),
        }
    }
}
