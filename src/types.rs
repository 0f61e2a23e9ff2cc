#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};

use crate::constants::{NUM_FILES, NUM_RANKS};

/// A board coordinate. `file` runs 0-7 from the a-file to the h-file and `rank`
/// runs 0-7 from Black's back rank down to White's back rank.
///
/// Coordinates are signed so that off-board squares (and the "no move"
/// sentinel) can be represented and rejected instead of failing.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White = 0,
    Black = 1,
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Empty,
}

/// Contents of a single board cell. An empty cell has kind `Empty` and no side;
/// the constructors keep those two facts in step.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Option<Side>,
}

/// Mailbox grid indexed `[file][rank]`. Plain `Copy` data so a position can be
/// cloned once per search node without touching the heap.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Piece; NUM_RANKS]; NUM_FILES],
}

/// Which castling pieces have left their home squares. Indexed by `Side`.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub king_moved: [bool; 2],
    pub kingside_rook_moved: [bool; 2],
    pub queenside_rook_moved: [bool; 2],
}

/// A start/end pair plus the score the search assigned to it.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub score: i32, // Always relative to the engine's side
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Checkmate(Side), // Winner
    Stalemate,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank direction pawns of this side advance in.
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    pub fn iter() -> impl Iterator<Item = Side> {
        [Side::White, Side::Black].into_iter()
    }
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::Empty,
        side: None,
    };

    pub const fn new(side: Side, kind: PieceKind) -> Self {
        match kind {
            PieceKind::Empty => Piece::EMPTY,
            _ => Piece {
                kind,
                side: Some(side),
            },
        }
    }

    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    pub const fn side(self) -> Option<Side> {
        self.side
    }

    pub const fn is_empty(self) -> bool {
        self.side.is_none()
    }

    pub fn belongs_to(self, side: Side) -> bool {
        self.side == Some(side)
    }

    pub fn is(self, side: Side, kind: PieceKind) -> bool {
        self.side == Some(side) && self.kind == kind
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::EMPTY
    }
}

impl CastleRights {
    pub fn rook_moved(&self, side: Side, kingside: bool) -> bool {
        match kingside {
            true => self.kingside_rook_moved[side as usize],
            false => self.queenside_rook_moved[side as usize],
        }
    }

    /// Same rights with the two sides exchanged.
    pub fn swapped(self) -> Self {
        Self {
            king_moved: [self.king_moved[1], self.king_moved[0]],
            kingside_rook_moved: [self.kingside_rook_moved[1], self.kingside_rook_moved[0]],
            queenside_rook_moved: [self.queenside_rook_moved[1], self.queenside_rook_moved[0]],
        }
    }

    /// Every king and rook counts as moved; no castling is possible.
    pub fn none() -> Self {
        Self {
            king_moved: [true; 2],
            kingside_rook_moved: [true; 2],
            queenside_rook_moved: [true; 2],
        }
    }
}

impl Move {
    /// Returned by the search when the side has no legal move. Never apply it.
    pub const NONE: Move = Move {
        start: Square::NONE,
        end: Square::NONE,
        score: 0,
    };

    pub const fn new(start: Square, end: Square, score: i32) -> Self {
        Self { start, end, score }
    }

    pub fn is_none(&self) -> bool {
        !self.start.is_on_board()
    }
}
