/// NOTE: 1 ply = one move by a single player

pub const NUM_PIECE_TYPES: usize = 6;
pub const NUM_SIDES: usize = 2;
pub const NUM_RANKS: usize = 8;
pub const NUM_FILES: usize = 8;

/// Search depth (in ply) the computer plays at unless configured otherwise.
pub const DEFAULT_DEPTH: u16 = 3;

// Home ranks, indexed by side
pub const BACK_RANK: [i8; NUM_SIDES] = [7, 0];
pub const PAWN_RANK: [i8; NUM_SIDES] = [6, 1];

pub const KING_FILE: i8 = 4;
pub const QUEENSIDE_ROOK_FILE: i8 = 0;
pub const KINGSIDE_ROOK_FILE: i8 = 7;

/// Back rank layout by file, for both sides
pub const BACK_RANK_LAYOUT: [u8; NUM_FILES] = [3, 1, 2, 4, 5, 2, 1, 3];

// Piece-square tables, from white's viewpoint: row 0 is the far (black) side.
// Indexed [rank][file]; black pieces read the table with the rank mirrored.

#[rustfmt::skip]
pub const PAWN_SQUARE_SCORE: [[i32; NUM_FILES]; NUM_RANKS] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [ 5,  5, 10, 25, 25, 10,  5,  5],
    [ 0,  0,  0, 20, 20,  0,  0,  0],
    [ 5, -5,-10,  0,  0,-10, -5,  5],
    [ 5, 10, 10,-20,-20, 10, 10,  5],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
pub const KNIGHT_SQUARE_SCORE: [[i32; NUM_FILES]; NUM_RANKS] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
pub const BISHOP_SQUARE_SCORE: [[i32; NUM_FILES]; NUM_RANKS] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
pub const ROOK_SQUARE_SCORE: [[i32; NUM_FILES]; NUM_RANKS] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
pub const QUEEN_SQUARE_SCORE: [[i32; NUM_FILES]; NUM_RANKS] = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

#[rustfmt::skip]
pub const KING_SQUARE_SCORE: [[i32; NUM_FILES]; NUM_RANKS] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

/// Indexed by `PieceKind`
pub const SQUARE_SCORE: [[[i32; NUM_FILES]; NUM_RANKS]; NUM_PIECE_TYPES] = [
    PAWN_SQUARE_SCORE,
    KNIGHT_SQUARE_SCORE,
    BISHOP_SQUARE_SCORE,
    ROOK_SQUARE_SCORE,
    QUEEN_SQUARE_SCORE,
    KING_SQUARE_SCORE,
];
