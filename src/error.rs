//! Errors raised by the layers around the rules engine.
//!
//! The rules engine and the search report illegal moves with `false` and the
//! `Move::NONE` sentinel. Game sessions, square parsing, configuration and the
//! analysis API turn those into `ChessError`.

use thiserror::Error;

use crate::types::{GameResult, Side, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("game is already over: {0:?}")]
    GameOver(GameResult),

    #[error("invalid square: {0:?} (expected a1-h8)")]
    InvalidSquare(String),

    #[error("invalid side: {0:?} (expected white or black)")]
    InvalidSide(String),

    #[error("{0:?} has no legal moves")]
    NoLegalMoves(Side),

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Side),
}

pub type ChessResult<T> = Result<T, ChessError>;
