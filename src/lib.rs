#[cfg(feature = "api")]
pub mod api;
pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game;
pub mod piece;
pub mod position;
pub mod square;
pub mod types;
pub mod utils;
