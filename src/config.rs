use std::str::FromStr;

use crate::{constants::DEFAULT_DEPTH, error::ChessError, types::Side};

/// How the computer player searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Plies searched per move. Zero is treated as one.
    pub depth: u16,
    /// Tie-break seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Side the engine plays.
    pub computer_side: Side,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
            computer_side: Side::Black,
        }
    }
}

impl SearchSettings {
    /// Defaults overridden by `CHESS_ENGINE_DEPTH`, `CHESS_ENGINE_SEED` and
    /// `CHESS_ENGINE_SIDE`. Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            depth: lookup("CHESS_ENGINE_DEPTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.depth),
            seed: lookup("CHESS_ENGINE_SEED")
                .and_then(|v| v.parse().ok())
                .or(defaults.seed),
            computer_side: lookup("CHESS_ENGINE_SIDE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.computer_side),
        }
    }
}

impl FromStr for Side {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Side::White),
            "b" | "black" => Ok(Side::Black),
            _ => Err(ChessError::InvalidSide(s.to_string())),
        }
    }
}
