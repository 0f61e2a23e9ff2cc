use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DEPTH;
use crate::engine::Engine;
use crate::error::ChessError;
use crate::position::Position;
use crate::types::{GameResult, Move};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub position: Position,
    pub depth: Option<u16>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub best_move: Move,          // Score is from the perspective of the side that moved
    pub evaluation: i32,          // Static evaluation of `position_after`, same perspective
    pub depth: u16,               // Plies searched
    pub nodes: usize,             // Positions visited
    pub position_after: Position, // Position once the best move is played
    pub result_after: GameResult, // Outcome for the side to move afterwards
}

/// Main entry point for API consumers
/// Searches the position for the side to move and returns its best move
pub fn analyze_position(request: AnalyzeRequest) -> Result<AnalyzeResponse, ChessError> {
    let side = request.position.turn();
    let depth = request.depth.unwrap_or(DEFAULT_DEPTH).max(1);

    let mut engine = match request.seed {
        Some(seed) => Engine::with_seed(side, seed),
        None => Engine::new(side),
    };

    let best_move = engine.best_move(&request.position, depth);
    if best_move.is_none() {
        return Err(ChessError::NoLegalMoves(side));
    }

    let mut position_after = request.position;
    if !position_after.apply_move(best_move.start, best_move.end) {
        return Err(ChessError::IllegalMove {
            from: best_move.start,
            to: best_move.end,
        });
    }

    Ok(AnalyzeResponse {
        best_move,
        evaluation: engine.evaluate(&position_after),
        depth,
        nodes: engine.nodes(),
        position_after,
        result_after: position_after.game_result(),
    })
}

/// Simpler interface with just a position and depth
pub fn get_best_move(position: Position, depth: u16) -> Result<AnalyzeResponse, ChessError> {
    analyze_position(AnalyzeRequest {
        position,
        depth: Some(depth),
        seed: None,
    })
}
