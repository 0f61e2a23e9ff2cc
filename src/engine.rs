use std::cmp::Ordering;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    config::SearchSettings,
    position::Position,
    types::{Move, Side},
    utils::time_seed,
};

/// Fixed-depth minimax player with alpha-beta pruning.
///
/// Scores are always from the engine's own side: higher is better for `side`
/// whichever player is to move inside the tree.
pub struct Engine {
    side: Side,
    rng: StdRng, // Tie-breaks between equally scored root moves
    nodes: usize,
}

impl Engine {
    /// Seeds the tie-break generator from the clock.
    pub fn new(side: Side) -> Self {
        Engine::with_seed(side, time_seed())
    }

    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    pub fn from_settings(settings: &SearchSettings) -> Self {
        match settings.seed {
            Some(seed) => Engine::with_seed(settings.computer_side, seed),
            None => Engine::new(settings.computer_side),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    /// Positions visited by the last `best_move`
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Best move for the engine's side, searching `depth` plies (at least one).
    ///
    /// Every root move is searched with a full window so that equally scored
    /// moves stay distinguishable; one of the best is picked at random. Returns
    /// `Move::NONE` when the engine's side is not to move or has no legal move.
    pub fn best_move(&mut self, position: &Position, depth: u16) -> Move {
        self.nodes = 0;

        if position.turn() != self.side {
            debug!(side = ?self.side, turn = ?position.turn(), "not the engine's turn");
            return Move::NONE;
        }

        let depth = depth.max(1);
        let mut best_score = i32::MIN;
        let mut best_moves: Vec<Move> = Vec::new();
        let mut root_moves = 0;

        for (start, end) in position.legal_move_iter(self.side) {
            root_moves += 1;

            let mut next_position = *position;
            next_position.apply_move(start, end);

            let score = self.minimax(&next_position, depth - 1, i32::MIN, i32::MAX, false);

            match score.cmp(&best_score) {
                Ordering::Greater => {
                    best_score = score;
                    best_moves.clear();
                    best_moves.push(Move::new(start, end, score));
                }
                Ordering::Equal => best_moves.push(Move::new(start, end, score)),
                Ordering::Less => {}
            }
        }

        if best_moves.is_empty() {
            debug!(side = ?self.side, "no legal moves");
            return Move::NONE;
        }

        let chosen = best_moves[self.rng.gen_range(0..best_moves.len())];

        debug!(
            side = ?self.side,
            depth,
            root_moves,
            tied = best_moves.len(),
            nodes = self.nodes,
            score = chosen.score,
            "chose {} -> {}",
            chosen.start,
            chosen.end
        );

        chosen
    }

    /// `maximizing` follows the tree (whose ply it is relative to the engine);
    /// the evaluation is always anchored to the engine's side. A node with no
    /// legal moves is scored like a leaf.
    fn minimax(
        &mut self,
        position: &Position,
        depth: u16,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluate(position);
        }

        let mut best = match maximizing {
            true => i32::MIN,
            false => i32::MAX,
        };
        let mut searched = false;

        for (start, end) in position.legal_move_iter(position.turn()) {
            searched = true;

            let mut next_position = *position;
            next_position.apply_move(start, end);

            let score = self.minimax(&next_position, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        match searched {
            true => best,
            false => self.evaluate(position),
        }
    }

    /// Material plus piece-square bonus, added for the engine's pieces and
    /// subtracted for the opponent's.
    pub fn evaluate(&self, position: &Position) -> i32 {
        position
            .board()
            .pieces()
            .map(|(square, piece)| match piece.belongs_to(self.side) {
                true => piece.worth(square),
                false => -piece.worth(square),
            })
            .sum()
    }
}
