use tracing::{debug, info};

use crate::{
    config::SearchSettings,
    engine::Engine,
    error::{ChessError, ChessResult},
    position::Position,
    types::{GameResult, Move, Side, Square},
};

/// A human-versus-computer game: the position, the computer player and the
/// click-to-select state a front end needs.
pub struct Game {
    position: Position,
    engine: Engine,
    depth: u16,
    selected: Option<Square>,
    status: GameResult,
}

impl Game {
    pub fn new(settings: &SearchSettings) -> Self {
        Self {
            position: Position::new(),
            engine: Engine::from_settings(settings),
            depth: settings.depth,
            selected: None,
            status: GameResult::InProgress,
        }
    }

    /// Continues from an arbitrary position, e.g. a saved set-up.
    pub fn from_position(settings: &SearchSettings, position: Position) -> Self {
        let mut game = Game::new(settings);
        game.position = position;
        game.update_status();
        game
    }

    /// Back to the starting position, keeping sides and depth.
    pub fn reset(&mut self) {
        self.position.reset();
        self.selected = None;
        self.status = GameResult::InProgress;
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> GameResult {
        self.status
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u16) {
        self.depth = depth;
    }

    pub fn computer_side(&self) -> Side {
        self.engine.side()
    }

    pub fn human_side(&self) -> Side {
        self.engine.side().opponent()
    }

    /// Hands the computer the other colour.
    pub fn switch_sides(&mut self) {
        self.engine.set_side(self.engine.side().opponent());
        self.selected = None;
    }

    /// Positions the engine visited on its last move
    pub fn last_search_nodes(&self) -> usize {
        self.engine.nodes()
    }

    /// Selects `square` if it holds a piece of the side to move.
    pub fn select(&mut self, square: Square) -> bool {
        if self.status != GameResult::InProgress {
            return false;
        }

        let selectable = self.position.piece_at(square).belongs_to(self.position.turn());
        if selectable {
            self.selected = Some(square);
        }

        selectable
    }

    /// Pointer-style input: the first click selects, the second tries to move
    /// the selected piece there. The selection is dropped either way.
    pub fn click(&mut self, square: Square) -> ChessResult<GameResult> {
        if self.status != GameResult::InProgress {
            return Err(ChessError::GameOver(self.status));
        }

        match self.selected.take() {
            Some(from) => self.play(from, square),
            None => {
                self.select(square);
                Ok(self.status)
            }
        }
    }

    /// Plays a human move, then lets the computer answer if it is its turn
    /// and the game is still going.
    pub fn play(&mut self, from: Square, to: Square) -> ChessResult<GameResult> {
        if self.status != GameResult::InProgress {
            return Err(ChessError::GameOver(self.status));
        }

        if self.position.turn() != self.human_side() {
            return Err(ChessError::NotYourTurn(self.human_side()));
        }

        self.selected = None;

        if !self.position.apply_move(from, to) {
            return Err(ChessError::IllegalMove { from, to });
        }

        info!(side = ?self.human_side(), "played {from} -> {to}");

        if self.update_status() == GameResult::InProgress {
            self.engine_move()?;
        }

        Ok(self.status)
    }

    /// Lets the computer play the side to move.
    pub fn engine_move(&mut self) -> ChessResult<Move> {
        if self.status != GameResult::InProgress {
            return Err(ChessError::GameOver(self.status));
        }

        let turn = self.position.turn();
        if turn != self.computer_side() {
            return Err(ChessError::NotYourTurn(self.computer_side()));
        }

        let chosen = self.engine.best_move(&self.position, self.depth);
        if chosen.is_none() || !self.position.apply_move(chosen.start, chosen.end) {
            self.update_status();
            return Err(ChessError::NoLegalMoves(turn));
        }

        info!(
            side = ?turn,
            score = chosen.score,
            nodes = self.engine.nodes(),
            "computer played {} -> {}",
            chosen.start,
            chosen.end
        );

        self.update_status();
        Ok(chosen)
    }

    fn update_status(&mut self) -> GameResult {
        self.status = self.position.game_result();

        if self.status != GameResult::InProgress {
            debug!(result = ?self.status, "game over");
        }

        self.status
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(&SearchSettings::default())
    }
}
