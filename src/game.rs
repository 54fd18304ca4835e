use tracing::{debug, trace};

use crate::board::{Board, bitmask_to_indices};
use crate::error::GameError;
use crate::types::{Cell, Color, GameResult, GameState, Outcome, Position, Status};

/// Receives a snapshot after every state change: initialize, reset and
/// each accepted move. Rejected moves are not reported.
pub trait Presenter {
    fn render(&mut self, state: &GameState);
}

/// Presenter for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _state: &GameState) {}
}

/// Answer to a move request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    /// Square indices flipped by the move; empty when rejected.
    pub flipped: Vec<u8>,
}

impl MoveOutcome {
    fn rejected() -> Self {
        Self {
            accepted: false,
            flipped: Vec::new(),
        }
    }
}

/// Board plus turn state for one game.
///
/// The turn machine has three implicit states: black to move, white to
/// move, and game over. After a move the opponent takes over if they can
/// reply; otherwise the mover plays again; when neither side can move the
/// game ends.
pub struct GameEngine {
    board: Board,
    current_player: Color,
    is_game_over: bool,
    is_pass: bool,
    flipped: Vec<u8>,
    presenter: Box<dyn Presenter>,
}

impl GameEngine {
    pub fn new(presenter: Box<dyn Presenter>) -> Self {
        let mut engine = Self {
            board: Board::new(),
            current_player: Color::Black,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            presenter,
        };
        engine.initialize();
        engine
    }

    pub fn new_headless() -> Self {
        Self::new(Box::new(NullPresenter))
    }

    /// Resumes play from an arbitrary position.
    ///
    /// If `current_player` cannot move but the opponent can, the turn goes
    /// to the opponent. If neither side can move the game is already over.
    pub fn with_position(
        board: Board,
        current_player: Color,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        let mut engine = Self {
            board,
            current_player,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            presenter,
        };
        if !engine.has_any_legal_move(current_player) {
            let opponent = current_player.opponent();
            if engine.has_any_legal_move(opponent) {
                debug!(passed = %current_player, "side to move has no legal move");
                engine.current_player = opponent;
                engine.is_pass = true;
            } else {
                engine.is_game_over = true;
            }
        }
        engine.notify();
        engine
    }

    /// Sets up the starting position with black to move.
    pub fn initialize(&mut self) {
        self.board = Board::new();
        self.current_player = Color::Black;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        self.notify();
    }

    pub fn reset(&mut self) {
        debug!("game reset");
        self.initialize();
    }

    /// Plays `pos` for the current player.
    ///
    /// Illegal or occupied squares, and any request after game over, are
    /// rejected without touching state.
    pub fn attempt_move(&mut self, pos: Position) -> MoveOutcome {
        if self.is_game_over {
            trace!(%pos, "move rejected: game is already over");
            return MoveOutcome::rejected();
        }

        let mover = self.current_player;
        if let Err(err) = self.apply_move(pos, mover) {
            trace!(%err, player = %mover, "move rejected");
            return MoveOutcome::rejected();
        }
        self.advance_turn(mover);

        MoveOutcome {
            accepted: true,
            flipped: self.flipped.clone(),
        }
    }

    /// Places a stone for `player` and flips the captured runs.
    /// Returns the flipped mask.
    ///
    /// Does not change whose turn it is and does not notify the presenter;
    /// follow up with [`GameEngine::advance_turn`].
    pub fn apply_move(&mut self, pos: Position, player: Color) -> Result<u64, GameError> {
        let flips = match self.board.place(pos, player) {
            0 => return Err(GameError::IllegalMove(pos)),
            flips => flips,
        };
        self.flipped = bitmask_to_indices(flips);
        debug!(%pos, %player, flipped = self.flipped.len(), "move applied");
        Ok(flips)
    }

    /// Decides who moves next after `mover` has played, then notifies the
    /// presenter.
    pub fn advance_turn(&mut self, mover: Color) {
        let opponent = mover.opponent();

        if self.has_any_legal_move(opponent) {
            self.current_player = opponent;
            self.is_pass = false;
        } else if self.has_any_legal_move(mover) {
            debug!(passed = %opponent, "no legal reply, mover keeps the turn");
            self.current_player = mover;
            self.is_pass = true;
        } else {
            self.current_player = mover;
            self.is_pass = false;
            self.is_game_over = true;
            let (black_count, white_count) = self.compute_score();
            debug!(black_count, white_count, board = %self.board, "game over");
        }
        self.notify();
    }

    pub fn is_legal_move(&self, pos: Position, player: Color) -> bool {
        self.board.is_legal_move(pos, player)
    }

    pub fn has_any_legal_move(&self, player: Color) -> bool {
        self.board.has_any_legal_move(player)
    }

    /// Returns `(black_count, white_count)`.
    pub fn compute_score(&self) -> (u8, u8) {
        self.board.count()
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.board.cell(pos)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    pub fn status(&self) -> Status {
        if !self.is_game_over {
            return Status::Turn(self.current_player);
        }
        let (black_count, white_count) = self.compute_score();
        Status::Finished {
            outcome: Outcome::from_counts(black_count, white_count),
            black_count,
            white_count,
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.to_u8(),
            black_count,
            white_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            status: self.status().to_string(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: match Outcome::from_counts(black_count, white_count) {
                Outcome::Winner(color) => color.to_u8(),
                Outcome::Draw => 0,
            },
            black_count,
            white_count,
        }
    }

    fn notify(&mut self) {
        let state = self.to_game_state();
        self.presenter.render(&state);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new_headless()
    }
}
