pub mod board;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::GameError;
pub use game::{GameEngine, MoveOutcome, NullPresenter, Presenter};
pub use types::{Cell, Color, GameResult, GameState, Outcome, Position, Status};
