use crate::types::Position;

/// Errors raised by the rules engine.
///
/// `IllegalMove` is an expected outcome of user input. The other variants
/// are caller contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Target square is occupied or captures nothing.
    #[error("illegal move at {0}")]
    IllegalMove(Position),

    /// Coordinates outside the 8x8 board.
    #[error("row/col out of range: ({row}, {col})")]
    OutOfBounds { row: u8, col: u8 },

    #[error("black and white bitboards overlap")]
    OverlappingStones,
}
