use std::fmt;

use serde::Serialize;

use crate::error::GameError;

pub const BOARD_WIDTH: u8 = 8;

/// Wire encoding shared by `Cell`, `Color` and `GameResult::winner`.
pub const CELL_EMPTY: u8 = 0;
pub const PLAYER_BLACK: u8 = 1;
pub const PLAYER_WHITE: u8 = 2;

/// Stone color, also used to identify a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Self::Black => PLAYER_BLACK,
            Self::White => PLAYER_WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("Black"),
            Self::White => f.write_str("White"),
        }
    }
}

/// Contents of one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn to_u8(self) -> u8 {
        match self {
            Self::Empty => CELL_EMPTY,
            Self::Black => PLAYER_BLACK,
            Self::White => PLAYER_WHITE,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

/// A board coordinate. Always on the board once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Result<Self, GameError> {
        if row >= BOARD_WIDTH || col >= BOARD_WIDTH {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        let width = BOARD_WIDTH as usize;
        let row = u8::try_from(index / width).unwrap_or(u8::MAX);
        Self::new(row, (index % width) as u8)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major square index in `0..64`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_WIDTH as usize + self.col as usize
    }
}

/// Formats as `d3` style notation: column letter, then 1-based row.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl Outcome {
    pub fn from_counts(black_count: u8, white_count: u8) -> Self {
        if black_count > white_count {
            Self::Winner(Color::Black)
        } else if white_count > black_count {
            Self::Winner(Color::White)
        } else {
            Self::Draw
        }
    }
}

/// Turn/status line shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Turn(Color),
    Finished {
        outcome: Outcome,
        black_count: u8,
        white_count: u8,
    },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Turn(color) => write!(f, "{color} to move"),
            Self::Finished {
                outcome,
                black_count,
                white_count,
            } => {
                match outcome {
                    Outcome::Winner(color) => write!(f, "Game over - {color} wins")?,
                    Outcome::Draw => f.write_str("Game over - Draw")?,
                }
                write!(f, " (Black: {black_count}, White: {white_count})")
            }
        }
    }
}

/// Public game state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cells, row major, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when a side was skipped: the last accepted move left the
    ///   opponent without a reply, or a resumed position began with a side
    ///   that could not move.
    /// - `false` otherwise, including right after initialize/reset.
    pub is_pass: bool,
    /// Contract:
    /// - After a move: indices (0..=63) of the stones it flipped.
    /// - After initialize/reset: empty.
    pub flipped: Vec<u8>,
    pub status: String,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 0=draw, 1=black, 2=white.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

impl GameResult {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_counts(self.black_count, self.white_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_off_board_coordinates() {
        assert_eq!(
            Position::new(8, 0),
            Err(GameError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            Position::new(0, 200),
            Err(GameError::OutOfBounds { row: 0, col: 200 })
        );
        assert!(Position::from_index(64).is_err());
    }

    #[test]
    fn position_index_is_row_major() {
        let pos = Position::new(2, 3).unwrap();

        assert_eq!(pos.index(), 19);
        assert_eq!(Position::from_index(19).unwrap(), pos);
        assert_eq!(pos.to_string(), "d3");
    }

    #[test]
    fn status_text_covers_turns_wins_and_draws() {
        assert_eq!(Status::Turn(Color::White).to_string(), "White to move");

        let win = Status::Finished {
            outcome: Outcome::from_counts(40, 24),
            black_count: 40,
            white_count: 24,
        };
        assert_eq!(
            win.to_string(),
            "Game over - Black wins (Black: 40, White: 24)"
        );

        let draw = Status::Finished {
            outcome: Outcome::from_counts(32, 32),
            black_count: 32,
            white_count: 32,
        };
        assert_eq!(draw.to_string(), "Game over - Draw (Black: 32, White: 32)");
    }
}
