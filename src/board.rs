use std::fmt;

use crate::error::GameError;
use crate::types::{Cell, Color, Position};

const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello board state represented by two bitboards.
///
/// Bit `row * 8 + col` is set in `black` or `white` when that color occupies
/// the square. The two masks never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds an arbitrary position from raw masks.
    pub fn from_bitboards(black: u64, white: u64) -> Result<Self, GameError> {
        if black & white != 0 {
            return Err(GameError::OverlappingStones);
        }
        Ok(Self { black, white })
    }

    pub fn cell(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Returns the stones `player` would flip by playing at `pos`.
    /// Empty iff the move is illegal.
    pub fn flips(&self, pos: Position, player: Color) -> u64 {
        let (me, opp) = self.sides(player);
        Self::collect_flips(pos.index(), me, opp)
    }

    pub fn is_legal_move(&self, pos: Position, player: Color) -> bool {
        self.flips(pos, player) != 0
    }

    /// Returns legal move mask for the given side.
    pub fn legal_moves(&self, player: Color) -> u64 {
        let (me, opp) = self.sides(player);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if Self::collect_flips(pos, me, opp) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    pub fn has_any_legal_move(&self, player: Color) -> bool {
        self.legal_moves(player) != 0
    }

    /// Places one stone and flips captured stones.
    /// Returns flipped bit mask. Returns 0 and leaves the board untouched
    /// when the move is illegal.
    pub fn place(&mut self, pos: Position, player: Color) -> u64 {
        let (me, opp) = self.sides(player);

        let flips = Self::collect_flips(pos.index(), me, opp);
        if flips == 0 {
            return 0;
        }

        let next_me = me | bit(pos.index()) | flips;
        let next_opp = opp & !flips;

        match player {
            Color::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Color::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        flips
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            let square = bit(pos);
            *cell = if (self.black & square) != 0 {
                Cell::Black.to_u8()
            } else if (self.white & square) != 0 {
                Cell::White.to_u8()
            } else {
                Cell::Empty.to_u8()
            };
        }
        board
    }

    fn sides(&self, player: Color) -> (u64, u64) {
        match player {
            Color::Black => (self.black, self.white),
            Color::White => (self.white, self.black),
        }
    }

    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;

            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_SIZE + c as usize);
                if (opp & square) != 0 {
                    line |= square;
                } else {
                    // An own stone closes the run; an empty square voids it.
                    if (me & square) != 0 {
                        flips |= line;
                    }
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// `X` for black, `O` for white, `.` for empty; one rank per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row, cells) in self.to_array().chunks(BOARD_SIZE).enumerate() {
            write!(f, "{}", row + 1)?;
            for &cell in cells {
                let symbol = match cell {
                    1 => 'X',
                    2 => 'O',
                    _ => '.',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lists set bits of `mask` as square indices, lowest first.
pub fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    let mut bits = mask;
    let mut out = Vec::with_capacity(mask.count_ones() as usize);

    while bits != 0 {
        out.push(bits.trailing_zeros() as u8);
        bits &= bits - 1;
    }

    out
}

fn bit(pos: usize) -> u64 {
    debug_assert!(pos < NUM_SQUARES);
    1u64 << pos
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
