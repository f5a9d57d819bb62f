//! Grid coordinates and the four axis-aligned moves.
//!
//! Coordinates are `(row, col)` with `(0, 0)` at the top-left.  Both
//! components are `usize` so a `Cell` can never be negative; moving off the
//! top or left edge is reported as `None` by [`Cell::step`] rather than
//! wrapping.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A `(row, col)` grid coordinate.  Equality is componentwise.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step in `dir`, or `None` if that would
    /// leave the non-negative quadrant.  Upper bounds are the grid's job.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        Some(Cell {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// 4-connected (taxicab) distance.  A lower bound on any path length
    /// between the two cells.
    #[inline]
    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Cell {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"`, optionally wrapped in parentheses and with spaces,
/// so the `Display` form round-trips.
impl FromStr for Cell {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| CoreError::Parse(format!("expected `row,col`, got {s:?}")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| CoreError::Parse(format!("bad coordinate {part:?} in {s:?}: {e}")))
        };
        Ok(Cell::new(parse(row)?, parse(col)?))
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four axis-aligned moves.  Diagonals are not representable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four moves in neighbour-probing order: up, down, left, right.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` offset of this move.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up    => (-1,  0),
            Direction::Down  => ( 1,  0),
            Direction::Left  => ( 0, -1),
            Direction::Right => ( 0,  1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
