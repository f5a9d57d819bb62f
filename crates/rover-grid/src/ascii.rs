//! Plain-text maps.
//!
//! One line per row, `.` for open and `#` for blocked.  Leading/trailing
//! whitespace on each line is ignored, as are blank lines, so maps can be
//! written as indented string literals:
//!
//! ```
//! use rover_grid::Grid;
//!
//! let grid: Grid = "
//!     ...
//!     .#.
//!     ...
//! ".parse().unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (3, 3));
//! assert!(!grid.traversable(1, 1));
//! ```

use std::fmt;
use std::str::FromStr;

use rover_core::Cell;

use crate::{Grid, GridError};

pub const OPEN: char    = '.';
pub const BLOCKED: char = '#';

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut matrix: Vec<Vec<bool>> = Vec::new();

        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(column, ch)| match ch {
                    OPEN    => Ok(true),
                    BLOCKED => Ok(false),
                    found   => Err(GridError::Parse { line: line_no + 1, column: column + 1, found }),
                })
                .collect::<Result<Vec<bool>, _>>()?;
            matrix.push(row);
        }

        Grid::from_rows(&matrix)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let ch = if self.traversable(row, col) { OPEN } else { BLOCKED };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid {
    /// Render the map with `route` drawn over it: `S` at the first cell,
    /// `E` at the last, `*` in between.  Cells outside the grid are ignored.
    pub fn render_route(&self, route: &[Cell]) -> String {
        let mut canvas: Vec<Vec<char>> = (0..self.rows())
            .map(|row| {
                (0..self.cols())
                    .map(|col| if self.traversable(row, col) { OPEN } else { BLOCKED })
                    .collect()
            })
            .collect();

        let last = route.len().saturating_sub(1);
        for (i, cell) in route.iter().enumerate() {
            if !self.contains(*cell) {
                continue;
            }
            canvas[cell.row][cell.col] = match i {
                0 => 'S',
                _ if i == last => 'E',
                _ => '*',
            };
        }

        let mut out = String::with_capacity(self.len() + self.rows());
        for line in canvas {
            out.extend(line);
            out.push('\n');
        }
        out
    }
}
