//! Grid-construction error type.

use thiserror::Error;

use rover_core::Cell;

/// Errors produced by `rover-grid`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("{rows}x{cols} grid needs {expected} cells, got {found}")]
    CellCount { rows: usize, cols: usize, expected: usize, found: usize },

    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("unexpected {found:?} at line {line}, column {column}")]
    Parse { line: usize, column: usize, found: char },

    #[error("blocked ratio {0} is outside [0, 1]")]
    BlockedRatio(f64),
}

pub type GridResult<T> = Result<T, GridError>;
