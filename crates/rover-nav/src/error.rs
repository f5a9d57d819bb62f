//! Traversal error type.
//!
//! Every variant is recoverable: the rover simply stays where it was.
//! Callers that only care whether the rover moved can use `is_ok()` on the
//! outcome.

use thiserror::Error;

use rover_core::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("no route from {from} to {to}")]
    Blocked { from: Cell, to: Cell },

    #[error("insufficient budget: {available} units left, route needs {}", needs(.required))]
    InsufficientBudget { required: Option<u32>, available: u32 },

    #[error("start cell {0} is blocked")]
    StartBlocked(Cell),
}

fn needs(required: &Option<u32>) -> String {
    match required {
        Some(n) => n.to_string(),
        None    => "more".to_string(),
    }
}

pub type NavResult<T> = Result<T, NavError>;
