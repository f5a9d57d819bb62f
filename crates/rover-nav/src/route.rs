//! The result of a successful traversal.

use rover_core::Cell;

/// Cells visited from start to destination, both inclusive.
///
/// Never empty: a zero-step route holds just the start cell.  Consecutive
/// cells are always 4-neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    cells: Vec<Cell>,
}

impl Route {
    /// Zero-step route that stays at `at`.
    pub fn trivial(at: Cell) -> Self {
        Self { cells: vec![at] }
    }

    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// Moves taken, which is also the budget consumed.
    #[inline]
    pub fn steps(&self) -> u32 {
        (self.cells.len() - 1) as u32
    }

    /// `true` if the start and destination are the same cell.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }

    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    pub fn end(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
