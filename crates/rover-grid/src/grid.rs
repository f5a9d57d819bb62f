//! Traversability grid and builder.
//!
//! # Data layout
//!
//! Flags are stored in a single row-major `Vec<bool>`:
//!
//! ```text
//! open[ row * cols + col ]
//! ```
//!
//! so a per-search visited set can be a `Vec<bool>` of the same length,
//! indexed with [`Grid::index`].  Dimensions are fixed at construction and
//! nothing mutates a `Grid` afterwards; share it freely across threads.

use rover_core::{Cell, Direction};

use crate::{GridError, GridResult};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Rectangular field of open (`true`) and blocked (`false`) cells.
///
/// Out-of-range coordinates are never stored; every query treats them as
/// not traversable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    open: Vec<bool>,
}

impl Grid {
    /// An `rows × cols` grid with every cell open.
    pub fn open(rows: usize, cols: usize) -> Self {
        Self { rows, cols, open: vec![true; rows * cols] }
    }

    /// Build from a row-major boolean matrix (`true` = traversable).
    ///
    /// The column count is taken from the first row; any row of a different
    /// length is rejected with [`GridError::Ragged`].  An empty matrix gives
    /// a `0 × 0` grid.
    pub fn from_rows<R: AsRef<[bool]>>(matrix: &[R]) -> GridResult<Self> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, |r| r.as_ref().len());

        let mut open = Vec::with_capacity(rows * cols);
        for (row, line) in matrix.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != cols {
                return Err(GridError::Ragged { row, expected: cols, found: line.len() });
            }
            open.extend_from_slice(line);
        }

        Ok(Self { rows, cols, open })
    }

    /// Build from already-flattened row-major flags.
    pub fn from_flat(rows: usize, cols: usize, open: Vec<bool>) -> GridResult<Self> {
        if open.len() != rows * cols {
            return Err(GridError::CellCount {
                rows,
                cols,
                expected: rows * cols,
                found:    open.len(),
            });
        }
        Ok(Self { rows, cols, open })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    /// Total cell count, `rows * cols`.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Number of traversable cells.
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// `false` if out of range or blocked.
    #[inline]
    pub fn traversable(&self, row: usize, col: usize) -> bool {
        self.is_traversable(Cell::new(row, col))
    }

    #[inline]
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.contains(cell) && self.open[self.index(cell)]
    }

    /// Row-major flat index of an in-range `cell`.
    ///
    /// Out-of-range cells alias other indices (or run past the end); check
    /// [`contains`](Self::contains) first.
    #[inline]
    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "{cell} outside {}x{}", self.rows, self.cols);
        cell.row * self.cols + cell.col
    }

    /// Traversable 4-neighbours of `cell` in up, down, left, right order.
    ///
    /// No heap allocation; the order is part of the contract because BFS
    /// tie-breaking between equal-length routes depends on it.
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| cell.step(dir))
            .filter(move |&next| self.is_traversable(next))
    }

    /// Iterator over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Grid`] incrementally, then call [`build`](Self::build).
///
/// Starts fully open; obstacles are added one cell at a time.
///
/// # Example
///
/// ```
/// use rover_core::Cell;
/// use rover_grid::GridBuilder;
///
/// let mut b = GridBuilder::new(3, 3);
/// b.block(Cell::new(1, 1)).unwrap();
/// let grid = b.build();
/// assert!(!grid.traversable(1, 1));
/// assert_eq!(grid.open_count(), 8);
/// ```
pub struct GridBuilder {
    rows: usize,
    cols: usize,
    open: Vec<bool>,
}

impl GridBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, open: vec![true; rows * cols] }
    }

    /// Mark `cell` blocked.
    pub fn block(&mut self, cell: Cell) -> GridResult<&mut Self> {
        self.set_open(cell, false)
    }

    /// Mark `cell` traversable again.
    pub fn unblock(&mut self, cell: Cell) -> GridResult<&mut Self> {
        self.set_open(cell, true)
    }

    fn set_open(&mut self, cell: Cell, open: bool) -> GridResult<&mut Self> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return Err(GridError::OutOfBounds { cell, rows: self.rows, cols: self.cols });
        }
        self.open[cell.row * self.cols + cell.col] = open;
        Ok(self)
    }

    pub fn build(self) -> Grid {
        Grid { rows: self.rows, cols: self.cols, open: self.open }
    }
}
