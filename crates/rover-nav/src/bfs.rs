//! Breadth-first traversal.
//!
//! Nodes are traversable cells; edges join cells one step apart on exactly
//! one axis.  Every edge costs one budget unit, so the first time the
//! destination leaves the FIFO queue its step count is minimal.  If that
//! count is already over budget no cheaper route exists and the search stops
//! there instead of exhausting the grid.
//!
//! Cells are marked visited when dequeued, not when enqueued.  A cell may
//! therefore sit in the queue more than once; later copies are skipped.
//! Work is bounded by the reachable region, at most `rows * cols` cells.

use std::collections::VecDeque;

use tracing::trace;

use rover_core::{Cell, StrategyKind};
use rover_grid::Grid;

use crate::strategy::check_bounds;
use crate::{NavError, NavResult, Route, Strategy};

/// Complete, step-optimal traversal.
///
/// Finds a route if and only if the destination is reachable through open
/// cells; among equal-length routes the one found first under the grid's
/// up, down, left, right neighbour order wins.
#[derive(Copy, Clone, Debug, Default)]
pub struct BfsStrategy;

impl Strategy for BfsStrategy {
    fn plan(&self, grid: &Grid, from: Cell, to: Cell, budget: u32) -> NavResult<Route> {
        bfs(grid, from, to, budget)
    }

    fn kind(&self) -> Option<StrategyKind> {
        Some(StrategyKind::Bfs)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

struct Entry {
    cell:   Cell,
    steps:  u32,
    parent: Option<Cell>,
}

fn bfs(grid: &Grid, from: Cell, to: Cell, budget: u32) -> NavResult<Route> {
    check_bounds(grid, from, to)?;

    let n = grid.len();
    let mut visited = vec![false; n];
    // parent[i] = cell we arrived from; None for the start and unreached cells.
    let mut parent: Vec<Option<Cell>> = vec![None; n];

    let mut queue = VecDeque::new();
    queue.push_back(Entry { cell: from, steps: 0, parent: None });

    while let Some(Entry { cell, steps, parent: came_from }) = queue.pop_front() {
        let idx = grid.index(cell);
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        parent[idx] = came_from;

        if cell == to {
            if steps <= budget {
                trace!(%from, %to, steps, "bfs reached destination");
                return Ok(reconstruct(grid, &parent, to));
            }
            trace!(%from, %to, steps, budget, "bfs shortest route over budget");
            return Err(NavError::InsufficientBudget { required: Some(steps), available: budget });
        }

        for next in grid.open_neighbors(cell) {
            if !visited[grid.index(next)] {
                queue.push_back(Entry { cell: next, steps: steps + 1, parent: Some(cell) });
            }
        }
    }

    trace!(%from, %to, "bfs exhausted reachable region");
    Err(NavError::Blocked { from, to })
}

fn reconstruct(grid: &Grid, parent: &[Option<Cell>], to: Cell) -> Route {
    let mut cells = vec![to];
    let mut cur = to;
    while let Some(prev) = parent[grid.index(cur)] {
        cells.push(prev);
        cur = prev;
    }
    cells.reverse();
    Route::from_cells(cells)
}
