//! Greedy direct-line traversal.
//!
//! Each iteration takes one step strictly toward the destination, trying
//! the row axis first and the column axis second.  When neither move is open
//! the walk fails on the spot; it never backtracks or sidesteps.  This makes
//! it incomplete: a single obstacle on the direct line can defeat it even
//! when [`BfsStrategy`](crate::BfsStrategy) would find a detour.  When it
//! does succeed its route is Manhattan-length and therefore as short as
//! BFS's.
//!
//! The budget is checked before every move, so the loop runs at most
//! `budget` times.

use tracing::trace;

use rover_core::{Cell, Direction, StrategyKind};
use rover_grid::Grid;

use crate::strategy::check_bounds;
use crate::{NavError, NavResult, Route, Strategy};

/// Row-then-column walk toward the destination.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn plan(&self, grid: &Grid, from: Cell, to: Cell, budget: u32) -> NavResult<Route> {
        greedy(grid, from, to, budget)
    }

    fn kind(&self) -> Option<StrategyKind> {
        Some(StrategyKind::Greedy)
    }
}

fn greedy(grid: &Grid, from: Cell, to: Cell, budget: u32) -> NavResult<Route> {
    check_bounds(grid, from, to)?;

    let mut cur = from;
    let mut cells = vec![from];
    let mut steps: u32 = 0;

    while cur != to {
        if steps >= budget {
            trace!(%from, %to, at = %cur, steps, "greedy ran out of budget");
            return Err(NavError::InsufficientBudget { required: None, available: budget });
        }

        let Some(next) = next_step(grid, cur, to) else {
            trace!(%from, %to, at = %cur, steps, "greedy blocked");
            return Err(NavError::Blocked { from, to });
        };

        cur = next;
        cells.push(cur);
        steps += 1;
    }

    Ok(Route::from_cells(cells))
}

/// The row move toward `to` if open, else the column move toward `to` if
/// open, else `None`.
fn next_step(grid: &Grid, cur: Cell, to: Cell) -> Option<Cell> {
    let row_dir = if cur.row < to.row {
        Some(Direction::Down)
    } else if cur.row > to.row {
        Some(Direction::Up)
    } else {
        None
    };
    let col_dir = if cur.col < to.col {
        Some(Direction::Right)
    } else if cur.col > to.col {
        Some(Direction::Left)
    } else {
        None
    };

    [row_dir, col_dir]
        .into_iter()
        .flatten()
        .filter_map(|dir| cur.step(dir))
        .find(|&next| grid.is_traversable(next))
}
