//! The traversal strategy trait.
//!
//! # Pluggability
//!
//! [`RoverState::traverse`](crate::RoverState::traverse), [`Rover`](crate::Rover)
//! and [`Mission`](crate::Mission) all go through [`Strategy`], so the two
//! built-in algorithms can be compared against one interface and a caller can
//! supply a third without touching the state machinery.  [`StrategyKind`]
//! implements the trait by dispatching to the built-ins, which lets the
//! algorithm be chosen at runtime from configuration.

use rover_core::{Cell, StrategyKind};
use rover_grid::Grid;

use crate::{BfsStrategy, GreedyStrategy, NavError, NavResult, Route};

/// Pluggable traversal algorithm.
///
/// # Contract
///
/// `plan` is pure: it reads the grid and returns either a [`Route`] from
/// `from` to `to` whose `steps()` is at most `budget`, or the reason there
/// is none.  It never commits anything; applying the route is the caller's
/// job.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one strategy value can serve
/// rovers on several threads sharing a read-only [`Grid`].
pub trait Strategy: Send + Sync {
    fn plan(&self, grid: &Grid, from: Cell, to: Cell, budget: u32) -> NavResult<Route>;

    /// Which built-in this is, for logging and reports.  Custom strategies
    /// report `None`.
    fn kind(&self) -> Option<StrategyKind> {
        None
    }
}

impl Strategy for StrategyKind {
    fn plan(&self, grid: &Grid, from: Cell, to: Cell, budget: u32) -> NavResult<Route> {
        match self {
            StrategyKind::Bfs    => BfsStrategy.plan(grid, from, to, budget),
            StrategyKind::Greedy => GreedyStrategy.plan(grid, from, to, budget),
        }
    }

    fn kind(&self) -> Option<StrategyKind> {
        Some(*self)
    }
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn plan(&self, grid: &Grid, from: Cell, to: Cell, budget: u32) -> NavResult<Route> {
        (**self).plan(grid, from, to, budget)
    }

    fn kind(&self) -> Option<StrategyKind> {
        (**self).kind()
    }
}

/// Reject endpoints outside the grid before any search runs.
pub(crate) fn check_bounds(grid: &Grid, from: Cell, to: Cell) -> NavResult<()> {
    for cell in [to, from] {
        if !grid.contains(cell) {
            return Err(NavError::OutOfBounds { cell, rows: grid.rows(), cols: grid.cols() });
        }
    }
    Ok(())
}
