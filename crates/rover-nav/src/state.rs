//! Rover state and the traversal state-transition function.

use tracing::debug;

use rover_core::{Cell, DEFAULT_BUDGET};
use rover_grid::Grid;

use crate::{NavError, NavResult, Route, Strategy};

/// Where the rover is and how much battery it has left.
///
/// The position is always inside the grid it was created for and always
/// traversable.  The budget never increases.  There are no setters: a new
/// state only comes out of [`traverse`](Self::traverse).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RoverState {
    position: Cell,
    budget:   u32,
}

impl RoverState {
    /// Place a rover at `start` with [`DEFAULT_BUDGET`] units.
    pub fn new(grid: &Grid, start: Cell) -> NavResult<Self> {
        Self::with_budget(grid, start, DEFAULT_BUDGET)
    }

    /// Place a rover at `start` with an explicit starting budget.
    ///
    /// # Errors
    ///
    /// [`NavError::OutOfBounds`] if `start` is outside `grid`,
    /// [`NavError::StartBlocked`] if it is a blocked cell.
    pub fn with_budget(grid: &Grid, start: Cell, budget: u32) -> NavResult<Self> {
        if !grid.contains(start) {
            return Err(NavError::OutOfBounds { cell: start, rows: grid.rows(), cols: grid.cols() });
        }
        if !grid.is_traversable(start) {
            return Err(NavError::StartBlocked(start));
        }
        Ok(Self { position: start, budget })
    }

    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[inline]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Attempt to drive to `destination` with `strategy`.
    ///
    /// Returns the successor state together with the outcome.  On failure
    /// the successor is `self` unchanged.  `grid` must be the grid this
    /// state was created on.
    pub fn traverse<S: Strategy + ?Sized>(
        self,
        strategy:    &S,
        grid:        &Grid,
        destination: Cell,
    ) -> Transition {
        let outcome = strategy
            .plan(grid, self.position, destination, self.budget)
            .and_then(|route| self.charge(route));

        let state = match &outcome {
            Ok(route) => {
                let next = RoverState {
                    position: route.end(),
                    budget:   self.budget - route.steps(),
                };
                debug!(
                    strategy = ?strategy.kind(),
                    from = %self.position,
                    to = %destination,
                    steps = route.steps(),
                    budget = next.budget,
                    "traversal succeeded"
                );
                next
            }
            Err(err) => {
                debug!(
                    strategy = ?strategy.kind(),
                    from = %self.position,
                    to = %destination,
                    budget = self.budget,
                    error = %err,
                    "traversal failed"
                );
                self
            }
        };

        Transition { state, outcome }
    }

    /// Refuse routes a custom strategy returned over budget.
    fn charge(&self, route: Route) -> NavResult<Route> {
        if route.steps() > self.budget {
            return Err(NavError::InsufficientBudget {
                required:  Some(route.steps()),
                available: self.budget,
            });
        }
        Ok(route)
    }
}

/// A state paired with the outcome that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The state after the attempt.  Equal to the input state on failure.
    pub state: RoverState,

    /// The route walked, or why the rover did not move.
    pub outcome: NavResult<Route>,
}

impl Transition {
    /// `true` if the rover moved (including zero-step arrivals).
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Steps taken, or `None` on failure.
    pub fn steps(&self) -> Option<u32> {
        self.outcome.as_ref().ok().map(Route::steps)
    }
}
