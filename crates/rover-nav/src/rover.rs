//! Caller-facing rover that owns its state.

use rover_core::{Cell, RoverConfig, StrategyKind};
use rover_grid::Grid;

use crate::{NavResult, Route, RoverState, Strategy};

/// Wraps a [`RoverState`] and a [`Strategy`] for drivers that prefer
/// `&mut self` calls to threading states through by value.
///
/// Each call runs [`RoverState::traverse`] and keeps the successor state, so
/// failed attempts leave the rover exactly where it was.
///
/// # Type parameter
///
/// `S` is fixed at compile time (e.g. [`BfsStrategy`](crate::BfsStrategy)).
/// Use [`StrategyKind`] when the choice comes from configuration.
#[derive(Clone, Debug)]
pub struct Rover<S: Strategy> {
    /// The traversal algorithm.
    pub strategy: S,

    state: RoverState,
}

impl<S: Strategy> Rover<S> {
    pub fn new(strategy: S, state: RoverState) -> Self {
        Self { strategy, state }
    }

    /// Place a rover at `start` with the default budget.
    pub fn deploy(strategy: S, grid: &Grid, start: Cell) -> NavResult<Self> {
        Ok(Self::new(strategy, RoverState::new(grid, start)?))
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    pub fn position(&self) -> Cell {
        self.state.position()
    }

    pub fn budget(&self) -> u32 {
        self.state.budget()
    }

    /// Drive to `destination`, returning the steps taken.
    pub fn traverse(&mut self, grid: &Grid, destination: Cell) -> NavResult<u32> {
        self.traverse_route(grid, destination).map(|route| route.steps())
    }

    /// Drive to `destination`, returning the full route.
    pub fn traverse_route(&mut self, grid: &Grid, destination: Cell) -> NavResult<Route> {
        let transition = self.state.traverse(&self.strategy, grid, destination);
        self.state = transition.state;
        transition.outcome
    }
}

impl Rover<StrategyKind> {
    /// Place a rover at `start` using the strategy and budget in `config`.
    pub fn from_config(config: &RoverConfig, grid: &Grid, start: Cell) -> NavResult<Self> {
        let state = RoverState::with_budget(grid, start, config.initial_budget)?;
        Ok(Self::new(config.strategy, state))
    }
}
