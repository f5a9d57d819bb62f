//! `rover-nav` — moving a battery-limited rover across a [`Grid`].
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`route`]    | `Route` — the cells walked by a successful traversal             |
//! | [`strategy`] | `Strategy` trait; `StrategyKind` dispatch                        |
//! | [`bfs`]      | `BfsStrategy` — complete, step-optimal                           |
//! | [`greedy`]   | `GreedyStrategy` — row-then-column walk, no backtracking         |
//! | [`state`]    | `RoverState`, `Transition` — the pure state-transition function  |
//! | [`rover`]    | `Rover<S>` — owns a state and a strategy for callers that mutate |
//! | [`mission`]  | `Mission`, `MissionReport`, `MissionObserver`                    |
//! | [`error`]    | `NavError`, `NavResult<T>`                                       |
//!
//! # Traversal model
//!
//! Every attempt is atomic.  [`RoverState::traverse`] takes the state by
//! value and returns a [`Transition`] holding the successor state and the
//! outcome:
//!
//! - `Ok(route)`: the successor sits at the destination with
//!   `budget - route.steps()` left.
//! - `Err(_)`: the successor equals the input state.
//!
//! Both strategies charge one budget unit per 4-directional step.  They
//! differ in completeness: BFS finds a route whenever one exists, greedy
//! only when the row-first direct line happens to be clear.
//!
//! [`Grid`]: rover_grid::Grid

pub mod bfs;
pub mod error;
pub mod greedy;
pub mod mission;
pub mod route;
pub mod rover;
pub mod state;
pub mod strategy;


pub use bfs::BfsStrategy;
pub use error::{NavError, NavResult};
pub use greedy::GreedyStrategy;
pub use mission::{Leg, Mission, MissionObserver, MissionReport, NoopObserver};
pub use route::Route;
pub use rover::Rover;
pub use state::{RoverState, Transition};
pub use strategy::Strategy;
