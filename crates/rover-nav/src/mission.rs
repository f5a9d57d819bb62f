//! Multi-waypoint missions.
//!
//! A [`Mission`] is an ordered list of destinations.  [`Mission::run`] sends
//! the rover to each in turn.  Each leg is an independent atomic attempt: a
//! failed leg leaves the rover where it was and the next leg starts from
//! there.

use tracing::info;

use rover_core::Cell;
use rover_grid::Grid;

use crate::{NavResult, Route, Rover, RoverState, Strategy};

// ── Observer ──────────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Mission::run`].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — leg printer
///
/// ```rust,ignore
/// struct LegPrinter;
///
/// impl MissionObserver for LegPrinter {
///     fn on_leg_end(&mut self, index: usize, leg: &Leg) {
///         println!("leg {index}: {} -> {} {:?}", leg.from, leg.destination, leg.steps());
///     }
/// }
/// ```
pub trait MissionObserver {
    /// Called before leg `index` is attempted.
    fn on_leg_start(&mut self, _index: usize, _from: Cell, _destination: Cell) {}

    /// Called after leg `index` has been attempted, successful or not.
    fn on_leg_end(&mut self, _index: usize, _leg: &Leg) {}

    /// Called once after the last leg.
    fn on_mission_end(&mut self, _report: &MissionReport) {}
}

/// A [`MissionObserver`] that does nothing.
pub struct NoopObserver;

impl MissionObserver for NoopObserver {}

// ── Mission ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mission {
    pub waypoints: Vec<Cell>,
}

/// One attempted leg of a mission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    pub from:         Cell,
    pub destination:  Cell,
    pub outcome:      NavResult<Route>,
    /// Rover budget after the attempt.
    pub budget_after: u32,
}

impl Leg {
    pub fn reached(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn steps(&self) -> Option<u32> {
        self.outcome.as_ref().ok().map(Route::steps)
    }
}

/// Summary returned by [`Mission::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionReport {
    pub legs:        Vec<Leg>,
    pub final_state: RoverState,
}

impl MissionReport {
    /// Number of legs that reached their destination.
    pub fn reached(&self) -> usize {
        self.legs.iter().filter(|l| l.reached()).count()
    }

    pub fn failed(&self) -> usize {
        self.legs.len() - self.reached()
    }

    pub fn all_reached(&self) -> bool {
        self.legs.iter().all(Leg::reached)
    }

    /// Steps summed over successful legs.
    pub fn total_steps(&self) -> u32 {
        self.legs.iter().filter_map(Leg::steps).sum()
    }
}

impl Mission {
    pub fn new(waypoints: Vec<Cell>) -> Self {
        Self { waypoints }
    }

    /// Drive `rover` through every waypoint in order.
    pub fn run<S: Strategy, O: MissionObserver>(
        &self,
        rover:    &mut Rover<S>,
        grid:     &Grid,
        observer: &mut O,
    ) -> MissionReport {
        let mut legs = Vec::with_capacity(self.waypoints.len());

        for (index, &destination) in self.waypoints.iter().enumerate() {
            let from = rover.position();
            observer.on_leg_start(index, from, destination);

            let outcome = rover.traverse_route(grid, destination);
            let leg = Leg { from, destination, outcome, budget_after: rover.budget() };

            match &leg.outcome {
                Ok(route) => info!(
                    leg = index,
                    %from,
                    to = %destination,
                    steps = route.steps(),
                    budget = leg.budget_after,
                    "leg reached"
                ),
                Err(err) => info!(
                    leg = index,
                    %from,
                    to = %destination,
                    budget = leg.budget_after,
                    error = %err,
                    "leg failed"
                ),
            }

            observer.on_leg_end(index, &leg);
            legs.push(leg);
        }

        let report = MissionReport { legs, final_state: rover.state() };
        observer.on_mission_end(&report);
        report
    }
}
