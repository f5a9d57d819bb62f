//! Rover configuration.

use crate::StrategyKind;

/// Battery units a freshly deployed rover starts with.  One unit buys one
/// step.
pub const DEFAULT_BUDGET: u32 = 100;

/// Per-rover settings.
///
/// Typically loaded from a TOML file by the application crate (enable the
/// `serde` feature) and handed to `rover_nav::Rover::from_config`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoverConfig {
    /// Starting battery.  Default: [`DEFAULT_BUDGET`].
    pub initial_budget: u32,

    /// Traversal algorithm.  Default: BFS.
    pub strategy: StrategyKind,
}

impl RoverConfig {
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_budget(mut self, initial_budget: u32) -> Self {
        self.initial_budget = initial_budget;
        self
    }
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            initial_budget: DEFAULT_BUDGET,
            strategy:       StrategyKind::default(),
        }
    }
}
