//! Traversal strategy selector shared by configuration and the nav crate.
//!
//! The algorithms themselves live in `rover-nav`; this enum only names them
//! so a config file or command line can pick one without depending on the
//! implementation crate.

use std::str::FromStr;

use crate::CoreError;

/// Which traversal algorithm a rover uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    /// Exhaustive breadth-first search.  Complete and step-optimal.
    #[default]
    Bfs,
    /// Row-then-column direct-line walk.  Never backtracks.
    Greedy,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Bfs, StrategyKind::Greedy];

    /// Lower-case label, the same spelling accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Bfs    => "bfs",
            StrategyKind::Greedy => "greedy",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs"    => Ok(StrategyKind::Bfs),
            "greedy" => Ok(StrategyKind::Greedy),
            other    => Err(CoreError::Parse(format!("unknown strategy {other:?}"))),
        }
    }
}
