//! `rover-core` — foundational types shared by every `rover-*` crate.
//!
//! This crate has no `rover-*` dependencies and minimal external ones (only
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                           |
//! |----------------|----------------------------------------------------|
//! | [`cell`]       | `Cell` coordinate, `Direction`                     |
//! | [`strategy`]   | `StrategyKind` enum                                |
//! | [`config`]     | `RoverConfig`, `DEFAULT_BUDGET`                    |
//! | [`error`]      | `CoreError`, `CoreResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod strategy;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use config::{DEFAULT_BUDGET, RoverConfig};
pub use error::{CoreError, CoreResult};
pub use strategy::StrategyKind;
