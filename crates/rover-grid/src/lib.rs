//! `rover-grid` — the terrain a rover drives over.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`grid`]     | `Grid` (flat row-major flags), `GridBuilder`              |
//! | [`ascii`]    | `.`/`#` text maps: `FromStr`, `Display`, route overlay    |
//! | [`generate`] | `random_grid` — seeded obstacle fields                    |
//! | [`error`]    | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates serde derives to `rover-core` types.             |

pub mod ascii;
pub mod error;
pub mod generate;
pub mod grid;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use generate::random_grid;
pub use grid::{Grid, GridBuilder};
