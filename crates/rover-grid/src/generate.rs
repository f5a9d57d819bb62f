//! Seeded random obstacle fields.
//!
//! Each cell is blocked independently with probability `blocked_ratio`,
//! drawn from a `SmallRng` seeded with `seed`.  The same
//! `(rows, cols, blocked_ratio, seed)` always yields the same grid, which is
//! what makes these fields usable in tests and reproducible demo runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rover_core::Cell;

use crate::{Grid, GridBuilder, GridError, GridResult};

/// Generate a `rows × cols` grid with roughly `blocked_ratio` of its cells
/// blocked.  Every cell listed in `keep_open` is forced traversable
/// (typically the start and destination of a scenario).
///
/// # Errors
///
/// [`GridError::BlockedRatio`] if the ratio is not in `[0, 1]`, and
/// [`GridError::OutOfBounds`] if a `keep_open` cell is outside the grid.
pub fn random_grid(
    rows:          usize,
    cols:          usize,
    blocked_ratio: f64,
    seed:          u64,
    keep_open:     &[Cell],
) -> GridResult<Grid> {
    if !(0.0..=1.0).contains(&blocked_ratio) {
        return Err(GridError::BlockedRatio(blocked_ratio));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut b = GridBuilder::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(blocked_ratio) {
                b.block(Cell::new(row, col))?;
            }
        }
    }
    for &cell in keep_open {
        b.unblock(cell)?;
    }
    Ok(b.build())
}
