//! Random seeding of the interior.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;
use crate::params::Params;
use crate::Cell;

/// Upper bound of the random interior seed.
///
/// `Inclusive` draws from `0..=states`, which can produce the out-of-band
/// value `states` in generation 0 only. `Clamped` draws from `0..states`,
/// the same range every later generation lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedRange {
    Inclusive,
    #[default]
    Clamped,
}

impl SeedRange {
    /// Number of distinct values the seed can take.
    fn span(self, params: &Params) -> f64 {
        match self {
            SeedRange::Inclusive => params.states as f64 + 1.0,
            SeedRange::Clamped => params.states as f64,
        }
    }
}

/// Builds a reproducible generator when a seed is given, an OS-seeded one otherwise.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Seeds each interior cell of `current` with `floor(random * span)` and
/// clears the interior of `next`. The border is left as it is.
pub fn seed_interior<R: Rng + ?Sized>(grid: &mut Grid, params: &Params, range: SeedRange, rng: &mut R) {
    let span = range.span(params);
    let ceiling = params.max_seed(range);
    for y in 1..grid.height() - 1 {
        for x in 1..grid.width() - 1 {
            let r: f64 = rng.random();
            // r < 1, but the product may still round up to the span.
            let value = ((r * span).floor() as Cell).min(ceiling);
            grid.set_current(x, y, value);
        }
    }
    grid.clear_next_interior();
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        ?range,
        "seeded interior"
    );
}
