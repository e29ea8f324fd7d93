//! One generation of the automaton over the double-buffered grid.

use crate::grid::Grid;
use crate::params::Params;
use crate::rule::{self, Neighbourhood};
use crate::Cell;

/// Computes the next generation into the grid's scratch buffer.
///
/// Only `next` is written, and only its interior; `current` stays untouched
/// until the caller swaps.
pub fn step(grid: &mut Grid, params: &Params) {
    let (width, height) = (grid.width(), grid.height());
    let (current, next) = grid.buffers_mut();
    for y in 1..height - 1 {
        let row = y * width;
        step_row(current, width, y, params, &mut next[row..row + width]);
    }
}

/// Computes interior row `y` of the next generation into `out`.
///
/// `out` is a full row; its first and last entries are left alone.
pub fn step_row(current: &[Cell], width: usize, y: usize, params: &Params, out: &mut [Cell]) {
    debug_assert_eq!(out.len(), width);
    for x in 1..width - 1 {
        let c = current[x + y * width];
        let neighbours = Neighbourhood::gather(current, width, x, y);
        out[x] = rule::next_state(c, &neighbours, params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{rng_from, SeedRange};

    #[test]
    fn step_leaves_current_untouched() {
        let params = Params::default();
        let mut grid = Grid::initialize(12, 9, &params, SeedRange::Clamped, &mut rng_from(Some(3))).unwrap();
        let before = grid.current().to_vec();
        step(&mut grid, &params);
        assert_eq!(grid.current(), &before[..]);
    }

    #[test]
    fn step_matches_rule_per_cell() {
        let params = Params::default().with_states(10).with_g(3.0);
        let mut grid = Grid::initialize(7, 6, &params, SeedRange::Clamped, &mut rng_from(Some(11))).unwrap();
        step(&mut grid, &params);
        for (x, y) in grid.interior() {
            let c = grid.current_state(x, y);
            let n = Neighbourhood::gather(grid.current(), grid.width(), x, y);
            assert_eq!(grid.next()[grid.index(x, y)], rule::next_state(c, &n, &params));
        }
    }

    #[test]
    fn step_row_writes_interior_only() {
        let params = Params::default().with_states(4);
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set_current(1, 1, 3);
        let mut out = [7; 4];
        step_row(grid.current(), 4, 1, &params, &mut out);
        // The ill cell recovers; its neighbour counts it as both ill and infected.
        assert_eq!(out, [7, 0, 1, 7]);
    }
}
