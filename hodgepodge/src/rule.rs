//! The HodgePodge transition rule for a single cell.

use crate::params::Params;
use crate::Cell;

/// Which branch of the rule a cell falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Healthy,
    Infected,
    Ill,
}

impl Regime {
    pub fn classify(c: Cell, params: &Params) -> Self {
        if c == 0 {
            Regime::Healthy
        } else if c == params.ill() {
            Regime::Ill
        } else {
            Regime::Infected
        }
    }
}

/// The four axis-aligned neighbours of a cell: north, west, east, south.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbourhood(pub [Cell; 4]);

impl Neighbourhood {
    /// Reads the neighbours of interior cell `(x, y)` from a row-major buffer.
    #[inline]
    pub fn gather(cells: &[Cell], width: usize, x: usize, y: usize) -> Self {
        let i = x + y * width;
        Neighbourhood([cells[i - width], cells[i - 1], cells[i + 1], cells[i + width]])
    }

    pub fn num_ill(&self, params: &Params) -> u32 {
        let ill = params.ill();
        self.0.iter().filter(|&&n| n == ill).count() as u32
    }

    pub fn num_infected(&self) -> u32 {
        self.0.iter().filter(|&&n| n != 0).count() as u32
    }

    pub fn sum(&self) -> u64 {
        self.0.iter().map(|&n| u64::from(n)).sum()
    }
}

/// Next state of a cell holding `c` surrounded by `neighbours`.
///
/// Healthy cells catch the infection from their neighbours, ill cells recover
/// and infected cells drift towards the local average plus `g`. The result is
/// capped at the ill state.
pub fn next_state(c: Cell, neighbours: &Neighbourhood, params: &Params) -> Cell {
    let num_infected = neighbours.num_infected();
    let next = match Regime::classify(c, params) {
        Regime::Healthy => {
            let num_ill = neighbours.num_ill(params);
            (f64::from(num_infected) / params.k1).floor() + (f64::from(num_ill) / params.k2).floor()
        }
        Regime::Ill => 0.0,
        Regime::Infected => {
            let sum = u64::from(c) + neighbours.sum();
            let average = sum / (u64::from(num_infected) + 1);
            (average as f64 + params.g).floor()
        }
    };
    next.min(f64::from(params.ill())) as Cell
}
