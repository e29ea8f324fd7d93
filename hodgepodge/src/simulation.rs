//! An owned simulation: grid, parameters and generation count.

use crate::engine;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::params::Params;
use crate::seed::{self, SeedRange};
use crate::Cell;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub params: Params,
    /// Fixed seed for a reproducible initial grid.
    pub seed: Option<u64>,
    pub seed_range: SeedRange,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            params: Params::default(),
            seed: None,
            seed_range: SeedRange::default(),
        }
    }
}

/// A single HodgePodge run.
///
/// Each simulation owns its buffers, so any number can run side by side.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    params: Params,
    generation: u64,
}

impl Simulation {
    /// Builds a randomly seeded simulation.
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let mut rng = seed::rng_from(config.seed);
        let grid = Grid::initialize(config.width, config.height, &config.params, config.seed_range, &mut rng)?;
        tracing::info!(
            width = config.width,
            height = config.height,
            states = config.params.states,
            k1 = config.params.k1,
            k2 = config.params.k2,
            g = config.params.g,
            "simulation initialized"
        );
        Ok(Self::from_parts(grid, config.params))
    }

    /// Wraps an existing grid, e.g. one prepared cell by cell.
    pub fn from_grid(grid: Grid, params: Params) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::from_parts(grid, params))
    }

    fn from_parts(grid: Grid, params: Params) -> Self {
        Self {
            grid,
            params,
            generation: 0,
        }
    }

    /// Advances one generation: step, then swap.
    pub fn tick(&mut self) {
        engine::step(&mut self.grid, &self.params);
        self.publish_next();
    }

    /// Promotes a `next` buffer filled outside of [`tick`](Self::tick).
    pub fn publish_next(&mut self) {
        self.grid.swap();
        self.generation += 1;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The buffer a renderer should sample.
    pub fn current(&self) -> &[Cell] {
        self.grid.current()
    }
}
