//! HodgePodge machine.
//!
//! A two-dimensional excitable-medium cellular automaton that turns random
//! noise into self-organizing circular and spiral waves. Every cell holds a
//! health level from `0` (healthy) to `states - 1` (ill); each generation
//! healthy cells catch infection from their von Neumann neighbours, infected
//! cells grow towards illness and ill cells recover.
//!
//! ```
//! use hodgepodge::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig { width: 64, height: 48, seed: Some(1), ..Default::default() };
//! let mut sim = Simulation::new(&config).unwrap();
//! sim.tick();
//! assert_eq!(sim.generation(), 1);
//! assert!(sim.current().iter().all(|&c| c < sim.params().states));
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod params;
pub mod render;
pub mod rule;
pub mod seed;
pub mod simulation;

/// A cell's health level.
pub type Cell = u32;

pub use engine::step;
pub use error::{ConfigError, RenderError};
pub use grid::{Census, Grid};
pub use history::History;
pub use params::Params;
pub use render::{intensity, render_rgba, Channel};
pub use rule::{next_state, Neighbourhood, Regime};
pub use seed::SeedRange;
pub use simulation::{Simulation, SimulationConfig};
