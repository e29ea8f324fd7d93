// display.rs - Renderers fed by the driver loop

use std::num::NonZeroU64;

use anyhow::{Context, Result};
use hodgepodge::{render_rgba, Channel, Simulation};

use crate::driver::Renderer;

/// Keeps an RGBA image of the latest generation, one pixel per cell.
pub struct FrameBuffer {
    pixels: Vec<u8>,
    channel: Channel,
    frames: u64,
}

impl FrameBuffer {
    /// `cells` is the grid's cell count, see [`hodgepodge::Grid::len`].
    pub fn new(cells: usize, channel: Channel) -> Self {
        Self {
            pixels: vec![0; cells * 4],
            channel,
            frames: 0,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for FrameBuffer {
    fn frame_ready(&mut self, sim: &Simulation) -> Result<()> {
        render_rgba(sim.current(), sim.params().states, self.channel, &mut self.pixels)
            .with_context(|| format!("rendering generation {}", sim.generation()))?;
        self.frames += 1;
        Ok(())
    }
}

/// Logs the population of every `every`-th generation.
pub struct CensusLog {
    every: NonZeroU64,
}

impl CensusLog {
    pub fn new(every: NonZeroU64) -> Self {
        Self { every }
    }
}

impl Renderer for CensusLog {
    fn frame_ready(&mut self, sim: &Simulation) -> Result<()> {
        if sim.generation() % self.every.get() != 0 {
            return Ok(());
        }
        let census = sim.grid().census(sim.params());
        let infected_pct = (census.infected + census.ill) as f64 / census.total() as f64 * 100.0;
        let infected_pct = (infected_pct * 10.0).round() / 10.0;
        tracing::info!(
            generation = sim.generation(),
            healthy = census.healthy,
            infected = census.infected,
            ill = census.ill,
            infected_pct,
            "census"
        );
        Ok(())
    }
}
