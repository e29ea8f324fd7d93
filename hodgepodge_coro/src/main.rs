// main.rs - HodgePodge machine driven by a cooperative tokio timer loop
// Row coroutines are available with --rows

use std::num::NonZeroU64;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hodgepodge::params::{DEFAULT_G, DEFAULT_K1, DEFAULT_K2, DEFAULT_STATES};
use hodgepodge::{Channel, Params, SeedRange, Simulation, SimulationConfig};

mod display;
mod driver;
mod telemetry;

use display::{CensusLog, FrameBuffer};
use driver::{DriverOptions, StepMode};

#[derive(Debug, Parser)]
#[command(name = "hodgepodge", about = "Run a HodgePodge machine on a fixed tick")]
struct Args {
    /// Grid width in cells, border included.
    #[arg(long, default_value_t = 200)]
    width: usize,

    /// Grid height in cells, border included.
    #[arg(long, default_value_t = 200)]
    height: usize,

    /// Number of health levels.
    #[arg(long, default_value_t = DEFAULT_STATES)]
    states: u32,

    /// Damping of infected neighbours.
    #[arg(long, default_value_t = DEFAULT_K1)]
    k1: f64,

    /// Damping of ill neighbours.
    #[arg(long, default_value_t = DEFAULT_K2)]
    k2: f64,

    /// Growth of infected cells.
    #[arg(long, default_value_t = DEFAULT_G)]
    g: f64,

    /// Milliseconds between generations.
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u64).range(1..))]
    period_ms: u64,

    /// Stop after this many generations.
    #[arg(long)]
    generations: Option<u64>,

    /// Seed for a reproducible initial grid.
    #[arg(long)]
    seed: Option<u64>,

    /// Seed values up to `states` instead of `states - 1`.
    #[arg(long)]
    inclusive_seed: bool,

    /// Compute each generation with one coroutine per row.
    #[arg(long)]
    rows: bool,

    /// Stop once a recent generation repeats.
    #[arg(long)]
    stop_on_cycle: bool,

    /// Log the census every N generations.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    log_every: u64,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            width: self.width,
            height: self.height,
            params: Params::default()
                .with_states(self.states)
                .with_k1(self.k1)
                .with_k2(self.k2)
                .with_g(self.g),
            seed: self.seed,
            seed_range: if self.inclusive_seed {
                SeedRange::Inclusive
            } else {
                SeedRange::Clamped
            },
        }
    }

    fn options(&self) -> DriverOptions {
        DriverOptions {
            period: Duration::from_millis(self.period_ms),
            generations: self.generations,
            mode: if self.rows { StepMode::RowCoroutines } else { StepMode::Serial },
            stop_on_cycle: self.stop_on_cycle,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    telemetry::init(args.verbose);

    let config = args.config();
    let mut sim = Simulation::new(&config).context("invalid simulation configuration")?;
    let mut renderer = (
        FrameBuffer::new(sim.grid().len(), Channel::Blue),
        CensusLog::new(NonZeroU64::new(args.log_every).context("--log-every must be at least 1")?),
    );

    // One thread: ticks run to completion before the next begins.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    let summary = runtime.block_on(driver::run(&mut sim, &mut renderer, &args.options()))?;

    tracing::info!(
        generations = summary.generations,
        frames = renderer.0.frames(),
        frame_bytes = renderer.0.pixels().len(),
        stop = ?summary.stop,
        "done"
    );
    Ok(())
}
