// driver.rs - Timer-driven tick loop: step, swap, render

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use hodgepodge::{engine, Cell, History, Params, Simulation};
use tokio::signal;
use tokio::task::JoinSet;
use tokio::time::{self, MissedTickBehavior};

/// Receives each freshly published generation.
pub trait Renderer {
    fn frame_ready(&mut self, sim: &Simulation) -> Result<()>;
}

impl<A: Renderer, B: Renderer> Renderer for (A, B) {
    fn frame_ready(&mut self, sim: &Simulation) -> Result<()> {
        self.0.frame_ready(sim)?;
        self.1.frame_ready(sim)
    }
}

/// How a generation is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepMode {
    /// One pass over the grid.
    #[default]
    Serial,
    /// One cooperative task per interior row.
    RowCoroutines,
}

#[derive(Debug, Clone)]
pub struct DriverOptions {
    pub period: Duration,
    /// Stop after this many generations.
    pub generations: Option<u64>,
    pub mode: StepMode,
    pub stop_on_cycle: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(200),
            generations: None,
            mode: StepMode::Serial,
            stop_on_cycle: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Limit,
    Cycle,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub stop: StopReason,
}

/// Drives `sim` on a fixed period until the limit, a repeated generation or Ctrl-C.
///
/// Ticks never overlap: a late tick delays the schedule instead of bursting.
pub async fn run<R: Renderer>(sim: &mut Simulation, renderer: &mut R, options: &DriverOptions) -> Result<RunSummary> {
    if options.period.is_zero() {
        bail!("tick period must be non-zero");
    }

    let mut history = History::new();
    if options.stop_on_cycle {
        history.observe(sim.current());
    }

    // Render without waiting for the timer so the display starts populated.
    renderer.frame_ready(sim)?;

    let mut ticker = time::interval(options.period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    let stop = loop {
        if options.generations.is_some_and(|limit| sim.generation() >= limit) {
            break StopReason::Limit;
        }

        tokio::select! {
            _ = ticker.tick() => {}
            result = &mut shutdown => {
                result.context("failed to listen for ctrl-c")?;
                break StopReason::Interrupted;
            }
        }

        match options.mode {
            StepMode::Serial => sim.tick(),
            StepMode::RowCoroutines => step_rows(sim).await?,
        }
        tracing::trace!(generation = sim.generation(), "tick");
        renderer.frame_ready(sim)?;

        if options.stop_on_cycle && history.observe(sim.current()) {
            break StopReason::Cycle;
        }
    };

    tracing::info!(generations = sim.generation(), ?stop, "simulation stopped");
    Ok(RunSummary {
        generations: sim.generation(),
        stop,
    })
}

/// Row coroutine: computes one interior row of the next generation.
async fn process_row(current: Arc<[Cell]>, width: usize, y: usize, params: Params) -> (usize, Vec<Cell>) {
    let mut row = vec![0; width];
    engine::step_row(&current, width, y, &params, &mut row);
    tokio::task::yield_now().await;
    (y, row)
}

/// Advances one generation with a task per row, then publishes it.
pub async fn step_rows(sim: &mut Simulation) -> Result<()> {
    let (width, height) = (sim.grid().width(), sim.grid().height());
    let params = *sim.params();
    // Snapshot of the read buffer shared by every row task.
    let current: Arc<[Cell]> = Arc::from(sim.current());

    let mut rows = JoinSet::new();
    for y in 1..height - 1 {
        rows.spawn(process_row(Arc::clone(&current), width, y, params));
    }

    while let Some(joined) = rows.join_next().await {
        let (y, row) = joined.context("row coroutine failed")?;
        sim.grid_mut().write_next_row(y, &row);
    }
    sim.publish_next();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hodgepodge::{Grid, SimulationConfig};

    #[derive(Default)]
    struct Recorder {
        generations: Vec<u64>,
    }

    impl Renderer for Recorder {
        fn frame_ready(&mut self, sim: &Simulation) -> Result<()> {
            self.generations.push(sim.generation());
            Ok(())
        }
    }

    fn sim() -> Simulation {
        let config = SimulationConfig {
            width: 20,
            height: 15,
            seed: Some(5),
            ..SimulationConfig::default()
        };
        Simulation::new(&config).unwrap()
    }

    fn fast(generations: u64) -> DriverOptions {
        DriverOptions {
            period: Duration::from_millis(1),
            generations: Some(generations),
            ..DriverOptions::default()
        }
    }

    #[tokio::test]
    async fn renders_initial_frame_and_every_tick() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        let summary = run(&mut sim, &mut recorder, &fast(4)).await.unwrap();

        assert_eq!(summary, RunSummary { generations: 4, stop: StopReason::Limit });
        assert_eq!(recorder.generations, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn row_coroutines_match_serial_steps() {
        let mut serial = sim();
        let mut rows = sim();
        for _ in 0..6 {
            serial.tick();
            step_rows(&mut rows).await.unwrap();
            assert_eq!(serial.current(), rows.current());
        }
        assert_eq!(rows.generation(), 6);
    }

    #[tokio::test]
    async fn row_mode_runs_through_driver() {
        let mut sim = sim();
        let mut expected = sim.clone();
        for _ in 0..3 {
            expected.tick();
        }
        let options = DriverOptions {
            mode: StepMode::RowCoroutines,
            ..fast(3)
        };
        run(&mut sim, &mut Recorder::default(), &options).await.unwrap();
        assert_eq!(sim.current(), expected.current());
    }

    #[tokio::test]
    async fn stops_when_a_generation_repeats() {
        let grid = Grid::new(6, 6).unwrap();
        let mut sim = Simulation::from_grid(grid, Params::default()).unwrap();
        let options = DriverOptions {
            stop_on_cycle: true,
            ..fast(100)
        };
        let summary = run(&mut sim, &mut Recorder::default(), &options).await.unwrap();
        assert_eq!(summary, RunSummary { generations: 1, stop: StopReason::Cycle });
    }

    #[tokio::test]
    async fn zero_period_is_rejected_before_rendering() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        let options = DriverOptions {
            period: Duration::ZERO,
            ..fast(2)
        };
        let err = run(&mut sim, &mut recorder, &options).await.unwrap_err();
        assert!(err.to_string().contains("non-zero"));
        assert!(recorder.generations.is_empty());
        assert_eq!(sim.generation(), 0);
    }

    #[tokio::test]
    async fn zero_limit_renders_once() {
        let mut sim = sim();
        let mut recorder = Recorder::default();
        let summary = run(&mut sim, &mut recorder, &fast(0)).await.unwrap();
        assert_eq!(summary.generations, 0);
        assert_eq!(recorder.generations, vec![0]);
    }
}
