//! Run-state machine and tick loop.
//!
//! The grid, run state and generation counter share one mutex. Every tick runs
//! both phases of the transition inside a single critical section, and so do
//! toggles, seeds and resets, which keeps ticks from overlapping each other or
//! any edit.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info, trace};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::config::SimulationConfig;
use super::redraw::{Redraw, RedrawCause, RedrawSink};
use crate::domain::{Coord, Grid, PatternLibrary, Result, TransitionEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

struct World {
    grid: Grid,
    state: RunState,
    /// Bumped on every start so a superseded tick task can tell it is stale
    epoch: u64,
    generation: u64,
    ticker: Option<JoinHandle<()>>,
}

struct Shared {
    world: Mutex<World>,
    engine: TransitionEngine,
    sink: Box<dyn RedrawSink>,
}

impl Shared {
    // Every critical section leaves the grid structurally valid, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, World> {
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn advance(&self, world: &mut World) {
        let changed = self.engine.compute_and_commit(&mut world.grid);
        world.generation += 1;
        debug!(
            "generation {}: {} cells changed",
            world.generation,
            changed.len()
        );
        self.emit(world, RedrawCause::Tick, changed);
    }

    fn emit(&self, world: &World, cause: RedrawCause, changed: Vec<Coord>) {
        self.sink.redraw(Redraw {
            cause,
            generation: world.generation,
            changed,
        });
    }
}

/// SimulationController owns the board and drives it at a fixed cadence.
pub struct SimulationController {
    shared: Arc<Shared>,
    config: SimulationConfig,
    runtime: Handle,
}

impl SimulationController {
    /// Build a stopped controller with an empty board. Tick tasks are spawned
    /// on `runtime`.
    pub fn new(
        config: SimulationConfig,
        runtime: Handle,
        sink: impl RedrawSink + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let world = World {
            grid: Grid::new(config.dimension),
            state: RunState::Stopped,
            epoch: 0,
            generation: 0,
            ticker: None,
        };
        Ok(Self {
            shared: Arc::new(Shared {
                world: Mutex::new(world),
                engine: TransitionEngine::new(),
                sink: Box::new(sink),
            }),
            config,
            runtime,
        })
    }

    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    /// Begin ticking. No-op if already running.
    pub fn start(&self) {
        let mut world = self.shared.lock();
        if world.state == RunState::Running {
            trace!("start ignored, already running");
            return;
        }
        world.state = RunState::Running;
        world.epoch += 1;
        let task = run_ticks(Arc::clone(&self.shared), self.config.tick_interval, world.epoch);
        world.ticker = Some(self.runtime.spawn(task));
        info!(
            "simulation started at generation {} ({:?} per tick)",
            world.generation, self.config.tick_interval
        );
    }

    /// Stop ticking. No-op if already stopped.
    ///
    /// Waits for a tick in progress to finish; no tick begins after this returns.
    pub fn stop(&self) {
        let mut world = self.shared.lock();
        if world.state == RunState::Stopped {
            trace!("stop ignored, already stopped");
            return;
        }
        world.state = RunState::Stopped;
        // The ticker is parked between ticks while we hold the lock.
        if let Some(ticker) = world.ticker.take() {
            ticker.abort();
        }
        info!("simulation stopped at generation {}", world.generation);
    }

    /// Kill every cell and rewind the generation counter. The run state is kept.
    pub fn reset(&self) {
        let mut world = self.shared.lock();
        let changed = world.grid.live_cells();
        world.grid.clear();
        world.generation = 0;
        info!("board reset, {} cells cleared", changed.len());
        self.shared.emit(&world, RedrawCause::Reset, changed);
    }

    /// Flip one cell in any run state. Returns its new state.
    pub fn toggle(&self, coord: Coord) -> Result<bool> {
        let mut world = self.shared.lock();
        let active = world.grid.toggle(coord)?;
        debug!("toggled {coord} -> {}", if active { "alive" } else { "dead" });
        self.shared.emit(&world, RedrawCause::Toggle, vec![coord]);
        Ok(active)
    }

    /// Add a named pattern to the board. Returns the number of cells it brought to life.
    pub fn seed(&self, pattern: &str) -> Result<usize> {
        let mut world = self.shared.lock();
        let activated = PatternLibrary::apply(pattern, &mut world.grid)?;
        let count = activated.len();
        info!("seeded {pattern}, {count} cells activated");
        self.shared.emit(&world, RedrawCause::Seed, activated);
        Ok(count)
    }

    /// Advance one generation immediately, in any run state.
    pub fn step(&self) -> u64 {
        let mut world = self.shared.lock();
        self.shared.advance(&mut world);
        world.generation
    }

    pub fn state(&self) -> RunState {
        self.shared.lock().state
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// Copy of the board as of the last completed tick or edit
    pub fn snapshot(&self) -> Grid {
        self.shared.lock().grid.clone()
    }

    pub fn live_cells(&self) -> Vec<Coord> {
        self.shared.lock().grid.live_cells()
    }

    pub fn population(&self) -> usize {
        self.shared.lock().grid.population()
    }
}

impl Drop for SimulationController {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_ticks(shared: Arc<Shared>, interval: Duration, epoch: u64) {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let mut world = shared.lock();
        if world.state != RunState::Running || world.epoch != epoch {
            trace!("tick task {epoch} retired");
            break;
        }
        shared.advance(&mut world);
    }
}
