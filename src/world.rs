use std::time::Duration;

use tracing::debug;

use crate::events::EngineEvent;
use crate::grid::Grid;

/// Slowest supported tick interval, in milliseconds.
pub const MAX_INTERVAL_MS: u64 = 1000;

/// Fastest supported tick interval, in milliseconds.
pub const MIN_INTERVAL_MS: u64 = 100;

/// Tick interval a new world starts with, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 550;

/// Step size of the speed keys, in milliseconds.
const INTERVAL_STEP_MS: u64 = 150;

/// All mutable simulation state: the current generation snapshot plus the
/// playback and painting flags the UI drives.
///
/// The driver loop owns nothing; it reads the run flag fresh on every pass
/// and calls [`World::tick`] when the interval has elapsed. Stopping is
/// nothing more than the flag being clear at the next check.
pub struct World {
    grid: Grid,
    running: bool,
    interval: Duration,
    generation: u64,

    /// Armed while a press-and-hold paint gesture is active.
    pressed: bool,

    /// Last cell painted during the current gesture. Pointer move events
    /// repeat within one cell; only a newly entered cell paints.
    last_painted: Option<(usize, usize)>,
}

impl World {
    /// Create a stopped world over an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            running: false,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            generation: 0,
            pressed: false,
            last_painted: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance one generation.
    ///
    /// The old snapshot is replaced only once the new one is fully
    /// computed, so no reader ever observes a half-stepped board.
    pub fn tick(&mut self) {
        self.grid = self.grid.step();
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "tick"
        );
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Set the tick interval, clamped to the supported speed range.
    pub fn set_interval_ms(&mut self, ms: u64) {
        let ms = ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        self.interval = Duration::from_millis(ms);
    }

    pub fn speed_up(&mut self) {
        let ms = self.interval.as_millis() as u64;
        self.set_interval_ms(ms.saturating_sub(INTERVAL_STEP_MS));
    }

    pub fn slow_down(&mut self) {
        let ms = self.interval.as_millis() as u64;
        self.set_interval_ms(ms + INTERVAL_STEP_MS);
    }

    /// Stop the simulation and start over from an all-dead board of the
    /// same dimensions.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.grid.rows(), self.grid.cols());
        self.running = false;
        self.generation = 0;
        self.pressed = false;
        self.last_painted = None;

        debug!("reset");
    }

    /// Flip a single cell by coordinate.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
    }

    /// Begin a paint gesture: toggle the pressed cell and arm drag painting.
    pub fn pointer_down(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
        self.pressed = true;
        self.last_painted = Some((row, col));
    }

    /// Paint cells as the pointer passes over them while held down.
    pub fn pointer_moved(&mut self, row: usize, col: usize) {
        if !self.pressed || self.last_painted == Some((row, col)) {
            return;
        }

        self.grid.toggle(row, col);
        self.last_painted = Some((row, col));
    }

    /// End the paint gesture.
    pub fn pointer_up(&mut self) {
        self.pressed = false;
        self.last_painted = None;
    }

    pub fn handle(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::ToggleRunning => self.toggle_running(),
            EngineEvent::StepOnce => self.tick(),
            EngineEvent::Reset => self.reset(),
            EngineEvent::SpeedUp => self.speed_up(),
            EngineEvent::SlowDown => self.slow_down(),
            EngineEvent::PointerDown { row, col } => self.pointer_down(row, col),
            EngineEvent::PointerMoved { row, col } => self.pointer_moved(row, col),
            EngineEvent::PointerUp => self.pointer_up(),
        }
    }
}
