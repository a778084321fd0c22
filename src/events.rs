pub enum Event {
    Engine(EngineEvent),
    App(AppEvent),
}

/// Operations on the simulation state.
pub enum EngineEvent {
    /// Start or stop the playback loop.
    ToggleRunning,

    /// Advance a single generation while paused.
    StepOnce,

    /// Back to a stopped, all-dead board.
    Reset,

    SpeedUp,
    SlowDown,

    /// A paint gesture began on the given cell.
    PointerDown { row: usize, col: usize },

    /// The pointer passed over a cell while held down.
    PointerMoved { row: usize, col: usize },

    /// The paint gesture ended.
    PointerUp,
}

pub enum AppEvent {
    /// Exit the application
    Exit,
}
