pub enum Event {
    Sim(SimEvent),
    App(AppEvent),
}

pub enum SimEvent {
    /// Advance the field by one generation
    Step,

    /// Start or stop the clock
    TogglePlay,

    /// Halve the step interval
    Faster,

    /// Double the step interval
    Slower,

    /// Flip one cell between alive and dead
    ToggleCell { x: usize, y: usize },
}

pub enum AppEvent {
    /// Exit the application
    Exit,
}
