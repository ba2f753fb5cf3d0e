/// A user intention, decoded from raw input.
pub enum Event {
    Sim(SimEvent),
    App(AppEvent),
}

/// Events that mutate the simulation parameters.
pub enum SimEvent {
    /// Flip between running and paused.
    TogglePause,

    /// Raise the tick rate by one generation per second.
    SpeedUp,

    /// Lower the tick rate by one generation per second.
    SlowDown,
}

/// Events handled by the application shell.
pub enum AppEvent {
    /// Draw a new random color for `target`.
    Recolor(RecolorTarget),

    /// Switch between windowed mode and desktop fullscreen.
    ToggleFullscreen,

    /// Exit the application.
    Exit,
}

#[derive(Clone, Copy, Debug)]
pub enum RecolorTarget {
    Cells,
    Background,
}
