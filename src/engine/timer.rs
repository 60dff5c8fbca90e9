//! Elapsed-time readout derived from the engine clock.
//!
//! The timer never looks at wall-clock time: it stores the clock value at
//! start and formats `clock - started_at` whenever a consumer asks. If the
//! sink is suspended the clock freezes, and so does the readout - exactly
//! the drift the listener hears.
//!
//! Consumers pull at whatever cadence they like (the TUI polls every frame,
//! a 1 Hz poll gives the classic once-a-second tick); the display is a pure
//! function of the clock either way.

enum TimerState {
    Idle,
    Running { started_at: f64 },
    /// Paused playback keeps its last readout on screen.
    Frozen { display: String },
}

pub struct ElapsedTimer {
    state: TimerState,
}

impl ElapsedTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
        }
    }

    /// Begin counting from `clock`. A restart always counts from zero;
    /// there is no resumption of a prior elapsed count.
    pub fn start(&mut self, clock: f64) {
        self.state = TimerState::Running { started_at: clock };
    }

    /// Freeze the readout at its current value.
    pub fn pause(&mut self, clock: f64) {
        if let TimerState::Running { .. } = self.state {
            let display = self.display(clock);
            self.state = TimerState::Frozen { display };
        }
    }

    /// Cancel and reset the readout to 00:00.
    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
    }

    pub fn display(&self, clock: f64) -> String {
        match &self.state {
            TimerState::Idle => format_mmss(0.0),
            TimerState::Running { started_at } => format_mmss(clock - started_at),
            TimerState::Frozen { display } => display.clone(),
        }
    }
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-padded MM:SS; minutes roll past 99 without special-casing.
fn format_mmss(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
