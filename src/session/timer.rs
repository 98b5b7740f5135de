//! Per-exercise count-up timer.

/// Elapsed time for the active exercise.
///
/// A plain value: every operation returns the next timer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExerciseTimer {
    elapsed_seconds: u64,
    running: bool,
}

impl ExerciseTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Begin timing from zero.
    #[must_use]
    pub const fn start(self) -> Self {
        Self {
            elapsed_seconds: 0,
            running: true,
        }
    }

    /// Stop counting but keep the elapsed time.
    #[must_use]
    pub const fn pause(self) -> Self {
        Self {
            elapsed_seconds: self.elapsed_seconds,
            running: false,
        }
    }

    /// Stop and clear.
    #[must_use]
    pub const fn reset(self) -> Self {
        Self::new()
    }

    /// Count `seconds` whole ticks. No effect while stopped.
    #[must_use]
    pub const fn tick(self, seconds: u64) -> Self {
        if self.running {
            Self {
                elapsed_seconds: self.elapsed_seconds.saturating_add(seconds),
                running: true,
            }
        } else {
            self
        }
    }

    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed time as `m:ss`.
    #[must_use]
    pub fn display(&self) -> String {
        format_time(self.elapsed_seconds)
    }
}

/// Format seconds as `minutes:seconds` with two-digit seconds.
#[must_use]
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
