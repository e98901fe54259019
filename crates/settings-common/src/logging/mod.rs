use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Logging configuration supplied by the host application.
///
/// Installing an actual backend is the host's concern; this only controls the
/// facade threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub level: LevelFilter,
}

impl Configuration {
    pub fn apply(&self) {
        log::set_max_level(self.level);
    }
}

/// Guard that overrides the process-wide log threshold and restores the
/// previous one when dropped, regardless of how the scope exits.
///
/// The threshold is process-global state, so guards held on different threads
/// step on each other. Single-threaded use only.
pub struct ScopedLevel {
    previous: LevelFilter,
}

impl ScopedLevel {
    pub fn new(level: LevelFilter) -> Self {
        let previous = log::max_level();
        log::set_max_level(level);

        Self { previous }
    }
}

impl Drop for ScopedLevel {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Temporarily changes the log threshold for the lifetime of the guard.
pub fn scoped_level(level: LevelFilter) -> ScopedLevel {
    ScopedLevel::new(level)
}

/// Temporarily disables all logging.
pub fn silenced() -> ScopedLevel {
    ScopedLevel::new(LevelFilter::Off)
}
