use std::time::Duration;

/// Event poll timeout in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Interval between two steps of a countdown chain
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;

/// Get the event poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Get the countdown step interval
pub fn countdown_interval() -> Duration {
    Duration::from_millis(COUNTDOWN_INTERVAL_MS)
}
