// src/utils/app_time.rs

pub type AppInstant = std::time::Instant;

pub fn now() -> AppInstant {
    std::time::Instant::now()
}

/// Source of "now" for anything that ages data (the refresh cache, the timer).
/// Injected so tests can move time forward without sleeping.
pub trait Clock {
    fn now(&self) -> AppInstant;
}

/// Wall clock used by the running app.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> AppInstant {
        now()
    }
}
