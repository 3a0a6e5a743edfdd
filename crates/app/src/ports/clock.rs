//! Clock port.

use garden_domain::time::{self, Timestamp};

/// Source of local wall-clock time for page timestamps.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
