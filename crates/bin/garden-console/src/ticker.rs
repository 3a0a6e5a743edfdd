//! Tokio-backed polling ticker.

use std::time::Duration;

use garden_app::ports::Ticker;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Ticks every `period`, starting one period from now.
///
/// A tick that is missed because a cycle ran long fires as soon as possible,
/// and the schedule shifts instead of bursting to catch up.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl Ticker for IntervalTicker {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
