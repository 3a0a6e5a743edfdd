//! Browser timer ticker.

use std::time::Duration;

use futures_util::StreamExt;
use garden_app::ports::Ticker;
use gloo_timers::future::IntervalStream;

/// Ticks on a fixed `setInterval` schedule, independent of how long each
/// poll cycle takes.
pub struct IntervalTicker {
    ticks: IntervalStream,
}

impl IntervalTicker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Self {
            ticks: IntervalStream::new(millis),
        }
    }
}

impl Ticker for IntervalTicker {
    async fn tick(&mut self) {
        if self.ticks.next().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}
