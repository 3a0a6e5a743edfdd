//! Polling task: runs a cycle immediately, then once per tick, until cancelled.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;

use crate::ports::Ticker;

/// Default period between two status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Cancels the polling task it was created with.
///
/// Dropping the handle cancels the task as well.
#[derive(Debug)]
pub struct PollingHandle {
    shutdown: watch::Sender<bool>,
}

impl PollingHandle {
    /// Stop the task. A cycle in flight is dropped and no new cycle starts.
    pub fn cancel(&self) {
        self.shutdown.send_replace(true);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.shutdown.borrow()
    }
}

/// A periodic task paced by a [`Ticker`].
pub struct PollingTask<T> {
    ticker: T,
    shutdown: watch::Receiver<bool>,
}

/// Create a polling task and the handle that cancels it.
pub fn polling_task<T: Ticker>(ticker: T) -> (PollingTask<T>, PollingHandle) {
    let (tx, rx) = watch::channel(false);
    (
        PollingTask {
            ticker,
            shutdown: rx,
        },
        PollingHandle { shutdown: tx },
    )
}

impl<T: Ticker> PollingTask<T> {
    /// Run `cycle` once right away, then once per tick.
    ///
    /// Cycles of one task never overlap. A cycle still running when the next
    /// tick fires is dropped, `overrun` is called, and the next cycle starts
    /// on schedule. Returns once the handle cancels or is dropped.
    pub async fn run<F, Fut, O>(mut self, mut cycle: F, mut overrun: O)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
        O: FnMut(),
    {
        if self.stopped() {
            return;
        }

        loop {
            let completed = tokio::select! {
                biased;
                () = cycle() => true,
                () = self.ticker.tick() => false,
                _ = self.shutdown.changed() => break,
            };

            if completed {
                tokio::select! {
                    biased;
                    _ = self.shutdown.changed() => break,
                    () = self.ticker.tick() => {}
                }
            } else {
                tracing::warn!("poll cycle still pending at the next tick, abandoning it");
                overrun();
            }

            if self.stopped() {
                break;
            }
        }
        tracing::debug!("polling task stopped");
    }

    /// Cancelled, or the handle is gone.
    fn stopped(&self) -> bool {
        *self.shutdown.borrow() || self.shutdown.has_changed().is_err()
    }
}
