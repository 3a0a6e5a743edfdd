//! Ticker port: paces the polling task.

use std::future::Future;

/// Resolves once per polling period.
///
/// The first call must wait a full period: the polling task runs its first
/// cycle itself before ticking.
pub trait Ticker {
    fn tick(&mut self) -> impl Future<Output = ()>;
}
