//! # garden-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceApi`: status and control endpoints of the device
//!   - `Element`: one renderable target on the page
//!   - `Clock`: local wall-clock time for timestamps
//!   - `Ticker`: the polling period
//! - Hold the explicit page context (`DashboardElements`) and the actuator
//!   state store that click handling reads from
//! - Provide the **dashboard service**: poll, render, dispatch, handle clicks
//! - Provide the cancellable **polling task**
//!
//! ## Dependency rule
//! Depends on `garden-domain` only (plus `tokio::sync` for cancellation).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! Port futures carry no `Send` bound: the browser front-end runs them on a
//! single-threaded executor with non-`Send` HTTP futures.

pub mod actuators;
pub mod elements;
pub mod polling;
pub mod ports;
pub mod services;
