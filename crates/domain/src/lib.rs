//! # garden-domain
//!
//! Pure domain model for the garden controller dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, wall-clock timestamps
//! - Define **Sensor readings** reported by the device on every poll
//! - Define **Actuators** (irrigation valve, garden light) and their on/off state
//! - Define **Control commands** and the device's reply to them
//! - Define the **Connection status** shown on the page
//! - Own every user-visible text: formatted readings, button labels, log lines
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod actuator;
pub mod command;
pub mod connection;
pub mod message;
pub mod sensor;
