//! Application services: use-case implementations.
//!
//! Services accept port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod actuator_renderer;
pub mod dashboard_service;
