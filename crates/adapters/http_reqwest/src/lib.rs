//! # garden-adapter-http-reqwest
//!
//! Native implementation of the [`DeviceApi`](garden_app::ports::DeviceApi)
//! port. Sends `GET /api/status` and `POST /api/control` to the controller
//! with a shared `reqwest` client.
//!
//! ## Dependency rule
//!
//! Depends on `garden-app` (port traits) and `garden-domain` only.

mod client;
pub mod config;
pub mod error;

pub use client::ReqwestDeviceApi;
pub use config::DeviceConfig;
pub use error::HttpError;
