//! Error types shared across the workspace.
//!
//! The dashboard knows two failure kinds: a status poll that could not be
//! completed ([`DeviceError`]) and a control command that did not go through
//! ([`CommandError`]). Adapters convert their client errors into
//! [`DeviceError`] at the port boundary.

use std::error::Error as StdError;

/// Boxed adapter-specific source error.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// A request to the device could not produce a usable answer.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// The request never got a response (connection refused, timeout, …).
    #[error("{0}")]
    Transport(#[source] BoxError),

    /// The device answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// HTTP status code received.
        status: u16,
    },

    /// The response body did not have the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(#[source] BoxError),
}

/// A control command failed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The device answered but did not accept the command.
    #[error(
        "Lỗi server: {}",
        .message.as_deref().filter(|m| !m.is_empty()).unwrap_or("Không rõ")
    )]
    Rejected {
        /// Explanation supplied by the device, if any.
        message: Option<String>,
    },

    /// The request itself failed.
    #[error(transparent)]
    Device(#[from] DeviceError),
}
