//! HTTP adapter error types.

use garden_domain::error::DeviceError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The `reqwest` client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or its body could not be read.
    #[error("request to device failed")]
    Request(#[source] reqwest::Error),

    /// The body was read but is not the expected JSON.
    #[error("failed to parse device response")]
    Parse(#[source] serde_json::Error),
}

impl HttpError {
    /// Convert into a [`DeviceError`] for propagation across the port
    /// boundary.
    #[must_use]
    pub fn into_domain(self) -> DeviceError {
        match self {
            Self::Parse(err) => DeviceError::Decode(Box::new(err)),
            Self::Build(err) | Self::Request(err) => DeviceError::Transport(Box::new(err)),
        }
    }
}

impl From<HttpError> for DeviceError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
