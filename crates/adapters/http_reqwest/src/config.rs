//! Device connection configuration.

use garden_app::ports::device_api::{CONTROL_PATH, STATUS_PATH};
use serde::Deserialize;

/// Where the controller lives and how long a single request may take.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Origin of the controller, e.g. `http://192.168.4.1`.
    pub base_url: String,
    /// Upper bound for one request, in seconds.
    pub timeout_secs: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.4.1".to_string(),
            timeout_secs: 10,
        }
    }
}

impl DeviceConfig {
    /// Full URL of the status endpoint.
    #[must_use]
    pub fn status_url(&self) -> String {
        self.endpoint(STATUS_PATH)
    }

    /// Full URL of the control endpoint.
    #[must_use]
    pub fn control_url(&self) -> String {
        self.endpoint(CONTROL_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}
