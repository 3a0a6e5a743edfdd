//! `reqwest`-backed device client.

use std::time::Duration;

use garden_app::ports::DeviceApi;
use garden_domain::command::{ControlCommand, ControlReply, ControlResponse};
use garden_domain::error::DeviceError;
use garden_domain::sensor::SensorReading;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::DeviceConfig;
use crate::error::HttpError;

/// [`DeviceApi`] over HTTP.
///
/// The underlying client pools connections, so one instance should serve the
/// whole dashboard.
#[derive(Debug, Clone)]
pub struct ReqwestDeviceApi {
    client: reqwest::Client,
    status_url: String,
    control_url: String,
}

impl ReqwestDeviceApi {
    /// Build a client for the device described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if the TLS backend or resolver cannot be
    /// initialised.
    pub fn new(config: &DeviceConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(HttpError::Build)?;

        Ok(Self {
            client,
            status_url: config.status_url(),
            control_url: config.control_url(),
        })
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, HttpError> {
        let body = resp.bytes().await.map_err(HttpError::Request)?;
        serde_json::from_slice(&body).map_err(HttpError::Parse)
    }
}

impl DeviceApi for ReqwestDeviceApi {
    async fn fetch_status(&self) -> Result<SensorReading, DeviceError> {
        let resp = self
            .client
            .get(&self.status_url)
            .send()
            .await
            .map_err(HttpError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DeviceError::Status {
                status: status.as_u16(),
            });
        }

        let reading = Self::read_json(resp).await?;
        Ok(reading)
    }

    async fn send_control(&self, command: ControlCommand) -> Result<ControlReply, DeviceError> {
        debug!(actuator = %command.actuator, state = %command.state, "posting control command");
        let resp = self
            .client
            .post(&self.control_url)
            .json(&command)
            .send()
            .await
            .map_err(HttpError::Request)?;

        let status_code = resp.status().as_u16();
        let body: ControlResponse = Self::read_json(resp).await?;
        Ok(ControlReply { status_code, body })
    }
}
