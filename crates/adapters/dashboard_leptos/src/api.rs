//! HTTP API client wrapping `gloo-net` for calls to the controller's `/api/*`.
//!
//! The page is served by the controller itself, so both endpoints are
//! same-origin relative paths. `fetch` has no timeout of its own, so every
//! request is bounded by [`REQUEST_TIMEOUT_MS`].

use std::future::Future;
use std::pin::pin;

use futures_util::future::{Either, select};
use garden_app::ports::DeviceApi;
use garden_app::ports::device_api::{CONTROL_PATH, STATUS_PATH};
use garden_domain::command::{ControlCommand, ControlReply, ControlResponse};
use garden_domain::error::DeviceError;
use garden_domain::sensor::SensorReading;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde_json::de::from_str;

/// Upper bound for one request, matching the native client's default.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, thiserror::Error)]
#[error("request timed out after {0} ms")]
struct TimedOut(u32);

fn transport(err: gloo_net::Error) -> DeviceError {
    DeviceError::Transport(Box::new(err))
}

/// Read the body as text and decode it, keeping decode failures apart from
/// transport failures.
async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, DeviceError> {
    let body = resp.text().await.map_err(transport)?;
    from_str(&body).map_err(|err| DeviceError::Decode(Box::new(err)))
}

/// Fail with a transport error when `request` outlives the timeout.
async fn bounded<T>(
    request: impl Future<Output = Result<T, DeviceError>>,
) -> Result<T, DeviceError> {
    let request = pin!(request);
    let timeout = pin!(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(DeviceError::Transport(Box::new(TimedOut(
            REQUEST_TIMEOUT_MS,
        )))),
    }
}

/// [`DeviceApi`] backed by the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDeviceApi;

impl DeviceApi for GlooDeviceApi {
    async fn fetch_status(&self) -> Result<SensorReading, DeviceError> {
        bounded(async {
            let resp = Request::get(STATUS_PATH).send().await.map_err(transport)?;
            if !resp.ok() {
                return Err(DeviceError::Status {
                    status: resp.status(),
                });
            }
            read_json(resp).await
        })
        .await
    }

    async fn send_control(&self, command: ControlCommand) -> Result<ControlReply, DeviceError> {
        bounded(async {
            let resp = Request::post(CONTROL_PATH)
                .json(&command)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let status_code = resp.status();
            let body: ControlResponse = read_json(resp).await?;
            Ok(ControlReply { status_code, body })
        })
        .await
    }
}
