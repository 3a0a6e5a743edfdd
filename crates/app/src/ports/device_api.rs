//! Device port: the two HTTP endpoints exposed by the controller.

use std::future::Future;
use std::sync::Arc;

use garden_domain::command::{ControlCommand, ControlReply};
use garden_domain::error::DeviceError;
use garden_domain::sensor::SensorReading;

/// Path of the status endpoint, relative to the device origin.
pub const STATUS_PATH: &str = "/api/status";

/// Path of the control endpoint, relative to the device origin.
pub const CONTROL_PATH: &str = "/api/control";

/// Client for the device's HTTP API.
pub trait DeviceApi {
    /// `GET /api/status`.
    ///
    /// Implementations must return [`DeviceError::Status`] for non-2xx
    /// answers and [`DeviceError::Decode`] when the body is not a
    /// [`SensorReading`].
    fn fetch_status(&self) -> impl Future<Output = Result<SensorReading, DeviceError>>;

    /// `POST /api/control` with a JSON body.
    ///
    /// Any answer whose body parses is returned as a [`ControlReply`],
    /// whatever its status code; judging acceptance is up to the caller.
    fn send_control(
        &self,
        command: ControlCommand,
    ) -> impl Future<Output = Result<ControlReply, DeviceError>>;
}

impl<T: DeviceApi> DeviceApi for Arc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<SensorReading, DeviceError>> {
        (**self).fetch_status()
    }

    fn send_control(
        &self,
        command: ControlCommand,
    ) -> impl Future<Output = Result<ControlReply, DeviceError>> {
        (**self).send_control(command)
    }
}
