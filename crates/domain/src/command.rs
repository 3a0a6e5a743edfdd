//! Control commands sent to `POST /api/control` and the device's reply.

use serde::{Deserialize, Serialize};

use crate::actuator::ActuatorKind;
use crate::error::CommandError;

/// Requested actuator state on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetState {
    On,
    Off,
}

impl From<bool> for TargetState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl TargetState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl std::fmt::Display for TargetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a control request. Built per click, sent once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlCommand {
    pub actuator: ActuatorKind,
    pub state: TargetState,
}

impl ControlCommand {
    #[must_use]
    pub fn new(actuator: ActuatorKind, on: bool) -> Self {
        Self {
            actuator,
            state: TargetState::from(on),
        }
    }
}

/// JSON body the device answers a control request with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A parsed control reply together with its HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlReply {
    pub status_code: u16,
    pub body: ControlResponse,
}

impl ControlReply {
    /// A command is accepted only on a 2xx answer whose body says `"ok"`.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.status_code) && self.body.status.as_deref() == Some("ok")
    }

    /// Turn the reply into a command outcome.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Rejected`] carrying the device's `message`
    /// when the reply is not accepted. An empty message counts as none.
    pub fn into_result(self) -> Result<(), CommandError> {
        if self.is_accepted() {
            return Ok(());
        }
        Err(CommandError::Rejected {
            message: self.body.message.filter(|m| !m.is_empty()),
        })
    }
}
