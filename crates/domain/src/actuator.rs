//! Actuators: the two ON/OFF outputs driven by the device.

use serde::{Deserialize, Serialize};

/// Which actuator a button, state or command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActuatorKind {
    Irrigation,
    Light,
}

impl ActuatorKind {
    /// Every actuator, in page order.
    pub const ALL: [Self; 2] = [Self::Irrigation, Self::Light];

    /// Wire and class-name form (`"irrigation"`, `"light"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Irrigation => "irrigation",
            Self::Light => "light",
        }
    }
}

impl std::fmt::Display for ActuatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On/off state of one actuator, as last reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorState {
    pub kind: ActuatorKind,
    pub is_on: bool,
}

impl ActuatorState {
    #[must_use]
    pub fn new(kind: ActuatorKind, is_on: bool) -> Self {
        Self { kind, is_on }
    }

    /// Class list applied to the actuator's button, e.g. `"actuator-btn light on"`.
    #[must_use]
    pub fn class_name(&self) -> String {
        let state = if self.is_on { "on" } else { "off" };
        format!("actuator-btn {} {state}", self.kind)
    }

    /// Button label. The label names the action a click performs, so an
    /// actuator that is on offers to turn it off.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match (self.kind, self.is_on) {
            (ActuatorKind::Irrigation, true) => "TẮT TƯỚI TIÊU",
            (ActuatorKind::Irrigation, false) => "BẬT TƯỚI TIÊU",
            (ActuatorKind::Light, true) => "TẮT ĐÈN VƯỜN",
            (ActuatorKind::Light, false) => "BẬT ĐÈN VƯỜN",
        }
    }
}
