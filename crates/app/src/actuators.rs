//! Actuator state store.
//!
//! Holds the last on/off value the device reported for each actuator. Only
//! successful polls write to it; click handling reads from it to decide which
//! command to send.

use std::sync::atomic::{AtomicBool, Ordering};

use garden_domain::actuator::{ActuatorKind, ActuatorState};

/// Last reported state of every actuator. Both start off.
#[derive(Debug, Default)]
pub struct ActuatorStates {
    irrigation: AtomicBool,
    light: AtomicBool,
}

impl ActuatorStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: ActuatorKind) -> &AtomicBool {
        match kind {
            ActuatorKind::Irrigation => &self.irrigation,
            ActuatorKind::Light => &self.light,
        }
    }

    #[must_use]
    pub fn is_on(&self, kind: ActuatorKind) -> bool {
        self.slot(kind).load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn get(&self, kind: ActuatorKind) -> ActuatorState {
        ActuatorState::new(kind, self.is_on(kind))
    }

    pub fn set(&self, kind: ActuatorKind, is_on: bool) {
        self.slot(kind).store(is_on, Ordering::Relaxed);
    }
}
