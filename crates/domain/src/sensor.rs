//! Sensor reading: the device status returned by `GET /api/status`.

use serde::{Deserialize, Serialize};

use crate::actuator::ActuatorKind;

/// One snapshot of the device's sensors and actuator flags.
///
/// Produced by the device on every poll and discarded once rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Air temperature in degrees Celsius.
    #[serde(rename = "temperature_C")]
    pub temperature_c: f64,
    /// Relative humidity in percent.
    pub humidity_percent: f64,
    /// Ambient light in lux.
    pub light_lux: i64,
    /// Soil moisture in percent.
    pub soil_moisture_percent: i64,
    /// Whether the irrigation valve is open.
    pub irrigation_on: bool,
    /// Whether the garden light is on.
    pub light_on: bool,
}

impl SensorReading {
    /// Temperature as shown on the page, e.g. `"24.5 °C"`.
    #[must_use]
    pub fn temperature_text(&self) -> String {
        format!("{:.1} °C", self.temperature_c)
    }

    /// Humidity as shown on the page, e.g. `"61.0 %"`.
    #[must_use]
    pub fn humidity_text(&self) -> String {
        format!("{:.1} %", self.humidity_percent)
    }

    /// Light level as shown on the page, e.g. `"830 Lux"`.
    #[must_use]
    pub fn light_text(&self) -> String {
        format!("{} Lux", self.light_lux)
    }

    /// Soil moisture as shown on the page, e.g. `"42 %"`.
    #[must_use]
    pub fn soil_text(&self) -> String {
        format!("{} %", self.soil_moisture_percent)
    }

    /// Authoritative on/off flag reported for the given actuator.
    #[must_use]
    pub fn is_on(&self, kind: ActuatorKind) -> bool {
        match kind {
            ActuatorKind::Irrigation => self.irrigation_on,
            ActuatorKind::Light => self.light_on,
        }
    }
}
