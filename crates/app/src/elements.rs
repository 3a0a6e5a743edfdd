//! The page context: every element the dashboard renders into.
//!
//! Operations receive this context explicitly instead of looking elements up
//! in ambient global state.

use garden_domain::actuator::ActuatorKind;

use crate::ports::Element;

/// Identifies a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Temperature,
    Humidity,
    Light,
    Soil,
    IrrigationButton,
    LightButton,
    ConnectionStatus,
    LastUpdate,
    LogMessage,
}

impl ElementId {
    /// Every element, in page order.
    pub const ALL: [Self; 9] = [
        Self::Temperature,
        Self::Humidity,
        Self::Light,
        Self::Soil,
        Self::IrrigationButton,
        Self::LightButton,
        Self::ConnectionStatus,
        Self::LastUpdate,
        Self::LogMessage,
    ];

    /// DOM id of the element on the page.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Temperature => "temp-value",
            Self::Humidity => "humid-value",
            Self::Light => "light-value",
            Self::Soil => "soil-value",
            Self::IrrigationButton => "irrigation-btn",
            Self::LightButton => "light-btn",
            Self::ConnectionStatus => "conn-status",
            Self::LastUpdate => "last-update",
            Self::LogMessage => "log-message",
        }
    }

    /// Button element of an actuator.
    #[must_use]
    pub fn button(kind: ActuatorKind) -> Self {
        match kind {
            ActuatorKind::Irrigation => Self::IrrigationButton,
            ActuatorKind::Light => Self::LightButton,
        }
    }
}

/// References to all renderable targets of the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardElements<E> {
    pub temperature: E,
    pub humidity: E,
    pub light: E,
    pub soil: E,
    pub irrigation_button: E,
    pub light_button: E,
    pub connection_status: E,
    pub last_update: E,
    pub log_message: E,
}

impl<E> DashboardElements<E> {
    /// Build the context by creating each element from its id.
    pub fn from_fn(mut make: impl FnMut(ElementId) -> E) -> Self {
        Self {
            temperature: make(ElementId::Temperature),
            humidity: make(ElementId::Humidity),
            light: make(ElementId::Light),
            soil: make(ElementId::Soil),
            irrigation_button: make(ElementId::IrrigationButton),
            light_button: make(ElementId::LightButton),
            connection_status: make(ElementId::ConnectionStatus),
            last_update: make(ElementId::LastUpdate),
            log_message: make(ElementId::LogMessage),
        }
    }

    /// Look up an element by id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> &E {
        match id {
            ElementId::Temperature => &self.temperature,
            ElementId::Humidity => &self.humidity,
            ElementId::Light => &self.light,
            ElementId::Soil => &self.soil,
            ElementId::IrrigationButton => &self.irrigation_button,
            ElementId::LightButton => &self.light_button,
            ElementId::ConnectionStatus => &self.connection_status,
            ElementId::LastUpdate => &self.last_update,
            ElementId::LogMessage => &self.log_message,
        }
    }

    /// Button of the given actuator.
    #[must_use]
    pub fn button(&self, kind: ActuatorKind) -> &E {
        self.get(ElementId::button(kind))
    }
}

impl<E: Element> DashboardElements<E> {
    /// Write a log line to the page log area.
    pub fn log(&self, line: &str) {
        self.log_message.set_text(line);
    }
}
