//! Signal-backed page elements.

use garden_app::elements::ElementId;
use garden_app::ports::Element;
use garden_domain::actuator::ActuatorKind;
use leptos::prelude::*;

/// A page element whose text and class are reactive signals.
///
/// Writes from the dashboard service show up wherever the signals are read in
/// the view.
#[derive(Debug, Clone, Copy)]
pub struct SignalElement {
    text: RwSignal<String>,
    class: RwSignal<String>,
}

impl SignalElement {
    /// Create an element showing the page's loading placeholders.
    #[must_use]
    pub fn initial(id: ElementId) -> Self {
        let (text, class) = match id {
            ElementId::IrrigationButton => ("…", button_class(ActuatorKind::Irrigation)),
            ElementId::LightButton => ("…", button_class(ActuatorKind::Light)),
            ElementId::ConnectionStatus => ("Đang kết nối…", String::new()),
            ElementId::LogMessage => ("", String::new()),
            _ => ("--", String::new()),
        };
        Self {
            text: RwSignal::new(text.to_string()),
            class: RwSignal::new(class),
        }
    }

    /// Current text, tracked.
    pub fn text(self) -> String {
        self.text.get()
    }

    /// Current class list, tracked.
    pub fn class(self) -> String {
        self.class.get()
    }
}

/// Class of a button before the first poll: neither on nor off.
fn button_class(kind: ActuatorKind) -> String {
    format!("actuator-btn {kind}")
}

impl Element for SignalElement {
    fn set_text(&self, text: &str) {
        self.text.set(text.to_string());
    }

    fn set_class(&self, class: &str) {
        self.class.set(class.to_string());
    }
}
