//! Actuator renderer: maps an actuator state onto its button.

use garden_domain::actuator::{ActuatorKind, ActuatorState};

use crate::elements::DashboardElements;
use crate::ports::Element;

/// Set the button class and label of `kind` for the given state.
///
/// The result depends only on `(kind, is_on)`; whatever the button showed
/// before is overwritten.
pub fn update_actuator_ui<E: Element>(
    elements: &DashboardElements<E>,
    kind: ActuatorKind,
    is_on: bool,
) {
    let state = ActuatorState::new(kind, is_on);
    let button = elements.button(kind);
    button.set_class(&state.class_name());
    button.set_text(state.label());
}
