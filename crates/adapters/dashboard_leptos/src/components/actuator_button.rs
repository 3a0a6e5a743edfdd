//! Toggle button for one actuator.

use garden_domain::actuator::ActuatorKind;
use leptos::prelude::*;

use crate::element::SignalElement;

/// A button whose class and label follow the last polled actuator state.
///
/// Clicking it does not change its look; the next poll does.
#[component]
pub fn ActuatorButton(
    kind: ActuatorKind,
    id: &'static str,
    element: SignalElement,
    /// Invoked with `kind` on click.
    on_toggle: Callback<ActuatorKind>,
) -> impl IntoView {
    view! {
        <button id=id class=move || element.class() on:click=move |_| on_toggle.run(kind)>
            <span class="btn-text">{move || element.text()}</span>
        </button>
    }
}
