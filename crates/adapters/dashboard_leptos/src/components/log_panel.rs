use leptos::prelude::*;

use crate::element::SignalElement;

/// Single-line log showing the most recent message.
#[component]
pub fn LogPanel(element: SignalElement) -> impl IntoView {
    view! {
        <div class="log-panel" id="log-message">{move || element.text()}</div>
    }
}
