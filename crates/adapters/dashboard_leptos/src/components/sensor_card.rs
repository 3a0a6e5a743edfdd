//! Sensor card component for displaying one formatted reading.

use leptos::prelude::*;

use crate::element::SignalElement;

/// A card displaying a label and the latest formatted value.
#[component]
pub fn SensorCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// DOM id of the value span.
    id: &'static str,
    /// Element the dashboard service writes the value to.
    element: SignalElement,
) -> impl IntoView {
    view! {
        <div class="sensor-card">
            <span class="sensor-label">{label}</span>
            <span class="sensor-value" id=id>{move || element.text()}</span>
        </div>
    }
}
