//! Connection indicator and last-update time.

use leptos::prelude::*;

use crate::element::SignalElement;

#[component]
pub fn StatusBar(connection: SignalElement, last_update: SignalElement) -> impl IntoView {
    view! {
        <div class="status-bar">
            <span id="conn-status" class=move || connection.class()>
                {move || connection.text()}
            </span>
            <span>
                "Cập nhật lúc: "
                <span id="last-update" class=move || last_update.class()>
                    {move || last_update.text()}
                </span>
            </span>
        </div>
    }
}
