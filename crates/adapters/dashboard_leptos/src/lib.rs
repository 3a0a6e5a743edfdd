use std::rc::Rc;

use garden_app::elements::{DashboardElements, ElementId};
use garden_app::polling::{DEFAULT_POLL_INTERVAL, polling_task};
use garden_app::services::dashboard_service::DashboardService;
use garden_domain::actuator::ActuatorKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub mod api;
mod components;
pub mod element;
pub mod ticker;

use api::GlooDeviceApi;
use components::{ActuatorButton, LogPanel, SensorCard, StatusBar};
use element::SignalElement;
use ticker::IntervalTicker;

type Dashboard = DashboardService<GlooDeviceApi, SignalElement>;

/// Root application component.
///
/// Starts polling the controller on mount and stops when the component is
/// cleaned up.
#[component]
pub fn App() -> impl IntoView {
    let els = DashboardElements::from_fn(SignalElement::initial);
    let service = Rc::new(Dashboard::new(GlooDeviceApi, els.clone()));

    let (task, handle) = polling_task(IntervalTicker::new(DEFAULT_POLL_INTERVAL));
    let poller = Rc::clone(&service);
    spawn_local(async move {
        task.run(|| poller.fetch_sensor_data(), || poller.poll_overran()).await;
    });
    on_cleanup(move || handle.cancel());

    let service = StoredValue::new_local(service);
    let on_toggle = Callback::new(move |kind: ActuatorKind| {
        let service = service.get_value();
        spawn_local(async move {
            service.handle_click(kind).await;
        });
    });

    view! {
        <div class="dashboard">
            <h1>"Vườn thông minh"</h1>
            <StatusBar connection=els.connection_status last_update=els.last_update/>
            <section class="sensors">
                <SensorCard label="Nhiệt độ" id=ElementId::Temperature.dom_id() element=els.temperature/>
                <SensorCard label="Độ ẩm không khí" id=ElementId::Humidity.dom_id() element=els.humidity/>
                <SensorCard label="Ánh sáng" id=ElementId::Light.dom_id() element=els.light/>
                <SensorCard label="Độ ẩm đất" id=ElementId::Soil.dom_id() element=els.soil/>
            </section>
            <section class="actuators">
                <ActuatorButton
                    kind=ActuatorKind::Irrigation
                    id=ElementId::IrrigationButton.dom_id()
                    element=els.irrigation_button
                    on_toggle=on_toggle
                />
                <ActuatorButton
                    kind=ActuatorKind::Light
                    id=ElementId::LightButton.dom_id()
                    element=els.light_button
                    on_toggle=on_toggle
                />
            </section>
            <LogPanel element=els.log_message/>
        </div>
    }
}
