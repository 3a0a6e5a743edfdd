//! # garden-console
//!
//! Composition root that wires the HTTP adapter into the dashboard service and
//! renders the page on the console.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the device client (adapter) and the console page elements
//! - Run the polling task and the stdin input bindings side by side
//! - Cancel polling on `quit` or SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no dashboard logic belongs here.

mod config;
mod console;
mod input;
mod ticker;

use garden_adapter_http_reqwest::ReqwestDeviceApi;
use garden_app::elements::DashboardElements;
use garden_app::polling::polling_task;
use garden_app::services::dashboard_service::DashboardService;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::console::ConsoleElement;
use crate::ticker::IntervalTicker;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        device = %config.device.base_url,
        interval_ms = config.polling.interval_ms,
        "starting garden console (commands: i = irrigation, l = light, q = quit)"
    );

    let api = ReqwestDeviceApi::new(&config.device)?;
    let service = DashboardService::new(api, DashboardElements::from_fn(ConsoleElement::new));

    let (task, handle) = polling_task(IntervalTicker::new(config.poll_interval()));
    let polling = task.run(|| service.fetch_sensor_data(), || service.poll_overran());
    let controls = input::read_commands(&service);

    tokio::select! {
        () = polling => {}
        () = controls => info!("quit requested, shutting down"),
        _ = tokio::signal::ctrl_c() => info!("received SIGINT, shutting down"),
    }

    handle.cancel();
    info!("garden console stopped");
    Ok(())
}
