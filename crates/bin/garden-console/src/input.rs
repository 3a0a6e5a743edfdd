//! Input bindings: stdin lines stand in for button clicks.

use garden_app::ports::{Clock, DeviceApi, Element};
use garden_app::services::dashboard_service::DashboardService;
use garden_domain::actuator::ActuatorKind;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Click the button of an actuator.
    Click(ActuatorKind),
    /// Leave the dashboard.
    Quit,
}

impl Input {
    /// Parse one line. Returns `None` for anything unrecognised.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "i" | "irrigation" => Some(Self::Click(ActuatorKind::Irrigation)),
            "l" | "light" => Some(Self::Click(ActuatorKind::Light)),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Read commands from stdin until `quit`.
///
/// Each click is dispatched before the next line is read. When stdin closes
/// the bindings go idle and this future never completes, so the dashboard
/// keeps polling.
pub async fn read_commands<A, E, C>(service: &DashboardService<A, E, C>)
where
    A: DeviceApi,
    E: Element,
    C: Clock,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match Input::parse(&line) {
                Some(Input::Click(kind)) => service.handle_click(kind).await,
                Some(Input::Quit) => return,
                None if line.trim().is_empty() => {}
                None => warn!(input = line.trim(), "unknown command, expected i, l or q"),
            },
            Ok(None) => {
                debug!("stdin closed, input bindings disabled");
                break;
            }
            Err(err) => {
                warn!(error = %err, "failed to read stdin, input bindings disabled");
                break;
            }
        }
    }
    std::future::pending::<()>().await;
}
