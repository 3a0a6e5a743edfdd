//! Dashboard service: polling, command dispatch and click handling.

use garden_domain::actuator::ActuatorKind;
use garden_domain::command::ControlCommand;
use garden_domain::connection::ConnectionStatus;
use garden_domain::error::CommandError;
use garden_domain::message;
use garden_domain::sensor::SensorReading;
use garden_domain::time::clock_time;

use crate::actuators::ActuatorStates;
use crate::elements::DashboardElements;
use crate::ports::{Clock, DeviceApi, Element, SystemClock};
use crate::services::actuator_renderer::update_actuator_ui;

/// Drives one dashboard page.
///
/// Every operation takes `&self`, so poll cycles and click handlers may run
/// interleaved on the same executor. Failures are rendered to the page log and
/// the diagnostic log; nothing is returned to the caller.
pub struct DashboardService<A, E, C = SystemClock> {
    api: A,
    elements: DashboardElements<E>,
    actuators: ActuatorStates,
    clock: C,
}

impl<A, E> DashboardService<A, E, SystemClock>
where
    A: DeviceApi,
    E: Element,
{
    /// Create a service that timestamps with the system clock.
    pub fn new(api: A, elements: DashboardElements<E>) -> Self {
        Self::with_clock(api, elements, SystemClock)
    }
}

impl<A, E, C> DashboardService<A, E, C>
where
    A: DeviceApi,
    E: Element,
    C: Clock,
{
    /// Create a service with an explicit clock.
    pub fn with_clock(api: A, elements: DashboardElements<E>, clock: C) -> Self {
        Self {
            api,
            elements,
            actuators: ActuatorStates::new(),
            clock,
        }
    }

    /// The page context this service renders into.
    pub fn elements(&self) -> &DashboardElements<E> {
        &self.elements
    }

    /// Actuator states as last reported by the device.
    pub fn actuators(&self) -> &ActuatorStates {
        &self.actuators
    }

    /// Run one poll cycle: fetch the device status and render it.
    ///
    /// On failure the connection indicator switches to the error state and a
    /// timestamped line goes to the log; readings and buttons keep whatever
    /// they showed before.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_sensor_data(&self) {
        match self.api.fetch_status().await {
            Ok(reading) => self.render_reading(&reading),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch device status");
                self.render_poll_failure();
            }
        }
    }

    /// Report a poll cycle that was still waiting on the device when the next
    /// one was due. Rendered like any other failed poll.
    pub fn poll_overran(&self) {
        tracing::error!("device status did not arrive within the polling period");
        self.render_poll_failure();
    }

    fn render_poll_failure(&self) {
        self.render_connection(ConnectionStatus::Error);
        self.elements.log(&message::poll_failed(&self.clock.now()));
    }

    fn render_reading(&self, reading: &SensorReading) {
        let els = &self.elements;
        els.temperature.set_text(&reading.temperature_text());
        els.humidity.set_text(&reading.humidity_text());
        els.light.set_text(&reading.light_text());
        els.soil.set_text(&reading.soil_text());

        for kind in ActuatorKind::ALL {
            let is_on = reading.is_on(kind);
            self.actuators.set(kind, is_on);
            update_actuator_ui(els, kind, is_on);
        }

        self.render_connection(ConnectionStatus::Connected);
        els.last_update.set_text(&clock_time(&self.clock.now()));
        tracing::debug!(
            temperature = reading.temperature_c,
            humidity = reading.humidity_percent,
            "device status rendered"
        );
    }

    fn render_connection(&self, status: ConnectionStatus) {
        let el = &self.elements.connection_status;
        el.set_text(status.text());
        el.set_class(status.class_name());
    }

    /// Ask the device to switch `kind` on or off. One attempt, no retry.
    ///
    /// Only the log is updated. The button keeps its current look until the
    /// next poll reports the device's actual state.
    #[tracing::instrument(skip(self))]
    pub async fn send_control_command(&self, kind: ActuatorKind, target_state: bool) {
        let command = ControlCommand::new(kind, target_state);
        self.elements.log(&message::sending(&command));

        let outcome = match self.api.send_control(command).await {
            Ok(reply) => reply.into_result(),
            Err(err) => Err(CommandError::from(err)),
        };

        let now = self.clock.now();
        match outcome {
            Ok(()) => {
                tracing::info!(actuator = %kind, state = %command.state, "command accepted");
                self.elements.log(&message::command_succeeded(&now, &command));
            }
            Err(err) => {
                tracing::error!(actuator = %kind, error = %err, "command failed");
                self.elements.log(&message::command_failed(&now, &err));
            }
        }
    }

    /// Click on the button of `kind`: request the opposite of the state the
    /// device last reported.
    pub async fn handle_click(&self, kind: ActuatorKind) {
        let is_on = self.actuators.is_on(kind);
        self.send_control_command(kind, !is_on).await;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::future::Future;
    use std::sync::Mutex;

    use chrono::{Local, TimeZone};
    use garden_domain::command::{ControlReply, ControlResponse, TargetState};
    use garden_domain::error::DeviceError;
    use garden_domain::time::Timestamp;
    use tokio::sync::oneshot;

    use super::*;

    #[derive(Default)]
    struct RecordingElement {
        text: Mutex<String>,
        class: Mutex<String>,
    }

    impl RecordingElement {
        fn with_text(text: &str) -> Self {
            Self {
                text: Mutex::new(text.to_string()),
                class: Mutex::default(),
            }
        }

        fn text(&self) -> String {
            self.text.lock().unwrap().clone()
        }

        fn class(&self) -> String {
            self.class.lock().unwrap().clone()
        }
    }

    impl Element for RecordingElement {
        fn set_text(&self, text: &str) {
            *self.text.lock().unwrap() = text.to_string();
        }

        fn set_class(&self, class: &str) {
            *self.class.lock().unwrap() = class.to_string();
        }
    }

    #[derive(Default)]
    struct ScriptedApi {
        statuses: Mutex<VecDeque<Result<SensorReading, DeviceError>>>,
        replies: Mutex<VecDeque<Result<ControlReply, DeviceError>>>,
        sent: Mutex<Vec<ControlCommand>>,
    }

    impl ScriptedApi {
        fn status(self, result: Result<SensorReading, DeviceError>) -> Self {
            self.statuses.lock().unwrap().push_back(result);
            self
        }

        fn reply(self, result: Result<ControlReply, DeviceError>) -> Self {
            self.replies.lock().unwrap().push_back(result);
            self
        }

        fn sent(&self) -> Vec<ControlCommand> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl DeviceApi for ScriptedApi {
        fn fetch_status(&self) -> impl Future<Output = Result<SensorReading, DeviceError>> {
            let next = self
                .statuses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(DeviceError::Transport("no scripted status".into())));
            async { next }
        }

        fn send_control(
            &self,
            command: ControlCommand,
        ) -> impl Future<Output = Result<ControlReply, DeviceError>> {
            self.sent.lock().unwrap().push(command);
            let next = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(DeviceError::Transport("no scripted reply".into())));
            async { next }
        }
    }

    /// Holds the control reply back until the test releases it.
    struct GatedApi {
        gate: Mutex<Option<oneshot::Receiver<ControlReply>>>,
    }

    impl DeviceApi for GatedApi {
        fn fetch_status(&self) -> impl Future<Output = Result<SensorReading, DeviceError>> {
            async { Err(DeviceError::Status { status: 503 }) }
        }

        fn send_control(
            &self,
            _command: ControlCommand,
        ) -> impl Future<Output = Result<ControlReply, DeviceError>> {
            let gate = self.gate.lock().unwrap().take();
            async move {
                let rx = gate.expect("gate consumed twice");
                rx.await.map_err(|err| DeviceError::Transport(Box::new(err)))
            }
        }
    }

    #[derive(Clone, Copy)]
    struct FixedClock(Timestamp);

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            self.0
        }
    }

    fn clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2024, 6, 1, 8, 15, 0).unwrap())
    }

    fn placeholder_elements() -> DashboardElements<RecordingElement> {
        DashboardElements::from_fn(|_| RecordingElement::with_text("--"))
    }

    fn service<A: DeviceApi>(api: A) -> DashboardService<A, RecordingElement, FixedClock> {
        DashboardService::with_clock(api, placeholder_elements(), clock())
    }

    fn reading() -> SensorReading {
        SensorReading {
            temperature_c: 27.26,
            humidity_percent: 64.0,
            light_lux: 15000,
            soil_moisture_percent: 38,
            irrigation_on: true,
            light_on: false,
        }
    }

    fn accepted() -> ControlReply {
        ControlReply {
            status_code: 200,
            body: ControlResponse {
                status: Some("ok".to_string()),
                message: None,
            },
        }
    }

    #[tokio::test]
    async fn should_render_readings_on_successful_poll() {
        let svc = service(ScriptedApi::default().status(Ok(reading())));

        svc.fetch_sensor_data().await;

        let els = svc.elements();
        assert_eq!(els.temperature.text(), "27.3 °C");
        assert_eq!(els.humidity.text(), "64.0 %");
        assert_eq!(els.light.text(), "15000 Lux");
        assert_eq!(els.soil.text(), "38 %");
        assert_eq!(els.connection_status.text(), "Đã kết nối");
        assert_eq!(els.connection_status.class(), "status-ok");
        assert_eq!(els.last_update.text(), "08:15:00");
    }

    #[tokio::test]
    async fn should_render_buttons_and_store_states_from_poll() {
        let svc = service(ScriptedApi::default().status(Ok(reading())));

        svc.fetch_sensor_data().await;

        let els = svc.elements();
        assert_eq!(els.irrigation_button.class(), "actuator-btn irrigation on");
        assert_eq!(els.irrigation_button.text(), "TẮT TƯỚI TIÊU");
        assert_eq!(els.light_button.class(), "actuator-btn light off");
        assert_eq!(els.light_button.text(), "BẬT ĐÈN VƯỜN");
        assert!(svc.actuators().is_on(ActuatorKind::Irrigation));
        assert!(!svc.actuators().is_on(ActuatorKind::Light));
    }

    #[tokio::test]
    async fn should_keep_previous_readings_when_poll_fails() {
        let failures = [
            DeviceError::Transport("connection refused".into()),
            DeviceError::Status { status: 500 },
            DeviceError::Decode("expected value at line 1 column 1".into()),
        ];

        for failure in failures {
            let svc = service(
                ScriptedApi::default()
                    .status(Ok(reading()))
                    .status(Err(failure)),
            );

            svc.fetch_sensor_data().await;
            svc.fetch_sensor_data().await;

            let els = svc.elements();
            assert_eq!(els.connection_status.text(), "Lỗi: Mất kết nối ESP32");
            assert_eq!(els.connection_status.class(), "status-error");
            assert_eq!(els.log_message.text(), "[08:15:00] Lỗi truy cập API.");
            assert_eq!(els.temperature.text(), "27.3 °C");
            assert_eq!(els.humidity.text(), "64.0 %");
            assert_eq!(els.light.text(), "15000 Lux");
            assert_eq!(els.soil.text(), "38 %");
            assert_eq!(els.last_update.text(), "08:15:00");
            assert_eq!(els.irrigation_button.class(), "actuator-btn irrigation on");
            assert!(svc.actuators().is_on(ActuatorKind::Irrigation));
        }
    }

    #[tokio::test]
    async fn should_leave_placeholders_when_first_poll_fails() {
        let api = ScriptedApi::default().status(Err(DeviceError::Status { status: 500 }));
        let svc = service(api);

        svc.fetch_sensor_data().await;

        let els = svc.elements();
        assert_eq!(els.temperature.text(), "--");
        assert_eq!(els.soil.text(), "--");
        assert_eq!(els.last_update.text(), "--");
        assert_eq!(els.connection_status.class(), "status-error");
    }

    #[tokio::test]
    async fn should_recover_on_next_successful_poll() {
        let svc = service(
            ScriptedApi::default()
                .status(Err(DeviceError::Status { status: 500 }))
                .status(Ok(reading())),
        );

        svc.fetch_sensor_data().await;
        svc.fetch_sensor_data().await;

        assert_eq!(svc.elements().connection_status.class(), "status-ok");
        assert_eq!(svc.elements().temperature.text(), "27.3 °C");
    }

    #[tokio::test]
    async fn should_log_success_without_touching_button() {
        let api = ScriptedApi::default().reply(Ok(accepted()));
        let svc = service(api);

        svc.send_control_command(ActuatorKind::Light, true).await;

        let els = svc.elements();
        assert_eq!(
            els.log_message.text(),
            "[08:15:00] Gửi lệnh thành công: light ON. Chờ STM32 phản hồi trạng thái mới."
        );
        assert_eq!(els.light_button.text(), "--");
        assert_eq!(els.light_button.class(), "");
        assert!(!svc.actuators().is_on(ActuatorKind::Light));
    }

    #[tokio::test]
    async fn should_send_one_command_in_wire_shape() {
        let svc = service(ScriptedApi::default().reply(Ok(accepted())));

        svc.send_control_command(ActuatorKind::Irrigation, false).await;

        let sent = svc.api.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].actuator, ActuatorKind::Irrigation);
        assert_eq!(sent[0].state, TargetState::Off);
    }

    #[tokio::test]
    async fn should_log_server_message_when_command_rejected() {
        let reply = ControlReply {
            status_code: 200,
            body: ControlResponse {
                status: Some("fail".to_string()),
                message: Some("busy".to_string()),
            },
        };
        let svc = service(ScriptedApi::default().reply(Ok(reply)));

        svc.send_control_command(ActuatorKind::Irrigation, true).await;

        let log = svc.elements().log_message.text();
        assert!(log.contains("busy"), "log was {log:?}");
        assert_eq!(log, "[08:15:00] Lỗi gửi lệnh: Lỗi server: busy");
    }

    #[tokio::test]
    async fn should_log_placeholder_when_error_reply_has_no_message() {
        let reply = ControlReply {
            status_code: 500,
            body: ControlResponse {
                status: Some("ok".to_string()),
                message: None,
            },
        };
        let svc = service(ScriptedApi::default().reply(Ok(reply)));

        svc.send_control_command(ActuatorKind::Light, false).await;

        assert_eq!(
            svc.elements().log_message.text(),
            "[08:15:00] Lỗi gửi lệnh: Lỗi server: Không rõ"
        );
    }

    #[tokio::test]
    async fn should_log_transport_failure_of_command() {
        let svc = service(
            ScriptedApi::default().reply(Err(DeviceError::Transport("connection reset".into()))),
        );

        svc.send_control_command(ActuatorKind::Light, true).await;

        assert_eq!(
            svc.elements().log_message.text(),
            "[08:15:00] Lỗi gửi lệnh: connection reset"
        );
    }

    #[tokio::test]
    async fn should_announce_command_before_reply_arrives() {
        let (tx, rx) = oneshot::channel();
        let svc = service(GatedApi {
            gate: Mutex::new(Some(rx)),
        });

        let release = async {
            tokio::task::yield_now().await;
            assert_eq!(
                svc.elements().log_message.text(),
                "Đang gửi lệnh: irrigation ON..."
            );
            tx.send(accepted()).unwrap();
        };

        tokio::join!(
            svc.send_control_command(ActuatorKind::Irrigation, true),
            release
        );

        assert!(
            svc.elements()
                .log_message
                .text()
                .contains("Gửi lệnh thành công: irrigation ON")
        );
    }

    #[tokio::test]
    async fn should_request_on_when_clicking_before_first_poll() {
        let svc = service(ScriptedApi::default().reply(Ok(accepted())));

        svc.handle_click(ActuatorKind::Irrigation).await;

        assert_eq!(svc.api.sent()[0].state, TargetState::On);
    }

    #[tokio::test]
    async fn should_invert_state_reported_by_last_poll() {
        let svc = service(
            ScriptedApi::default()
                .status(Ok(reading()))
                .reply(Ok(accepted()))
                .reply(Ok(accepted())),
        );
        svc.fetch_sensor_data().await;

        svc.handle_click(ActuatorKind::Irrigation).await;
        svc.handle_click(ActuatorKind::Light).await;

        let sent = svc.api.sent();
        assert_eq!(
            sent,
            vec![
                ControlCommand::new(ActuatorKind::Irrigation, false),
                ControlCommand::new(ActuatorKind::Light, true),
            ]
        );
    }

    #[tokio::test]
    async fn should_decide_from_state_store_not_button_markup() {
        let svc = service(ScriptedApi::default().reply(Ok(accepted())));
        svc.elements()
            .irrigation_button
            .set_class("actuator-btn irrigation on");

        svc.handle_click(ActuatorKind::Irrigation).await;

        assert_eq!(svc.api.sent()[0].state, TargetState::On);
    }

    #[tokio::test]
    async fn should_not_flip_stored_state_after_accepted_command() {
        let svc = service(
            ScriptedApi::default()
                .reply(Ok(accepted()))
                .reply(Ok(accepted())),
        );

        svc.handle_click(ActuatorKind::Light).await;
        svc.handle_click(ActuatorKind::Light).await;

        let sent = svc.api.sent();
        assert_eq!(sent[0].state, TargetState::On);
        assert_eq!(sent[1].state, TargetState::On);
    }

    #[tokio::test]
    async fn should_render_overrun_poll_as_connection_error() {
        let svc = service(ScriptedApi::default().status(Ok(reading())));
        svc.fetch_sensor_data().await;

        svc.poll_overran();

        let els = svc.elements();
        assert_eq!(els.connection_status.text(), "Lỗi: Mất kết nối ESP32");
        assert_eq!(els.connection_status.class(), "status-error");
        assert_eq!(els.log_message.text(), "[08:15:00] Lỗi truy cập API.");
        assert_eq!(els.temperature.text(), "27.3 °C");
        assert!(svc.actuators().is_on(ActuatorKind::Irrigation));
    }
}
