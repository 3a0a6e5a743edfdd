//! Lines written to the page's log area.
//!
//! Every line except the "sending" notice is prefixed with the local clock
//! time in brackets.

use crate::command::ControlCommand;
use crate::error::CommandError;
use crate::time::{Timestamp, clock_time};

/// Shown as soon as a command leaves, before any answer.
#[must_use]
pub fn sending(cmd: &ControlCommand) -> String {
    format!("Đang gửi lệnh: {} {}...", cmd.actuator, cmd.state)
}

/// The device accepted a command. The new state only shows after the next poll.
#[must_use]
pub fn command_succeeded(at: &Timestamp, cmd: &ControlCommand) -> String {
    format!(
        "[{}] Gửi lệnh thành công: {} {}. Chờ STM32 phản hồi trạng thái mới.",
        clock_time(at),
        cmd.actuator,
        cmd.state
    )
}

#[must_use]
pub fn command_failed(at: &Timestamp, err: &CommandError) -> String {
    format!("[{}] Lỗi gửi lệnh: {err}", clock_time(at))
}

#[must_use]
pub fn poll_failed(at: &Timestamp) -> String {
    format!("[{}] Lỗi truy cập API.", clock_time(at))
}
