//! Connection status: outcome of the most recent status poll.

/// Connectivity indicator shown in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Error,
}

impl ConnectionStatus {
    /// Indicator text.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Connected => "Đã kết nối",
            Self::Error => "Lỗi: Mất kết nối ESP32",
        }
    }

    /// Indicator class.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Connected => "status-ok",
            Self::Error => "status-error",
        }
    }
}
