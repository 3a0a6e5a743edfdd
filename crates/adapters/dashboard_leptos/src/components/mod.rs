mod actuator_button;
mod log_panel;
mod sensor_card;
mod status_bar;

pub use actuator_button::ActuatorButton;
pub use log_panel::LogPanel;
pub use sensor_card::SensorCard;
pub use status_bar::StatusBar;
