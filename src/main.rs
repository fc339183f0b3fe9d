use iced::Application;
use fwa_detect::client::config::{ClientConfig, GUI_LOG_LEVEL};
use fwa_detect::client::gui::app::FwaApp;

fn main() -> iced::Result {
    let config = ClientConfig::from_env(GUI_LOG_LEVEL);
    fwa_detect::utils::logger::init(&config.log_level);
    config.log_summary();
    FwaApp::run(iced::Settings::with_flags(config))
}
