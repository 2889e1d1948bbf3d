use iced::Settings;

use quill_bridge::app::boot;
use quill_bridge::keyboard::subscription;
use quill_bridge::update::update;
use quill_bridge::util::{init_tracing, install_panic_hook};
use quill_bridge::view_ui::{theme, title, view};

pub fn main() -> iced::Result {
    init_tracing();
    install_panic_hook();

    tracing::info!("=== Quill Starting ===");

    let settings = Settings {
        antialiasing: true,
        ..Settings::default()
    };

    iced::application(boot, update, view)
        .title(title)
        .theme(theme)
        .subscription(subscription)
        .settings(settings)
        .run()
}
