mod app;
pub mod icon;
pub mod theme;

pub use app::{load_settings_or_default, native_options, CountdownApp, SharedSnapshot};

use crate::models::settings::Settings;

/// Open the countdown window and block until it is closed
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let options = native_options(&settings);
    let app_name = settings.window_title.clone();

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, &settings)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run countdown window: {}", err))
}
