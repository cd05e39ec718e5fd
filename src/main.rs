// Year Countdown Application
// Main entry point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use year_countdown::ui_egui;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Year Countdown");

    let settings = ui_egui::load_settings_or_default();
    log::info!(
        "Loaded settings: theme={:?}, refresh_interval={}s",
        settings.theme,
        settings.refresh_interval_secs
    );

    ui_egui::run(settings)
}
