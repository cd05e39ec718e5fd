use super::state::SharedSnapshot;
use super::CountdownApp;
use crate::models::settings::{Settings, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::services::countdown::{compute_now, RefreshScheduler, SchedulerError};
use crate::services::settings::SettingsService;
use crate::ui_egui::icon::app_icon;
use crate::ui_egui::theme::CountdownTheme;
use std::time::Duration;

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        let active_theme = CountdownTheme::from_preference(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        let snapshot = SharedSnapshot::default();
        let mut scheduler = RefreshScheduler::new();

        if let Err(err) = start_refresh(
            &mut scheduler,
            settings.refresh_interval(),
            snapshot.clone(),
            cc.egui_ctx.clone(),
        ) {
            log::error!("Countdown refresh disabled: {}", err);
            snapshot.store(compute_now());
        }

        Self {
            active_theme,
            snapshot,
            scheduler,
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.scheduler.stop();
        log::info!("Countdown window closed");
    }
}

/// Start `scheduler` so every snapshot lands in `snapshot` and wakes the UI.
///
/// The callback runs on the refresh thread; the repaint request is what
/// moves the new value onto the UI thread.
pub(super) fn start_refresh(
    scheduler: &mut RefreshScheduler,
    interval: Duration,
    snapshot: SharedSnapshot,
    ctx: egui::Context,
) -> Result<(), SchedulerError> {
    scheduler.start(interval, move |next| {
        snapshot.store(next);
        ctx.request_repaint();
    })
}

/// Load settings from the config directory, falling back to defaults
pub fn load_settings_or_default() -> Settings {
    let loaded = SettingsService::from_default_location().and_then(|service| {
        log::debug!("Reading settings from {}", service.path().display());
        service.load()
    });

    match loaded {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Failed to load settings, using defaults: {}", err);
            Settings::default()
        }
    }
}

/// Window options built from settings
pub fn native_options(settings: &Settings) -> eframe::NativeOptions {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(settings.window_title.clone())
        .with_inner_size([settings.window_width, settings.window_height])
        .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]);

    if settings.always_on_top {
        viewport = viewport.with_always_on_top();
    }

    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    }
}
