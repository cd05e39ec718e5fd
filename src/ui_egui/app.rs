mod cards;
mod lifecycle;
mod state;

pub use self::lifecycle::{load_settings_or_default, native_options};
pub use self::state::SharedSnapshot;

use crate::services::countdown::RefreshScheduler;
use crate::ui_egui::theme::CountdownTheme;

pub struct CountdownApp {
    /// Currently applied theme colors
    active_theme: CountdownTheme,
    /// Most recent countdown, updated from the refresh thread
    snapshot: SharedSnapshot,
    /// Owns the refresh timer for the lifetime of the window
    scheduler: RefreshScheduler,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.snapshot.load();
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(self.active_theme.app_background))
            .show(ctx, |ui| {
                cards::render_cards(ui, &self.active_theme, &snapshot);
            });
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
