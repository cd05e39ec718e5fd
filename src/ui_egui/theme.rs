//! Theme module for the countdown window
//!
//! Defines the CountdownTheme structure, the built-in presets and how a
//! theme is applied to an egui context.

use crate::models::settings::ThemePreference;
use egui::Color32;

/// Colors used by the window and its cards
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background color
    pub app_background: Color32,

    /// Button and interactive widget fill
    pub button: Color32,

    /// Primary text color outside the cards
    pub text_primary: Color32,

    /// Accent used for selections and links
    pub accent: Color32,

    /// Card background color
    pub card_background: Color32,

    /// Card title and value color
    pub card_text: Color32,
}

impl CountdownTheme {
    /// Dark navy theme used by default
    pub fn navy() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(15, 15, 40),
            button: Color32::from_rgb(0, 0, 128),
            text_primary: Color32::from_rgb(220, 220, 255),
            accent: Color32::from_rgb(100, 149, 237),
            card_background: Color32::from_rgb(220, 220, 255),
            card_text: Color32::from_rgb(15, 15, 40),
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            button: Color32::from_rgb(230, 240, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
            accent: Color32::from_rgb(100, 150, 255),
            card_background: Color32::from_rgb(255, 255, 255),
            card_text: Color32::from_rgb(40, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            button: Color32::from_rgb(50, 60, 80),
            text_primary: Color32::from_rgb(240, 240, 240),
            accent: Color32::from_rgb(100, 150, 255),
            card_background: Color32::from_rgb(50, 50, 55),
            card_text: Color32::from_rgb(240, 240, 240),
        }
    }

    /// Resolve a settings preference to a concrete theme.
    ///
    /// `System` asks the OS for its light/dark mode and falls back to navy when
    /// the OS does not report one.
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Navy => Self::navy(),
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light => Self::light(),
                dark_light::Mode::Default => {
                    log::debug!("System theme not reported; using navy");
                    Self::navy()
                }
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.inactive.bg_fill = self.button;
        visuals.widgets.inactive.weak_bg_fill = self.button;
        visuals.widgets.hovered.bg_fill = self.accent;
        visuals.widgets.active.bg_fill = self.accent;
        visuals.selection.bg_fill = self.accent;
        visuals.hyperlink_color = self.accent;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
