//! Rendering of the four countdown cards.

use crate::models::countdown::{CountdownSnapshot, CountdownUnit};
use crate::ui_egui::theme::CountdownTheme;

// Card rendering constants
const CARD_ROUNDING: f32 = 5.0;
const CARD_MIN_SIZE: f32 = 80.0;
const CARD_SPACING: f32 = 6.0;
const CARD_INNER_MARGIN: f32 = 4.0;
const TITLE_FONT_SIZE: f32 = 12.0;
const VALUE_FONT_SIZE: f32 = 32.0;

/// Width of one card when `count` cards share `available_width`
pub fn card_width(available_width: f32, count: usize) -> f32 {
    if count == 0 {
        return CARD_MIN_SIZE;
    }
    let gaps = CARD_SPACING * count.saturating_sub(1) as f32;
    ((available_width - gaps) / count as f32).max(CARD_MIN_SIZE)
}

/// Lay the cards out in a single centered row
pub fn render_cards(ui: &mut egui::Ui, theme: &CountdownTheme, snapshot: &CountdownSnapshot) {
    let units = CountdownUnit::ALL;
    let width = card_width(ui.available_width(), units.len());
    let row_width = width * units.len() as f32 + CARD_SPACING * (units.len() - 1) as f32;

    let top_space = ((ui.available_height() - CARD_MIN_SIZE) / 2.0).max(0.0);
    ui.add_space(top_space);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = CARD_SPACING;
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
        for unit in units {
            render_card(ui, theme, unit.label(), snapshot.value(unit), width);
        }
    });
}

fn render_card(ui: &mut egui::Ui, theme: &CountdownTheme, title: &str, value: i64, width: f32) {
    let inner_width = (width - CARD_INNER_MARGIN * 2.0).max(0.0);
    let inner_height = CARD_MIN_SIZE - CARD_INNER_MARGIN * 2.0;

    egui::Frame::none()
        .fill(theme.card_background)
        .rounding(egui::Rounding::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(CARD_INNER_MARGIN))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(inner_width, inner_height));
            ui.set_max_width(inner_width);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(title)
                        .size(TITLE_FONT_SIZE)
                        .strong()
                        .color(theme.card_text),
                );
                ui.label(
                    egui::RichText::new(value.to_string())
                        .size(VALUE_FONT_SIZE)
                        .strong()
                        .color(theme.card_text),
                );
            });
        });
}
