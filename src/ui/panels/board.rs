use crate::app::TallyApp;
use crate::core::{Category, CategoryGroup};
use eframe::egui;
use std::time::Instant;

use super::helpers::{count_button, shortcut_hint, CountButtonStyle};

/// Render the two category columns with one counting button per category
pub fn render_board(app: &mut TallyApp, ctx: &egui::Context) {
    let now = Instant::now();
    let flash = app.cue.intensity(now, app.config.cue_duration);
    let active = app.tally.active_category();

    let mut pressed: Option<Category> = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.columns(CategoryGroup::ALL.len(), |columns| {
            for (column, group) in columns.iter_mut().zip(CategoryGroup::ALL) {
                let (accent, fill) = app.config.get_group_colors(group);

                column.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(group.title())
                            .heading()
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(8.0);

                    for category in group.categories() {
                        let is_active = active == Some(category);
                        let cue_hit = app.cue.category == Some(category)
                            || (app.cue.category.is_none() && flash > 0.0);

                        let style = CountButtonStyle {
                            accent,
                            fill,
                            highlight: app.config.highlight_color,
                            active: is_active,
                            flash: if cue_hit { flash } else { 0.0 },
                        };

                        let response =
                            count_button(ui, category.short_label(), app.tally.count(category), &style);
                        let response = match shortcut_hint(category.index()) {
                            Some(key) => response.on_hover_text(format!("{} (key {})", category, key)),
                            None => response.on_hover_text(category.label()),
                        };

                        if response.clicked() {
                            pressed = Some(category);
                        }
                        ui.add_space(6.0);
                    }
                });
            }
        });
    });

    // Handle the click outside of the borrow; increment() ignores it while a
    // reset is pending, same as the number keys
    if let Some(category) = pressed {
        app.increment(category);
    }
}
