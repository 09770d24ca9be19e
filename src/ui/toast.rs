use crate::app::TallyApp;
use eframe::egui;
use egui_phosphor::regular as Icon;
use std::time::Instant;

/// Render the toast for the latest tally change, with quick undo/redo
pub fn render_toast_notification(app: &mut TallyApp, ctx: &egui::Context) {
    let now = Instant::now();
    if !app.toast.is_visible(now) {
        return;
    }
    let Some(message) = app.toast.message.clone() else {
        return;
    };

    let mut should_undo = false;
    let mut should_redo = false;
    let mut should_dismiss = false;

    let has_undo = app.tally.can_undo();
    let has_redo = app.tally.can_redo();
    let is_warning = app.toast.is_warning;

    // Show toast in bottom-left corner
    egui::Window::new("tally_toast")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_pos(egui::pos2(20.0, ctx.screen_rect().height() - 140.0))
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            let border = if is_warning {
                egui::Color32::from_rgb(255, 150, 0)
            } else {
                egui::Color32::from_rgb(100, 100, 100)
            };
            let frame = egui::Frame::none()
                .fill(egui::Color32::from_rgb(45, 45, 48))
                .stroke(egui::Stroke::new(1.0, border))
                .rounding(6.0)
                .inner_margin(12.0);

            frame.show(ui, |ui| {
                ui.horizontal(|ui| {
                    let icon = if is_warning { Icon::WARNING } else { Icon::CHECK_CIRCLE };
                    ui.label(egui::RichText::new(icon).size(20.0).color(border));
                    ui.label(egui::RichText::new(&message).strong().color(egui::Color32::WHITE));
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(has_undo, egui::Button::new("↶ Undo (Ctrl+Z)"))
                        .clicked()
                    {
                        should_undo = true;
                    }
                    if ui
                        .add_enabled(has_redo, egui::Button::new("↷ Redo (Ctrl+Y)"))
                        .clicked()
                    {
                        should_redo = true;
                    }
                    if is_warning && ui.button("Dismiss").clicked() {
                        should_dismiss = true;
                    }
                });
            });
        });

    // Handle actions outside of the borrow
    if should_undo {
        app.undo();
    }
    if should_redo {
        app.redo();
    }
    if should_dismiss {
        app.toast.dismiss();
    }
}
