use crate::app::TallyApp;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// Render the bottom panel with undo, redo and reset controls
pub fn render_bottom_panel(app: &mut TallyApp, ctx: &egui::Context) {
    let mut should_undo = false;
    let mut should_redo = false;
    let mut should_request_reset = false;

    let can_undo = app.tally.can_undo();
    let can_redo = app.tally.can_redo();
    let reset_pending = app.tally.is_reset_pending();

    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.add_space(10.0);

            let undo_hint = match app.tally.history().last_action() {
                Some(action) => format!("Remove the last +{} on {}", action.delta, action.category),
                None => "Nothing to undo".to_string(),
            };
            if ui
                .add_enabled(can_undo, egui::Button::new(format!("{} Undo", Icon::ARROW_COUNTER_CLOCKWISE)))
                .on_hover_text(undo_hint)
                .on_disabled_hover_text("Nothing to undo")
                .clicked()
            {
                should_undo = true;
            }

            let redo_hint = match app.tally.history().redo_action() {
                Some(action) => format!("Re-apply +{} on {}", action.delta, action.category),
                None => "Nothing to redo".to_string(),
            };
            if ui
                .add_enabled(can_redo, egui::Button::new(format!("{} Redo", Icon::ARROW_CLOCKWISE)))
                .on_hover_text(redo_hint)
                .on_disabled_hover_text("Nothing to redo")
                .clicked()
            {
                should_redo = true;
            }

            ui.add_space(20.0);

            let reset_button = egui::Button::new(format!("{} Reset Counts", Icon::TRASH))
                .fill(egui::Color32::from_rgb(200, 50, 50));
            if ui.add_enabled(!reset_pending, reset_button).clicked() {
                should_request_reset = true;
            }

            ui.add_space(20.0);

            // Where the snapshot lives, and whether the last write made it
            let path = app.tally.store().path().display().to_string();
            match app.tally.last_save_error() {
                Some(error) => {
                    ui.label(
                        egui::RichText::new(format!("{} Not saved", Icon::WARNING))
                            .color(egui::Color32::from_rgb(255, 150, 0)),
                    )
                    .on_hover_text(error.to_string());
                }
                None => {
                    ui.label(
                        egui::RichText::new(format!("{} {}", Icon::FLOPPY_DISK, path))
                            .small()
                            .color(egui::Color32::GRAY),
                    );
                }
            }
        });
        ui.add_space(10.0);
    });

    // Handle actions outside of the borrow
    if should_undo {
        app.undo();
    }
    if should_redo {
        app.redo();
    }
    if should_request_reset {
        app.request_reset();
    }
}
