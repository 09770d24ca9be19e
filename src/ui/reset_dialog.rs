use crate::app::TallyApp;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// Render the reset confirmation dialog while a reset is pending
pub fn render_reset_confirmation(app: &mut TallyApp, ctx: &egui::Context) {
    if !app.tally.is_reset_pending() {
        return;
    }

    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new(format!("{} Reset Counts", Icon::WARNING))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("This sets every category back to 0.");
            ui.add_space(10.0);

            let counts = app.tally.counts();
            if counts.is_empty() {
                ui.label("All counts are already 0.");
            } else {
                ui.label(format!("Current total: {}", counts.total()));
            }

            ui.add_space(10.0);

            ui.colored_label(
                egui::Color32::from_rgb(255, 150, 0),
                "⚠ The saved counts are overwritten as well.",
            );

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .button(format!("{} Yes, reset all counts", Icon::CHECK))
                    .clicked()
                {
                    confirm = true;
                }

                if ui.button(format!("{} Cancel", Icon::X)).clicked() {
                    cancel = true;
                }
            });
        });

    if confirm {
        app.confirm_reset();
    } else if cancel {
        app.cancel_reset();
    }
}
