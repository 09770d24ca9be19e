use crate::app::TallyApp;
use crate::core::CategoryGroup;
use eframe::egui;
use egui_phosphor::regular as Icon;

/// Render the top panel with the title, cue toggle and totals
pub fn render_top_panel(app: &mut TallyApp, ctx: &egui::Context) {
    let mut cue_enabled = app.settings.cue_enabled;
    let mut show_totals = app.settings.show_totals;

    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(format!("{} Response Tally", Icon::LIST_NUMBERS));

            ui.add_space(20.0);

            let cue_icon = if cue_enabled {
                Icon::SPEAKER_HIGH
            } else {
                Icon::SPEAKER_SLASH
            };
            ui.checkbox(&mut cue_enabled, format!("{} Cue", cue_icon));
            ui.checkbox(&mut show_totals, format!("{} Totals", Icon::CALCULATOR));
        });

        if show_totals {
            let counts = app.tally.counts();
            ui.horizontal(|ui| {
                for group in CategoryGroup::ALL {
                    let (accent, _) = app.config.get_group_colors(group);
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {}",
                            group.title(),
                            counts.group_total(group)
                        ))
                        .color(accent)
                        .strong(),
                    );
                    ui.add_space(12.0);
                }
                ui.label(egui::RichText::new(format!("Total: {}", counts.total())).strong());
            });
        }
        ui.add_space(6.0);
    });

    app.set_cue_enabled(cue_enabled);
    app.set_show_totals(show_totals);
}
