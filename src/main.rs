use eframe::egui;
use tracing::info;

mod app;
mod config;
mod core;
mod errors;
mod logging;
mod state;
mod storage;
mod ui;

use app::TallyApp;
use config::AppConfig;
use state::Settings;

fn main() -> Result<(), eframe::Error> {
    // Default log level is "trace"; override with RUST_LOG
    logging::setup_logging();

    info!("Starting Response Tally application");

    let config = AppConfig::default();
    let settings = Settings::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([config.min_window_width, config.min_window_height])
            .with_title("Response Tally"),
        ..Default::default()
    };

    info!("Launching application window");
    eframe::run_native(
        "Response Tally",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(TallyApp::new(config, settings)))
        }),
    )
}
