use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::BracketedFormatter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Keep our app at trace level, but suppress verbose third-party logs
        ["winit=warn", "log=warn", "egui=warn", "eframe=warn"]
            .into_iter()
            .filter_map(|directive| directive.parse::<Directive>().ok())
            .fold(EnvFilter::new("trace"), EnvFilter::add_directive)
    })
}

fn stdout_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .event_format(BracketedFormatter::new())
        .with_writer(std::io::stdout)
}

/// Create `<log_dir>/response_tally_<timestamp>.log`
fn create_log_file(log_dir: &Path) -> std::io::Result<(PathBuf, fs::File)> {
    fs::create_dir_all(log_dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("response_tally_{}.log", timestamp));

    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    Ok((log_path, file))
}

/// Install the global subscriber, logging to stdout and to a file under `./logs`.
///
/// Returns the log file path, or `None` when only stdout logging could be set up.
pub fn setup_logging() -> Option<PathBuf> {
    let log_dir = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("logs");

    match create_log_file(&log_dir) {
        Ok((log_path, file)) => {
            let file_layer = fmt::layer()
                .event_format(BracketedFormatter::new())
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false); // Disable ANSI colors in file

            tracing_subscriber::registry()
                .with(default_filter())
                .with(file_layer)
                .with(stdout_layer())
                .init();

            info!("Log file created at: {:?}", log_path);
            Some(log_path)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(default_filter())
                .with(stdout_layer())
                .init();

            warn!("Could not create log file in {:?}: {}. Logging to stdout only.", log_dir, e);
            None
        }
    }
}
