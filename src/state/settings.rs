use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Persistent user preferences that are saved between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Last window width
    pub window_width: f32,

    /// Last window height
    pub window_height: f32,

    /// Flash the highlighted category on increment and reset
    #[serde(default = "default_true")]
    pub cue_enabled: bool,

    /// Show per-group totals in the top panel
    #[serde(default = "default_true")]
    pub show_totals: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 720.0,
            window_height: 560.0,
            cue_enabled: true,
            show_totals: true,
        }
    }
}

impl Settings {
    /// Get the path to the settings file (in the same directory as the executable)
    pub fn get_config_path() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|exe_path| exe_path.parent().map(|dir| dir.to_path_buf()))
            .map(|dir| dir.join("tally_settings.json"))
    }

    /// Load settings from disk, or return defaults if file doesn't exist or is corrupted
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => {
                warn!("Could not determine config directory. Using defaults.");
                Self::default()
            }
        }
    }

    pub fn load_from(config_path: &Path) -> Self {
        info!("Loading settings from: {:?}", config_path);

        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => {
                    info!("Successfully loaded settings");
                    return settings;
                }
                Err(e) => {
                    warn!("Failed to parse settings file: {}. Using defaults.", e);
                }
            },
            Err(e) => {
                // It's normal for the file not to exist on first run
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read settings file: {}. Using defaults.", e);
                } else {
                    info!("No settings file found. Using defaults.");
                }
            }
        }

        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) {
        match Self::get_config_path() {
            Some(config_path) => self.save_to(&config_path),
            None => warn!("Could not determine config directory. Settings not saved."),
        }
    }

    pub fn save_to(&self, config_path: &Path) {
        if let Some(parent) = config_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(config_path, json) {
                    warn!("Failed to write settings file: {}", e);
                } else {
                    info!("Settings saved to: {:?}", config_path);
                }
            }
            Err(e) => {
                warn!("Failed to serialize settings: {}", e);
            }
        }
    }
}
