use eframe::egui::Color32;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::CategoryGroup;

/// Application configuration containing all hardcoded values
///
/// This struct centralizes configuration values to make them easier to manage
/// and provides a foundation for future configuration file support.
#[derive(Clone)]
pub struct AppConfig {
    /// Snapshot file, relative to the working directory
    pub state_file: PathBuf,
    pub min_window_width: f32,
    pub min_window_height: f32,
    pub group_colors: Vec<(Color32, Color32)>, // (accent_color, fill_color)
    pub highlight_color: Color32,
    pub cue_duration: Duration,
    pub toast_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("tally_counts.json"),
            min_window_width: 480.0,
            min_window_height: 360.0,
            group_colors: vec![
                // Ontopic - Green
                (
                    Color32::from_rgb(80, 180, 110),
                    Color32::from_rgba_unmultiplied(80, 180, 110, 30),
                ),
                // Off Topic - Orange
                (
                    Color32::from_rgb(255, 140, 0),
                    Color32::from_rgba_unmultiplied(255, 140, 0, 30),
                ),
            ],
            highlight_color: Color32::from_rgb(70, 130, 220),
            cue_duration: Duration::from_millis(450),
            toast_duration: Duration::from_secs(3),
        }
    }
}

impl AppConfig {
    /// Get colors for a category group
    /// Returns (accent_color, fill_color)
    pub fn get_group_colors(&self, group: CategoryGroup) -> (Color32, Color32) {
        let index = match group {
            CategoryGroup::Ontopic => 0,
            CategoryGroup::OffTopic => 1,
        };
        self.group_colors.get(index).copied().unwrap_or((
            Color32::GRAY,
            Color32::from_rgba_unmultiplied(128, 128, 128, 30),
        ))
    }
}
