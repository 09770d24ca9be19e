use eframe::egui;
use std::sync::mpsc::Receiver;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::Category;
use crate::state::{CueState, Settings, TallyEvent, TallyState, ToastState};
use crate::storage::SnapshotStore;
use crate::ui;

pub struct TallyApp {
    // Core application state
    pub tally: TallyState,
    pub config: AppConfig,
    pub settings: Settings,

    // Presentation state driven by tally events
    pub toast: ToastState,
    pub cue: CueState,
    events: Receiver<TallyEvent>,
}

impl TallyApp {
    pub fn new(config: AppConfig, settings: Settings) -> Self {
        info!("Opening tally snapshot at {:?}", config.state_file);
        let mut tally = TallyState::load(SnapshotStore::new(config.state_file.clone()));
        let events = tally.subscribe();

        Self {
            tally,
            config,
            settings,
            toast: ToastState::new(),
            cue: CueState::new(),
            events,
        }
    }

    /// Count one response. Ignored while a reset is waiting for confirmation.
    pub fn increment(&mut self, category: Category) {
        if self.tally.is_reset_pending() {
            debug!("{} ignored while reset confirmation is open", category);
            return;
        }
        info!("[BUTTON] {} pressed", category);
        self.tally.increment(category);
    }

    pub fn undo(&mut self) {
        self.tally.undo();
    }

    pub fn redo(&mut self) {
        self.tally.redo();
    }

    pub fn request_reset(&mut self) {
        self.tally.request_reset();
    }

    pub fn confirm_reset(&mut self) {
        self.tally.confirm_reset();
    }

    pub fn cancel_reset(&mut self) {
        self.tally.cancel_reset();
    }

    pub fn set_cue_enabled(&mut self, enabled: bool) {
        if self.settings.cue_enabled != enabled {
            info!("Cue toggled: {}", enabled);
            self.settings.cue_enabled = enabled;
            self.settings.save();
        }
    }

    pub fn set_show_totals(&mut self, show: bool) {
        if self.settings.show_totals != show {
            self.settings.show_totals = show;
            self.settings.save();
        }
    }

    /// Apply every pending tally event to the toast and cue.
    /// Returns true if anything was received.
    pub fn poll_events(&mut self, now: Instant) -> bool {
        let events: Vec<TallyEvent> = self.events.try_iter().collect();
        let received = !events.is_empty();
        for event in events {
            self.handle_event(&event, now);
        }
        received
    }

    fn handle_event(&mut self, event: &TallyEvent, now: Instant) {
        debug!("Tally event: {:?}", event);
        match event {
            TallyEvent::Incremented(category) => {
                if self.settings.cue_enabled {
                    self.cue.trigger(Some(*category), now);
                }
                self.toast.show(
                    format!("{} → {}", category, self.tally.count(*category)),
                    false,
                    now,
                    self.config.toast_duration,
                );
            }
            TallyEvent::Undone(action) => {
                self.toast.show(
                    format!("Undid +{} on {}", action.delta, action.category),
                    false,
                    now,
                    self.config.toast_duration,
                );
            }
            TallyEvent::Redone(action) => {
                self.toast.show(
                    format!("Redid +{} on {}", action.delta, action.category),
                    false,
                    now,
                    self.config.toast_duration,
                );
            }
            TallyEvent::Reset => {
                if self.settings.cue_enabled {
                    self.cue.trigger(None, now);
                }
                self.toast
                    .show("All counts reset to 0", false, now, self.config.toast_duration);
            }
            TallyEvent::SaveFailed(message) => {
                self.toast.show(
                    format!("Counts not saved: {}", message),
                    true,
                    now,
                    self.config.toast_duration,
                );
            }
        }
    }

    /// Remember the window size for the next launch
    fn remember_window_size(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_width = rect.width();
            self.settings.window_height = rect.height();
        }
        self.settings.save();
    }
}

impl eframe::App for TallyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_events(now);

        ui::render_top_panel(self, ctx);
        ui::render_bottom_panel(self, ctx);
        ui::render_board(self, ctx);
        ui::render_reset_confirmation(self, ctx);
        ui::render_toast_notification(self, ctx);

        ui::handle_keyboard_shortcuts(self, ctx);

        // Events raised this frame are picked up on the next one
        if self.poll_events(Instant::now()) {
            ctx.request_repaint();
        }

        let fading = self.cue.is_active(now, self.config.cue_duration)
            || self.toast.is_visible(now);
        if fading {
            ctx.request_repaint();
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.remember_window_size(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> TallyApp {
        let config = AppConfig {
            state_file: dir.path().join("tally_counts.json"),
            ..AppConfig::default()
        };
        TallyApp::new(config, Settings::default())
    }

    #[test]
    fn test_increment_raises_cue_and_toast() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let now = Instant::now();

        app.increment(Category::OntopicGeneral);
        assert!(app.poll_events(now));

        assert_eq!(app.cue.category, Some(Category::OntopicGeneral));
        assert!(app.cue.is_active(now, app.config.cue_duration));
        assert_eq!(
            app.toast.message.as_deref(),
            Some("Ontopic General → 1")
        );
    }

    #[test]
    fn test_cue_disabled_only_shows_toast() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.settings.cue_enabled = false;
        let now = Instant::now();

        app.increment(Category::OffTopicProfane);
        app.poll_events(now);

        assert!(!app.cue.is_active(now, app.config.cue_duration));
        assert!(app.toast.is_visible(now));
    }

    #[test]
    fn test_noop_undo_raises_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.undo();

        assert!(!app.poll_events(Instant::now()));
        assert!(app.toast.message.is_none());
    }

    #[test]
    fn test_reset_goes_through_confirmation() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.increment(Category::OntopicCultural);

        app.confirm_reset();
        assert_eq!(app.tally.count(Category::OntopicCultural), 1);

        app.request_reset();
        app.confirm_reset();
        assert_eq!(app.tally.count(Category::OntopicCultural), 0);

        app.poll_events(Instant::now());
        assert_eq!(app.toast.message.as_deref(), Some("All counts reset to 0"));
        assert_eq!(app.cue.category, None);
    }

    #[test]
    fn test_no_counting_while_reset_is_pending() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.increment(Category::OntopicGeneral);

        app.request_reset();
        app.increment(Category::OntopicGeneral);
        assert_eq!(app.tally.count(Category::OntopicGeneral), 1);

        app.cancel_reset();
        app.increment(Category::OntopicGeneral);
        assert_eq!(app.tally.count(Category::OntopicGeneral), 2);
    }

    #[test]
    fn test_counts_survive_restart() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.increment(Category::OffTopicOmcaFeedback);
        app.increment(Category::OffTopicOmcaFeedback);
        drop(app);

        let app = test_app(&dir);
        assert_eq!(app.tally.count(Category::OffTopicOmcaFeedback), 2);
    }
}
