use crate::app::TallyApp;
use crate::core::Category;
use eframe::egui;
use tracing::debug;

const CATEGORY_KEYS: [egui::Key; Category::COUNT] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
    egui::Key::Num0,
];

/// Category bound to a number key, in display order (`1` is the first, `0` the tenth)
pub fn category_for_key(key: egui::Key) -> Option<Category> {
    CATEGORY_KEYS
        .iter()
        .position(|k| *k == key)
        .map(|index| Category::ALL[index])
}

/// Handle keyboard shortcuts for counting, undo/redo and reset
pub fn handle_keyboard_shortcuts(app: &mut TallyApp, ctx: &egui::Context) {
    // Text fields keep their own keys
    if ctx.wants_keyboard_input() {
        return;
    }

    if app.tally.is_reset_pending() {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)) {
            debug!("[KEYBOARD] Escape pressed, cancelling reset");
            app.cancel_reset();
        }
        // No counting while the confirmation is open
        return;
    }

    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
        debug!("[KEYBOARD] Undo shortcut pressed");
        app.undo();
    }
    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y)) {
        debug!("[KEYBOARD] Redo shortcut pressed");
        app.redo();
    }

    for key in CATEGORY_KEYS {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key)) {
            if let Some(category) = category_for_key(key) {
                debug!("[KEYBOARD] {:?} pressed", key);
                app.increment(category);
            }
        }
    }
}
