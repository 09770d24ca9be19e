pub mod keyboard;
pub mod panels;
pub mod reset_dialog;
pub mod toast;

// Re-export commonly used functions
pub use panels::{render_board, render_bottom_panel, render_top_panel};

pub use keyboard::handle_keyboard_shortcuts;
pub use reset_dialog::render_reset_confirmation;
pub use toast::render_toast_notification;
