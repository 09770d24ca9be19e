mod board;
mod bottom;
mod helpers;
mod top;

pub use board::render_board;
pub use bottom::render_bottom_panel;
pub use top::render_top_panel;
