mod app_state;
mod history;
mod reset_gate;
mod settings;
mod tally_state;

pub use app_state::{CueState, ToastState};
pub use settings::Settings;
pub use tally_state::{TallyEvent, TallyState};
