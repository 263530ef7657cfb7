mod app_state;
mod errors;

pub use app_state::{AppState, Cursors, Notice, clamp_step};
pub use errors::{LoadError, SaveError};
