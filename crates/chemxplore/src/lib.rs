//! ChemXplore terminal front end
//!
//! Renders the chemistry lessons from `chemxplore_core` with ratatui, either
//! in a native terminal (crossterm) or in the browser (ratzilla).

pub mod actions;
pub mod app;
pub mod components;
pub mod data;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod screens;
pub mod state;

#[cfg(feature = "web")]
mod web;

pub use app::App;
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "web")]
pub use logging::init_logging_web;
