#[cfg(feature = "native")]
pub mod course_data;
pub mod keybindings_data;
