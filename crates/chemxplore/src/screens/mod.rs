pub mod done;
pub mod home;
pub mod intro;
pub mod lab;
pub mod quiz;

use crate::components::Component;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}
