#[cfg(test)]
mod mock_frontend;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::Window;

#[cfg(test)]
pub use self::mock_frontend::MockFrontend;

/// The consumer of the notification stream: whatever draws the frames and the taskbar.
pub trait Frontend {
    fn new(config: &impl Config) -> Self;

    /// Windows whose geometry or stacking may have changed, bottom most first.
    fn update_windows(&mut self, _windows: Vec<&Window>) {}

    fn execute_action(&mut self, _act: DisplayAction) {}
}
