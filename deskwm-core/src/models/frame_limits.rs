use serde::{Deserialize, Serialize};

/// Size constraints applied to every window frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLimits {
    pub min_width: i32,
    pub min_height: i32,
    /// Height of the draggable title bar at the top of each frame.
    pub title_bar_height: i32,
    /// How much of the title bar must stay on screen horizontally.
    pub min_title_bar_visible: i32,
}

impl Default for FrameLimits {
    fn default() -> Self {
        Self {
            min_width: 300,
            min_height: 200,
            title_bar_height: 32,
            min_title_bar_visible: 100,
        }
    }
}
