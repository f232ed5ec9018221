use crate::config::Config;
use crate::models::{Window, WindowId};

use serde::{Deserialize, Serialize};

/// `FocusManager` stores which window is active.
///
/// The active window, when there is one, is always a live window that is not minimized.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FocusManager {
    pub active_window: Option<WindowId>,
    // entries below are configuration variables and are never changed
    pub focus_new_windows: bool,
}

impl FocusManager {
    pub fn new(config: &impl Config) -> Self {
        Self {
            active_window: None,
            focus_new_windows: config.focus_new_windows(),
        }
    }

    /// Return the currently focused window.
    #[must_use]
    pub fn window<'a, 'b>(&self, windows: &'a [Window]) -> Option<&'b Window>
    where
        'a: 'b,
    {
        let id = self.active_window?;
        windows.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn is_active(&self, id: WindowId) -> bool {
        self.active_window == Some(id)
    }
}
