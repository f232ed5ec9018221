use crate::errors::Result;
use crate::models::{Bounds, Viewport, WindowId, WindowState};
use crate::state::State;
use serde::{Deserialize, Serialize};

/// One frame as the rendering layer sees it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DisplayWindow {
    pub id: WindowId,
    pub title: String,
    pub bounds: Bounds,
    pub z_order: u32,
    pub state: WindowState,
    pub active: bool,
}

/// One clickable taskbar button.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window: WindowId,
    pub title: String,
    pub icon: String,
    pub active: bool,
    pub minimized: bool,
}

/// Snapshot of the window manager that can be handed to other processes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManagerState {
    pub active_window: Option<WindowId>,
    pub window_title: Option<String>,
    pub viewport: Viewport,
    /// Bottom most first.
    pub windows: Vec<DisplayWindow>,
    /// In opening order.
    pub taskbar: Vec<TaskbarEntry>,
}

impl ManagerState {
    /// # Errors
    ///
    /// Fails if the snapshot cannot be serialized.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    ///
    /// Fails if `json` is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&State> for ManagerState {
    fn from(state: &State) -> Self {
        let active_window = state.focus_manager.active_window;
        let mut windows: Vec<DisplayWindow> = state
            .windows
            .iter()
            .map(|w| DisplayWindow {
                id: w.id,
                title: w.title.clone(),
                bounds: w.bounds,
                z_order: w.z_order,
                state: w.state(),
                active: active_window == Some(w.id),
            })
            .collect();
        windows.sort_by_key(|w| w.z_order);

        let mut taskbar: Vec<TaskbarEntry> = state
            .windows
            .iter()
            .map(|w| TaskbarEntry {
                window: w.id,
                title: w.title.clone(),
                icon: w.icon.clone(),
                active: active_window == Some(w.id),
                minimized: w.is_minimized(),
            })
            .collect();
        taskbar.sort_by_key(|e| e.window);

        let window_title = state
            .focus_manager
            .window(&state.windows)
            .map(|w| w.title.clone());

        Self {
            active_window,
            window_title,
            viewport: state.viewport,
            windows,
            taskbar,
        }
    }
}
