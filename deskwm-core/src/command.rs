use crate::models::WindowId;
use serde::{Deserialize, Serialize};

/// Shell level requests. Unless a window is named they act on the active window.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    CloseWindow,
    MinimizeWindow,
    ToggleMaximized,
    RestoreWindow,
    FocusNextWindow,
    FocusWindow(WindowId),
}
