use crate::models::{ResizeEdge, WindowId};
use crate::Command;
use serde::{Deserialize, Serialize};

/// Input from the host shell, already translated from raw pointer and keyboard events.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    MoveWindow(WindowId, i32, i32),
    ResizeWindow(WindowId, ResizeEdge, i32, i32),
    /// Pointer pressed on a title bar.
    BeginMove(WindowId, i32, i32),
    /// Pointer pressed on a resize handle.
    BeginResize(WindowId, ResizeEdge, i32, i32),
    Motion(i32, i32),
    Release,
    CancelSession,
    FocusWindow(WindowId),
    MinimizeWindow(WindowId),
    ToggleMaximize(WindowId),
    RestoreWindow(WindowId),
    CloseWindow(WindowId),
    RenameWindow(WindowId, String),
    CycleFocus,
    ViewportResize(i32, i32),
    SendCommand(Command),
}
