use crate::models::ResizeEdge;
use crate::models::Window;
use crate::models::WindowId;
use serde::{Deserialize, Serialize};

/// What happened to a window, as far as observers are concerned.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Moved,
    Resized,
    Focused,
    Unfocused,
    Raised,
    Minimized,
    Maximized,
    Restored,
    Renamed,
    Closed,
    Session,
}

/// These are notifications from the window manager.
/// The frontend (rendering layer and taskbar) should act on these actions.
#[allow(clippy::large_enum_variant)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction {
    /// A new frame exists. Content can be mounted into it.
    AddedWindow(Window),

    MovedWindow(WindowId),

    ResizedWindow(WindowId),

    /// Tell a window that it is to become focused. The taskbar moves its highlight from
    /// `previous` to `window`.
    WindowTakeFocus {
        window: WindowId,
        previous: Option<WindowId>,
    },

    /// No window holds the focus anymore.
    Unfocus(Option<WindowId>),

    /// Raises a given window without changing the focus.
    MoveToTop(WindowId),

    MinimizedWindow(WindowId),

    MaximizedWindow(WindowId),

    /// Back to the normal state, from either minimized or maximized.
    RestoredWindow(WindowId),

    SetWindowTitle(WindowId, String),

    /// The frame is gone. Any content mounted in it should be released.
    DestroyedWindow(WindowId),

    /// Tell the frontend we are ready to move this window. Pointer listeners for the
    /// drag should be attached until `NormalMode`.
    ReadyToMoveWindow(WindowId),

    /// Tell the frontend we are ready to resize this window.
    ReadyToResizeWindow(WindowId, ResizeEdge),

    /// Tell the frontend the pointer session ended and its listeners can go.
    NormalMode,
}

impl DisplayAction {
    /// The window this notification is about.
    #[must_use]
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Self::AddedWindow(window) => Some(window.id),
            Self::WindowTakeFocus { window, .. } => Some(*window),
            Self::Unfocus(window) => *window,
            Self::MovedWindow(id)
            | Self::ResizedWindow(id)
            | Self::MoveToTop(id)
            | Self::MinimizedWindow(id)
            | Self::MaximizedWindow(id)
            | Self::RestoredWindow(id)
            | Self::SetWindowTitle(id, _)
            | Self::DestroyedWindow(id)
            | Self::ReadyToMoveWindow(id)
            | Self::ReadyToResizeWindow(id, _) => Some(*id),
            Self::NormalMode => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        match self {
            Self::AddedWindow(_) => ChangeKind::Created,
            Self::MovedWindow(_) => ChangeKind::Moved,
            Self::ResizedWindow(_) => ChangeKind::Resized,
            Self::WindowTakeFocus { .. } => ChangeKind::Focused,
            Self::Unfocus(_) => ChangeKind::Unfocused,
            Self::MoveToTop(_) => ChangeKind::Raised,
            Self::MinimizedWindow(_) => ChangeKind::Minimized,
            Self::MaximizedWindow(_) => ChangeKind::Maximized,
            Self::RestoredWindow(_) => ChangeKind::Restored,
            Self::SetWindowTitle(..) => ChangeKind::Renamed,
            Self::DestroyedWindow(_) => ChangeKind::Closed,
            Self::ReadyToMoveWindow(_) | Self::ReadyToResizeWindow(..) | Self::NormalMode => {
                ChangeKind::Session
            }
        }
    }

    /// Whether the taskbar needs to redraw because of this notification.
    #[must_use]
    pub const fn touches_taskbar(&self) -> bool {
        matches!(
            self.kind(),
            ChangeKind::Created
                | ChangeKind::Focused
                | ChangeKind::Unfocused
                | ChangeKind::Minimized
                | ChangeKind::Restored
                | ChangeKind::Renamed
                | ChangeKind::Closed
        )
    }
}
