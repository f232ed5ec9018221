use crate::models::{Bounds, ResizeEdge, WindowId};
use serde::{Deserialize, Serialize};

/// Where an interactive move or resize started.
///
/// Every pointer motion is applied to `start` using the total pointer travel since the
/// session began, so rounding never accumulates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerSession {
    pub window: WindowId,
    pub start: Bounds,
    pub pointer: (i32, i32),
}

impl PointerSession {
    #[must_use]
    pub const fn new(window: WindowId, start: Bounds, pointer: (i32, i32)) -> Self {
        Self {
            window,
            start,
            pointer,
        }
    }

    /// Pointer travel since the session began.
    #[must_use]
    pub const fn delta(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.saturating_sub(self.pointer.0),
            y.saturating_sub(self.pointer.1),
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    MovingWindow(PointerSession),
    ResizingWindow(PointerSession, ResizeEdge),
    #[default]
    Normal,
}

impl Mode {
    /// The window targeted by the running pointer session.
    #[must_use]
    pub const fn window(&self) -> Option<WindowId> {
        match self {
            Self::MovingWindow(session) | Self::ResizingWindow(session, _) => {
                Some(session.window)
            }
            Self::Normal => None,
        }
    }
}
