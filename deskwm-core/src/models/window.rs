//! Window Information
#![allow(clippy::module_name_repetitions)]

use super::Bounds;
use super::WindowState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a window for its whole lifetime. Ids are never reused.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store Window information.
///
/// Only the frame is managed here. Whatever is rendered inside the frame belongs to the
/// application that opened it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub bounds: Bounds,
    pub z_order: u32,
    state: WindowState,
    saved_bounds: Option<Bounds>,
}

impl Window {
    #[must_use]
    pub fn new(id: WindowId, title: impl Into<String>, icon: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            bounds,
            z_order: 0,
            state: WindowState::Normal,
            saved_bounds: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> WindowState {
        self.state
    }

    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }

    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.state == WindowState::Normal
    }

    /// Bounds captured right before the last maximize, if the window was ever maximized.
    #[must_use]
    pub const fn saved_bounds(&self) -> Option<Bounds> {
        self.saved_bounds
    }

    #[must_use]
    pub fn can_focus(&self) -> bool {
        !self.is_minimized()
    }

    /// Only normal windows follow the pointer.
    #[must_use]
    pub fn can_move(&self) -> bool {
        self.is_normal()
    }

    #[must_use]
    pub fn can_resize(&self) -> bool {
        self.is_normal()
    }

    /// Swap to the given full-screen bounds, remembering the current ones.
    pub(crate) fn maximize(&mut self, available: Bounds) {
        self.saved_bounds = Some(self.bounds);
        self.bounds = available;
        self.state = WindowState::Maximized;
    }

    /// Return to the bounds saved by the last maximize.
    pub(crate) fn unmaximize(&mut self) {
        if let Some(saved) = self.saved_bounds {
            self.bounds = saved;
        }
        self.state = WindowState::Normal;
    }

    pub(crate) fn minimize(&mut self) {
        self.state = WindowState::Minimized;
    }

    pub(crate) fn unminimize(&mut self) {
        self.state = WindowState::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Window {
        Window::new(WindowId(1), "Terminal", "💻", Bounds::new(50, 50, 400, 300))
    }

    #[test]
    fn a_new_window_is_normal_and_was_never_maximized() {
        let window = subject();
        assert!(window.is_normal());
        assert_eq!(window.saved_bounds(), None);
    }

    #[test]
    fn maximizing_saves_the_normal_bounds() {
        let mut window = subject();
        window.maximize(Bounds::new(0, 0, 1280, 672));
        assert!(window.is_maximized());
        assert_eq!(window.saved_bounds(), Some(Bounds::new(50, 50, 400, 300)));
        window.unmaximize();
        assert!(window.is_normal());
        assert_eq!(window.bounds, Bounds::new(50, 50, 400, 300));
    }
}
