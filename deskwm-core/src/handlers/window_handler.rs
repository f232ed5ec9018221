use super::clamp_position;
use crate::display_action::DisplayAction;
use crate::models::{Bounds, Window, WindowId};
use crate::state::State;

impl State {
    /// Open a new frame and return its id.
    ///
    /// The frame is sized from `size` or the configured default, never below the minimum,
    /// and cascaded from the most recently opened window.
    pub fn create_window(&mut self, title: &str, icon: &str, size: Option<(i32, i32)>) -> WindowId {
        let (w, h) = size.unwrap_or((self.default_width, self.default_height));
        let w = w.max(self.limits.min_width);
        let h = h.max(self.limits.min_height);
        let (x, y) = self.cascade_position(w, h);

        let id = self.allocate_window_id();
        let mut window = Window::new(id, title, icon, Bounds::new(x, y, w, h));
        window.z_order = self.allocate_z();
        tracing::debug!("Created window {} {:?} at {:?}", id, title, window.bounds);

        self.windows.push(window.clone());
        // Let the frontend know there is a new frame to mount content into.
        self.actions.push_back(DisplayAction::AddedWindow(window));

        if self.focus_manager.focus_new_windows {
            self.focus_window(id);
        }
        id
    }

    /// Remove a window for good.
    ///
    /// Returns `false` if the window is not known.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            return false;
        };
        // Drop any drag or resize that was holding on to this window.
        if self.mode.window() == Some(id) {
            self.end_pointer_session();
        }
        self.windows.remove(index);
        self.actions.push_back(DisplayAction::DestroyedWindow(id));
        tracing::debug!("Closed window {}", id);

        if self.focus_manager.is_active(id) {
            self.focus_manager.active_window = None;
            self.focus_after_loss(id);
        }
        true
    }

    pub fn rename_window(&mut self, id: WindowId, title: &str) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        if window.title == title {
            return false;
        }
        window.title = title.to_owned();
        let act = DisplayAction::SetWindowTitle(id, title.to_owned());
        self.actions.push_back(act);
        true
    }

    /// Offset from the previous window, wrapping to the origin once the frame would no
    /// longer fit on screen.
    fn cascade_position(&self, w: i32, h: i32) -> (i32, i32) {
        let (x, y) = match self.windows.iter().max_by_key(|w| w.id) {
            None => self.cascade_origin,
            Some(previous) => {
                let base = if previous.is_maximized() {
                    previous.saved_bounds().unwrap_or(previous.bounds)
                } else {
                    previous.bounds
                };
                let x = base.x().saturating_add(self.cascade_offset);
                let y = base.y().saturating_add(self.cascade_offset);
                let available = self.viewport.available();
                if x.saturating_add(w) > available.right() || y.saturating_add(h) > available.bottom()
                {
                    self.cascade_origin
                } else {
                    (x, y)
                }
            }
        };
        // A configured origin can still sit past the title bar limits on a small desktop.
        let placed = clamp_position(Bounds::new(x, y, w, h), &self.viewport, &self.limits);
        (placed.x(), placed.y())
    }
}
