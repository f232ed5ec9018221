use super::clamp_position;
use crate::display_action::DisplayAction;
use crate::models::{WindowId, WindowState};
use crate::state::State;

impl State {
    /// Hide a window. A maximized window is brought back to its normal bounds first.
    ///
    /// If it was the active window the focus moves on to the next best window.
    pub fn minimize_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        let was_maximized = match window.state() {
            WindowState::Minimized => return false,
            WindowState::Maximized => {
                window.unmaximize();
                true
            }
            WindowState::Normal => false,
        };
        window.minimize();

        if self.mode.window() == Some(id) {
            self.end_pointer_session();
        }
        if was_maximized {
            self.actions.push_back(DisplayAction::RestoredWindow(id));
        }
        self.actions.push_back(DisplayAction::MinimizedWindow(id));
        tracing::debug!("Minimized window {}", id);

        if self.focus_manager.is_active(id) {
            self.focus_manager.active_window = None;
            self.focus_after_loss(id);
        }
        true
    }

    /// Swap between normal bounds and the whole area above the taskbar.
    ///
    /// Minimized windows have to be restored first.
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        let (viewport, limits) = (self.viewport, self.limits);
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        let act = match window.state() {
            WindowState::Minimized => return false,
            WindowState::Normal => {
                window.maximize(viewport.available());
                DisplayAction::MaximizedWindow(id)
            }
            WindowState::Maximized => {
                window.unmaximize();
                window.bounds = clamp_position(window.bounds, &viewport, &limits);
                DisplayAction::RestoredWindow(id)
            }
        };
        if self.mode.window() == Some(id) {
            self.end_pointer_session();
        }
        self.actions.push_back(act);
        true
    }

    /// Bring a window back to its normal state and focus it.
    pub fn restore_window(&mut self, id: WindowId) -> bool {
        let (viewport, limits) = (self.viewport, self.limits);
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        let mut changed = false;
        if window.is_maximized() {
            window.unmaximize();
            window.bounds = clamp_position(window.bounds, &viewport, &limits);
            self.actions.push_back(DisplayAction::RestoredWindow(id));
            changed = true;
        }
        // Restoring out of minimized is part of taking the focus.
        self.focus_window(id) || changed
    }
}
