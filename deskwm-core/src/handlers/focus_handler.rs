use super::clamp_position;
use crate::display_action::DisplayAction;
use crate::models::WindowId;
use crate::state::State;

impl State {
    /// Make a window the active one and raise it above all others.
    ///
    /// A minimized window is restored on the way. Focusing the window that is already
    /// active does not produce another focus notification.
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        if self.window(id).is_none() {
            return false;
        }
        if self.focus_manager.is_active(id) {
            return self.raise_window(id);
        }
        let previous = self.focus_manager.active_window;
        focus_window_work(self, id, previous)
    }

    /// Put a window above every other one without touching the focus.
    ///
    /// Does nothing if the window is already on top.
    pub fn raise_window(&mut self, id: WindowId) -> bool {
        let Some(z_order) = self.window(id).map(|w| w.z_order) else {
            return false;
        };
        if !self.windows.iter().any(|w| w.z_order > z_order) {
            return false;
        }
        let z = self.allocate_z();
        if let Some(window) = self.window_mut(id) {
            window.z_order = z;
        }
        self.actions.push_back(DisplayAction::MoveToTop(id));
        true
    }

    /// Alt+Tab: focus the next visible window in opening order, wrapping around.
    pub fn cycle_focus(&mut self) -> bool {
        let mut ids: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|w| w.can_focus())
            .map(|w| w.id)
            .collect();
        ids.sort();
        let current = self
            .focus_manager
            .active_window
            .and_then(|active| ids.iter().position(|&id| id == active));
        let next = match current {
            Some(index) => ids.get((index + 1) % ids.len()).copied(),
            None => ids.first().copied(),
        };
        match next {
            Some(id) => self.focus_window(id),
            None => false,
        }
    }

    /// The active window was closed or minimized: hand the focus to the visible window
    /// highest in the stack, or to nobody.
    pub(crate) fn focus_after_loss(&mut self, lost: WindowId) {
        let next = self
            .windows
            .iter()
            .filter(|w| w.id != lost && w.can_focus())
            .max_by_key(|w| w.z_order)
            .map(|w| w.id);
        match next {
            Some(id) => {
                focus_window_work(self, id, Some(lost));
            }
            None => {
                tracing::debug!("No window left to focus after {}", lost);
                self.actions.push_back(DisplayAction::Unfocus(Some(lost)));
            }
        }
    }
}

fn focus_window_work(state: &mut State, id: WindowId, previous: Option<WindowId>) -> bool {
    if state.window(id).is_none() {
        return false;
    }
    let (viewport, limits) = (state.viewport, state.limits);
    let z = state.allocate_z();
    let Some(window) = state.window_mut(id) else {
        return false;
    };
    let restored = window.is_minimized();
    if restored {
        window.unminimize();
        // The desktop may have shrunk while the window was hidden.
        window.bounds = clamp_position(window.bounds, &viewport, &limits);
    }
    window.z_order = z;
    state.focus_manager.active_window = Some(id);
    tracing::trace!("Focus {:?} -> {}", previous, id);

    if restored {
        state.actions.push_back(DisplayAction::RestoredWindow(id));
    }
    let act = DisplayAction::WindowTakeFocus {
        window: id,
        previous,
    };
    state.actions.push_back(act);
    true
}
