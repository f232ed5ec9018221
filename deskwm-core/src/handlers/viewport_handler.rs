use super::clamp_position;
use crate::display_action::DisplayAction;
use crate::models::Viewport;
use crate::state::State;

impl State {
    /// The desktop changed size.
    ///
    /// Maximized windows are refit to the new area and normal windows are pulled back so
    /// their title bar can still be grabbed. Minimized windows are left alone until they
    /// are restored.
    pub fn viewport_resize_handler(&mut self, width: i32, height: i32) -> bool {
        let viewport = Viewport::new(width, height, self.viewport.taskbar_height);
        if viewport == self.viewport {
            return false;
        }
        tracing::debug!("Viewport resized to {}x{}", width, height);
        self.viewport = viewport;
        let available = viewport.available();
        let limits = self.limits;

        let mut changes = vec![];
        for window in &mut self.windows {
            if window.is_maximized() {
                if window.bounds != available {
                    window.bounds = available;
                    changes.push(DisplayAction::ResizedWindow(window.id));
                }
            } else if window.is_normal() {
                let clamped = clamp_position(window.bounds, &viewport, &limits);
                if clamped != window.bounds {
                    window.bounds = clamped;
                    changes.push(DisplayAction::MovedWindow(window.id));
                }
            }
        }
        self.actions.extend(changes);
        true
    }
}
