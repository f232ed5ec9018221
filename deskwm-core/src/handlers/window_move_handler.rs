use super::window_resize_handler::origin_limits;
use crate::display_action::DisplayAction;
use crate::models::{Bounds, FrameLimits, Viewport, WindowId};
use crate::state::State;

impl State {
    /// Shift a window by the given offset.
    ///
    /// Maximized and minimized windows stay where they are. Returns `true` if the window
    /// actually moved.
    pub fn move_window(&mut self, id: WindowId, offset_x: i32, offset_y: i32) -> bool {
        let (viewport, limits) = (self.viewport, self.limits);
        let target = match self.window(id) {
            Some(w) if w.can_move() => moved_bounds(w.bounds, offset_x, offset_y, &viewport, &limits),
            _ => return false,
        };
        self.set_window_bounds(id, target, DisplayAction::MovedWindow)
    }
}

pub(crate) fn moved_bounds(
    start: Bounds,
    offset_x: i32,
    offset_y: i32,
    viewport: &Viewport,
    limits: &FrameLimits,
) -> Bounds {
    clamp_position(start.translated(offset_x, offset_y), viewport, limits)
}

/// Keep the title bar reachable: left of the right edge by at least
/// `min_title_bar_visible`, and entirely above the taskbar.
pub(crate) fn clamp_position(bounds: Bounds, viewport: &Viewport, limits: &FrameLimits) -> Bounds {
    let (max_x, max_y) = origin_limits(viewport, limits);
    Bounds::new(
        bounds.x().clamp(0, max_x),
        bounds.y().clamp(0, max_y),
        bounds.w(),
        bounds.h(),
    )
}
