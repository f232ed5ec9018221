use crate::display_action::DisplayAction;
use crate::models::{Bounds, FrameLimits, ResizeEdge, Viewport, WindowId};
use crate::state::State;

impl State {
    /// Drag one edge (or corner) of a window by the given offset.
    ///
    /// Returns `true` if the bounds changed.
    pub fn resize_window(
        &mut self,
        id: WindowId,
        edge: ResizeEdge,
        offset_x: i32,
        offset_y: i32,
    ) -> bool {
        let (viewport, limits) = (self.viewport, self.limits);
        let target = match self.window(id) {
            Some(w) if w.can_resize() => {
                resized_bounds(w.bounds, edge, offset_x, offset_y, &viewport, &limits)
            }
            _ => return false,
        };
        self.set_window_bounds(id, target, DisplayAction::ResizedWindow)
    }
}

/// East/south edges grow with a positive offset, west/north edges shrink with one and
/// drag the origin along. The edge opposite the one being dragged never moves, and the
/// origin stays inside the area where the title bar can still be grabbed.
pub(crate) fn resized_bounds(
    start: Bounds,
    edge: ResizeEdge,
    offset_x: i32,
    offset_y: i32,
    viewport: &Viewport,
    limits: &FrameLimits,
) -> Bounds {
    let (max_x, max_y) = origin_limits(viewport, limits);
    let (mut x, mut w) = (start.x(), start.w());
    let (mut y, mut h) = (start.y(), start.h());

    if edge.has_east() {
        w = start.w().saturating_add(offset_x).max(limits.min_width);
    }
    if edge.has_west() {
        (x, w) = drag_leading_edge(start.right(), start.w(), offset_x, limits.min_width, max_x);
    }
    if edge.has_south() {
        h = start.h().saturating_add(offset_y).max(limits.min_height);
    }
    if edge.has_north() {
        (y, h) = drag_leading_edge(start.bottom(), start.h(), offset_y, limits.min_height, max_y);
    }
    Bounds::new(x, y, w, h)
}

/// Largest x and y a frame origin may take.
pub(crate) fn origin_limits(viewport: &Viewport, limits: &FrameLimits) -> (i32, i32) {
    let max_x = viewport
        .width
        .saturating_sub(limits.min_title_bar_visible)
        .max(0);
    let max_y = viewport
        .height
        .saturating_sub(viewport.taskbar_height)
        .saturating_sub(limits.title_bar_height)
        .max(0);
    (max_x, max_y)
}

/// Move the left (or top) edge of a span whose far edge sits at `end`.
/// Returns the new origin and length.
fn drag_leading_edge(end: i32, length: i32, offset: i32, min: i32, max_origin: i32) -> (i32, i32) {
    let length = length.saturating_sub(offset).max(min);
    let origin = end.saturating_sub(length).clamp(0, max_origin);
    (origin, end.saturating_sub(origin).max(min))
}
