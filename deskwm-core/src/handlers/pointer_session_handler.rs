use super::window_move_handler::moved_bounds;
use super::window_resize_handler::resized_bounds;
use crate::display_action::DisplayAction;
use crate::models::{Mode, PointerSession, ResizeEdge, WindowId};
use crate::state::State;

impl State {
    /// Pointer pressed on a title bar: focus the window and, unless it is maximized,
    /// start dragging it.
    pub fn begin_move(&mut self, id: WindowId, x: i32, y: i32) -> bool {
        if self.window(id).is_none() {
            return false;
        }
        let mut changed = self.end_pointer_session();
        changed = self.focus_window(id) || changed;
        let Some(window) = self.window(id).filter(|w| w.can_move()) else {
            return changed;
        };
        self.mode = Mode::MovingWindow(PointerSession::new(id, window.bounds, (x, y)));
        self.actions.push_back(DisplayAction::ReadyToMoveWindow(id));
        true
    }

    /// Pointer pressed on one of the resize handles.
    pub fn begin_resize(&mut self, id: WindowId, edge: ResizeEdge, x: i32, y: i32) -> bool {
        if self.window(id).is_none() {
            return false;
        }
        let mut changed = self.end_pointer_session();
        changed = self.focus_window(id) || changed;
        let Some(window) = self.window(id).filter(|w| w.can_resize()) else {
            return changed;
        };
        self.mode = Mode::ResizingWindow(PointerSession::new(id, window.bounds, (x, y)), edge);
        self.actions
            .push_back(DisplayAction::ReadyToResizeWindow(id, edge));
        true
    }

    /// Pointer moved while a session is running.
    pub fn pointer_motion(&mut self, x: i32, y: i32) -> bool {
        let (viewport, limits) = (self.viewport, self.limits);
        match self.mode {
            Mode::MovingWindow(session) => {
                let (dx, dy) = session.delta(x, y);
                let target = moved_bounds(session.start, dx, dy, &viewport, &limits);
                self.set_window_bounds(session.window, target, DisplayAction::MovedWindow)
            }
            Mode::ResizingWindow(session, edge) => {
                let (dx, dy) = session.delta(x, y);
                let target = resized_bounds(session.start, edge, dx, dy, &viewport, &limits);
                self.set_window_bounds(session.window, target, DisplayAction::ResizedWindow)
            }
            Mode::Normal => false,
        }
    }

    /// Pointer released: keep whatever bounds the window has now.
    pub fn pointer_release(&mut self) -> bool {
        self.end_pointer_session()
    }

    /// Put the window back where the session found it and stop.
    pub fn cancel_session(&mut self) -> bool {
        let (session, notify): (PointerSession, fn(WindowId) -> DisplayAction) = match self.mode {
            Mode::MovingWindow(session) => (session, DisplayAction::MovedWindow),
            Mode::ResizingWindow(session, _) => (session, DisplayAction::ResizedWindow),
            Mode::Normal => return false,
        };
        self.set_window_bounds(session.window, session.start, notify);
        self.end_pointer_session()
    }

    /// Leave move/resize mode. The frontend is told so it can drop its pointer listeners.
    pub(crate) fn end_pointer_session(&mut self) -> bool {
        if self.mode == Mode::Normal {
            return false;
        }
        self.mode = Mode::Normal;
        self.actions.push_back(DisplayAction::NormalMode);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bounds;
    use crate::Manager;

    #[test]
    fn dragging_moves_by_the_total_pointer_travel() {
        let mut manager = Manager::new_test();
        let id = manager.state.create_window("A", "a", None);
        assert!(manager.state.begin_move(id, 100, 60));
        manager.state.pointer_motion(110, 65);
        manager.state.pointer_motion(130, 90);
        manager.state.pointer_release();
        assert_eq!(manager.state.window(id).unwrap().bounds, Bounds::new(80, 80, 400, 300));
        assert_eq!(manager.state.mode, Mode::Normal);
    }

    #[test]
    fn dragging_into_a_wall_does_not_drift() {
        let mut manager = Manager::new_test();
        let id = manager.state.create_window("A", "a", None);
        manager.state.begin_move(id, 100, 100);
        // Far past the top left corner and back again.
        manager.state.pointer_motion(-400, -400);
        manager.state.pointer_motion(110, 110);
        assert_eq!(manager.state.window(id).unwrap().bounds, Bounds::new(60, 60, 400, 300));
    }

    #[test]
    fn resizing_session_works_from_the_start_bounds() {
        let mut manager = Manager::new_test();
        let id = manager.state.create_window("A", "a", None);
        manager.state.begin_resize(id, ResizeEdge::SouthEast, 450, 350);
        manager.state.pointer_motion(300, 300);
        manager.state.pointer_motion(500, 360);
        manager.state.pointer_release();
        assert_eq!(manager.state.window(id).unwrap().bounds, Bounds::new(50, 50, 450, 310));
    }

    #[test]
    fn sessions_attach_and_release_pointer_listeners() {
        let mut manager = Manager::new_test();
        let id = manager.state.create_window("A", "a", None);
        manager.state.actions.clear();
        manager.state.begin_move(id, 0, 0);
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::ReadyToMoveWindow(id))
        );
        manager.state.pointer_release();
        assert_eq!(manager.state.actions.back(), Some(&DisplayAction::NormalMode));
    }

    #[test]
    fn maximized_windows_are_focused_but_not_dragged() {
        let mut manager = Manager::new_test();
        let a = manager.state.create_window("A", "a", None);
        manager.state.create_window("B", "b", None);
        manager.state.toggle_maximize(a);
        manager.state.begin_move(a, 10, 10);
        assert_eq!(manager.state.mode, Mode::Normal);
        assert_eq!(manager.state.focus_manager.active_window, Some(a));
        assert!(!manager.state.pointer_motion(200, 200));
    }

    #[test]
    fn closing_mid_drag_ends_the_session() {
        let mut manager = Manager::new_test();
        let id = manager.state.create_window("A", "a", None);
        manager.state.begin_move(id, 0, 0);
        manager.state.close_window(id);
        assert_eq!(manager.state.mode, Mode::Normal);
        assert!(manager.state.actions.contains(&DisplayAction::NormalMode));
        assert!(!manager.state.pointer_motion(50, 50));
    }

    #[test]
    fn cancelling_puts_the_window_back() {
        let mut manager = Manager::new_test();
        let id = manager.state.create_window("A", "a", None);
        let before = manager.state.window(id).unwrap().bounds;
        manager.state.begin_resize(id, ResizeEdge::West, 50, 100);
        manager.state.pointer_motion(0, 100);
        assert_ne!(manager.state.window(id).unwrap().bounds, before);
        assert!(manager.state.cancel_session());
        assert_eq!(manager.state.window(id).unwrap().bounds, before);
        assert_eq!(manager.state.mode, Mode::Normal);
    }

    #[test]
    fn release_without_a_session_is_a_no_op() {
        let mut manager = Manager::new_test();
        assert!(!manager.state.pointer_release());
        assert!(!manager.state.cancel_session());
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn starting_a_new_session_ends_the_old_one() {
        let mut manager = Manager::new_test();
        let a = manager.state.create_window("A", "a", None);
        let b = manager.state.create_window("B", "b", None);
        manager.state.begin_move(a, 0, 0);
        manager.state.begin_resize(b, ResizeEdge::East, 0, 0);
        assert_eq!(manager.state.mode.window(), Some(b));
        let released = manager
            .state
            .actions
            .iter()
            .filter(|a| **a == DisplayAction::NormalMode)
            .count();
        assert_eq!(released, 1);
    }

    #[test]
    fn pointer_at_the_integer_limits_is_clamped() {
        let mut manager = Manager::new_test();
        let id = manager.state.create_window("A", "a", None);
        manager.state.begin_move(id, -100, 100);
        manager.state.pointer_motion(i32::MAX, i32::MIN);
        let bounds = manager.state.window(id).unwrap().bounds;
        assert_eq!((bounds.x(), bounds.y()), (1180, 0));
        manager.state.pointer_release();

        manager.state.begin_resize(id, ResizeEdge::NorthWest, 100, -100);
        manager.state.pointer_motion(i32::MIN, i32::MAX);
        let bounds = manager.state.window(id).unwrap().bounds;
        assert!((0..=1180).contains(&bounds.x()));
        assert!((0..=640).contains(&bounds.y()));
        assert!(bounds.w() >= 300 && bounds.h() >= 200);
    }

    #[test]
    fn resize_session_at_the_clamp_limit_keeps_the_title_bar_reachable() {
        let mut manager = Manager::new_test();
        let id = manager.state.create_window("A", "a", None);
        manager.state.move_window(id, 5000, 5000);
        let parked = manager.state.window(id).unwrap().bounds;
        manager.state.begin_resize(id, ResizeEdge::NorthWest, 1180, 640);
        manager.state.pointer_motion(1280, 740);
        manager.state.pointer_release();
        assert_eq!(manager.state.window(id).unwrap().bounds, parked);
    }
}
