//! The window registry.

use crate::config::Config;
use crate::models::{Bounds, FocusManager, FrameLimits, Mode, Viewport, Window, WindowId};
use crate::DisplayAction;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Debug)]
pub struct State {
    pub windows: Vec<Window>,
    pub focus_manager: FocusManager,
    pub viewport: Viewport,
    pub limits: FrameLimits,
    pub mode: Mode,
    pub actions: VecDeque<DisplayAction>,
    pub default_width: i32,
    pub default_height: i32,
    pub cascade_origin: (i32, i32),
    pub cascade_offset: i32,
    next_window_id: u32,
    next_z: u32,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            focus_manager: FocusManager::new(config),
            viewport: config.viewport(),
            limits: config.frame_limits(),
            windows: Default::default(),
            mode: Default::default(),
            actions: Default::default(),
            default_width: config.default_width(),
            default_height: config.default_height(),
            cascade_origin: config.cascade_origin(),
            cascade_offset: config.cascade_offset(),
            next_window_id: 1,
            next_z: 1,
        }
    }

    #[must_use]
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub(crate) fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Live windows, bottom most first.
    #[must_use]
    pub fn stacking_order(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// The visible window drawn above all others.
    #[must_use]
    pub fn topmost(&self) -> Option<&Window> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized())
            .max_by_key(|w| w.z_order)
    }

    pub(crate) fn allocate_window_id(&mut self) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;
        id
    }

    /// Hand out the next stacking value. Values are never handed out twice.
    pub(crate) fn allocate_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Replace a window's bounds, queueing `notify` if anything changed.
    pub(crate) fn set_window_bounds(
        &mut self,
        id: WindowId,
        bounds: Bounds,
        notify: fn(WindowId) -> DisplayAction,
    ) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        if window.bounds == bounds {
            return false;
        }
        window.bounds = bounds;
        self.actions.push_back(notify(id));
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::models::WindowId;
    use crate::Manager;

    #[test]
    fn ids_are_never_reused() {
        let mut manager = Manager::new_test();
        let a = manager.state.create_window("A", "a", None);
        manager.state.close_window(a);
        let b = manager.state.create_window("B", "b", None);
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn stacking_order_is_bottom_to_top() {
        let mut manager = Manager::new_test();
        let a = manager.state.create_window("A", "a", None);
        let b = manager.state.create_window("B", "b", None);
        manager.state.focus_window(a);
        let order: Vec<WindowId> = manager.state.stacking_order().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, a]);
        assert_eq!(manager.state.topmost().map(|w| w.id), Some(a));
    }

    #[test]
    fn state_can_be_serialized() {
        let mut manager = Manager::new_test();
        manager.state.create_window("A", "a", None);
        let json = serde_json::to_string(&manager.state).unwrap();
        assert!(json.contains("\"title\":\"A\""));
    }
}
