use crate::config::Config;
use crate::display_event::DisplayEvent;
use crate::frontends::Frontend;
use crate::models::{Manager, Window, WindowId};

impl<C: Config, FRONTEND: Frontend> Manager<C, FRONTEND> {
    /// Open a new window and hand the resulting notifications to the frontend.
    pub fn create_window(&mut self, title: &str, icon: &str, size: Option<(i32, i32)>) -> WindowId {
        let id = self.state.create_window(title, icon, size);
        self.update_frontend(true);
        id
    }

    /// Apply one event and flush.
    /// Returns true if anything changed.
    pub fn process_event(&mut self, event: DisplayEvent) -> bool {
        let needs_update = self.display_event_handler(event);
        self.update_frontend(needs_update);
        needs_update
    }

    /// Apply a batch of events. Notifications are flushed after every event so the
    /// frontend sees them in the order they happened.
    pub fn process_events(&mut self, events: impl IntoIterator<Item = DisplayEvent>) -> bool {
        events
            .into_iter()
            .fold(false, |needs_update, event| self.process_event(event) || needs_update)
    }

    fn update_frontend(&mut self, needs_update: bool) {
        if needs_update {
            // While dragging only the grabbed window changes.
            match self.state.mode.window() {
                Some(id) => {
                    let windows: Vec<&Window> = self.state.window(id).into_iter().collect();
                    self.frontend.update_windows(windows);
                }
                None => {
                    let windows = self.state.stacking_order();
                    self.frontend.update_windows(windows);
                }
            }
        }

        // Preform any actions requested by the handler.
        while let Some(act) = self.state.actions.pop_front() {
            self.frontend.execute_action(act);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::display_action::DisplayAction;
    use crate::{DisplayEvent, Manager};

    #[test]
    fn notifications_are_flushed_to_the_frontend() {
        let mut manager = Manager::new_test();
        let id = manager.create_window("A", "a", None);
        assert!(manager.state.actions.is_empty());
        assert!(matches!(
            manager.frontend.actions.first(),
            Some(DisplayAction::AddedWindow(w)) if w.id == id
        ));
        assert_eq!(manager.frontend.rendered, vec![id]);
    }

    #[test]
    fn only_the_dragged_window_is_rendered_during_a_session() {
        let mut manager = Manager::new_test();
        let a = manager.create_window("A", "a", None);
        let b = manager.create_window("B", "b", None);
        manager.process_events([DisplayEvent::BeginMove(a, 0, 0), DisplayEvent::Motion(5, 5)]);
        assert_eq!(manager.frontend.rendered, vec![a]);
        manager.process_event(DisplayEvent::Release);
        assert_eq!(manager.frontend.rendered, vec![b, a]);
    }

    #[test]
    fn notifications_keep_their_order() {
        let mut manager = Manager::new_test();
        let a = manager.create_window("A", "a", None);
        manager.frontend.actions.clear();
        manager.process_events([
            DisplayEvent::MinimizeWindow(a),
            DisplayEvent::FocusWindow(a),
        ]);
        assert_eq!(
            manager.frontend.actions,
            vec![
                DisplayAction::MinimizedWindow(a),
                DisplayAction::Unfocus(Some(a)),
                DisplayAction::RestoredWindow(a),
                DisplayAction::WindowTakeFocus {
                    window: a,
                    previous: None
                },
            ]
        );
    }

    #[test]
    fn unchanged_batches_report_nothing() {
        let mut manager = Manager::new_test();
        assert!(!manager.process_events([DisplayEvent::Release, DisplayEvent::CycleFocus]));
        assert!(manager.frontend.actions.is_empty());
    }
}
