use crate::config::Config;
use crate::display_event::DisplayEvent;
use crate::frontends::Frontend;
use crate::models::Manager;

impl<C: Config, FRONTEND: Frontend> Manager<C, FRONTEND> {
    /// Apply a single event to the manager.
    /// Returns true if changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        tracing::trace!("Handling event: {:?}", event);
        let state = &mut self.state;
        match event {
            DisplayEvent::MoveWindow(id, dx, dy) => state.move_window(id, dx, dy),
            DisplayEvent::ResizeWindow(id, edge, dx, dy) => state.resize_window(id, edge, dx, dy),

            DisplayEvent::BeginMove(id, x, y) => state.begin_move(id, x, y),
            DisplayEvent::BeginResize(id, edge, x, y) => state.begin_resize(id, edge, x, y),
            DisplayEvent::Motion(x, y) => state.pointer_motion(x, y),
            DisplayEvent::Release => state.pointer_release(),
            DisplayEvent::CancelSession => state.cancel_session(),

            DisplayEvent::FocusWindow(id) => state.focus_window(id),
            DisplayEvent::CycleFocus => state.cycle_focus(),
            DisplayEvent::MinimizeWindow(id) => state.minimize_window(id),
            DisplayEvent::ToggleMaximize(id) => state.toggle_maximize(id),
            DisplayEvent::RestoreWindow(id) => state.restore_window(id),
            DisplayEvent::CloseWindow(id) => state.close_window(id),
            DisplayEvent::RenameWindow(id, title) => state.rename_window(id, &title),

            DisplayEvent::ViewportResize(width, height) => {
                state.viewport_resize_handler(width, height)
            }

            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}
