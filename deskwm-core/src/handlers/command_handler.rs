use crate::command::Command;
use crate::config::Config;
use crate::frontends::Frontend;
use crate::models::Manager;

impl<C: Config, FRONTEND: Frontend> Manager<C, FRONTEND> {
    /* Please also update deskwm/src/config/keybind.rs if any of the following apply after your
     * update:
     * - a command now requires a value
     * - a command no longer requires a value
     * - a new command is introduced
     *  */
    /// Processes a command and invokes the associated function.
    ///
    /// Commands without an explicit target act on the active window.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::debug!("Command: {:?}", command);
        let state = &mut self.state;
        let active = state.focus_manager.active_window;
        match (command, active) {
            (Command::FocusWindow(id), _) => state.focus_window(*id),
            (Command::FocusNextWindow, _) => state.cycle_focus(),
            (Command::CloseWindow, Some(id)) => state.close_window(id),
            (Command::MinimizeWindow, Some(id)) => state.minimize_window(id),
            (Command::ToggleMaximized, Some(id)) => state.toggle_maximize(id),
            (Command::RestoreWindow, Some(id)) => state.restore_window(id),
            (_, None) => false,
        }
    }
}
