use deskwm_core::{Config, DisplayAction, Frontend, WindowId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskbarButton {
    pub window: WindowId,
    pub title: String,
    pub icon: String,
    pub active: bool,
    pub minimized: bool,
}

/// The taskbar, kept in sync purely from the window manager notifications.
#[derive(Debug, Default)]
pub struct Taskbar {
    buttons: Vec<TaskbarButton>,
    closed: Vec<WindowId>,
}

impl Taskbar {
    /// Buttons in opening order.
    pub fn buttons(&self) -> &[TaskbarButton] {
        &self.buttons
    }

    pub fn button(&self, window: WindowId) -> Option<&TaskbarButton> {
        self.buttons.iter().find(|b| b.window == window)
    }

    /// Windows destroyed since the last call.
    pub fn take_closed(&mut self) -> Vec<WindowId> {
        std::mem::take(&mut self.closed)
    }

    fn button_mut(&mut self, window: WindowId) -> Option<&mut TaskbarButton> {
        self.buttons.iter_mut().find(|b| b.window == window)
    }

    fn set_active(&mut self, window: WindowId, active: bool) {
        if let Some(button) = self.button_mut(window) {
            button.active = active;
        }
    }
}

impl Frontend for Taskbar {
    fn new(_config: &impl Config) -> Self {
        Self::default()
    }

    fn execute_action(&mut self, act: DisplayAction) {
        if !act.touches_taskbar() {
            return;
        }
        match act {
            DisplayAction::AddedWindow(window) => {
                let minimized = window.is_minimized();
                self.buttons.push(TaskbarButton {
                    window: window.id,
                    title: window.title,
                    icon: window.icon,
                    active: false,
                    minimized,
                });
            }
            DisplayAction::WindowTakeFocus { window, previous } => {
                if let Some(previous) = previous {
                    self.set_active(previous, false);
                }
                self.set_active(window, true);
            }
            DisplayAction::Unfocus(Some(window)) => self.set_active(window, false),
            DisplayAction::MinimizedWindow(window) => {
                if let Some(button) = self.button_mut(window) {
                    button.minimized = true;
                    button.active = false;
                }
            }
            DisplayAction::RestoredWindow(window) => {
                if let Some(button) = self.button_mut(window) {
                    button.minimized = false;
                }
            }
            DisplayAction::SetWindowTitle(window, title) => {
                if let Some(button) = self.button_mut(window) {
                    button.title = title;
                }
            }
            DisplayAction::DestroyedWindow(window) => {
                self.buttons.retain(|b| b.window != window);
                self.closed.push(window);
            }
            _ => {}
        }
    }
}
