use super::Config;
use super::DisplayAction;
use super::Frontend;
use crate::models::{Window, WindowId};

/// Records everything it is told, for assertions.
#[derive(Clone, Default, Debug)]
pub struct MockFrontend {
    pub actions: Vec<DisplayAction>,
    pub rendered: Vec<WindowId>,
}

impl Frontend for MockFrontend {
    fn new(_: &impl Config) -> Self {
        Self::default()
    }

    fn update_windows(&mut self, windows: Vec<&Window>) {
        self.rendered = windows.iter().map(|w| w.id).collect();
    }

    fn execute_action(&mut self, act: DisplayAction) {
        self.actions.push(act);
    }
}
