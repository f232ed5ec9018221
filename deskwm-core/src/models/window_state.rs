use serde::{Deserialize, Serialize};

/// Lifecycle state of a window frame. The states are mutually exclusive.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}
