//! The desktop shell around `deskwm-core`: configuration, applications, the taskbar and
//! the keyboard shortcuts.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
pub mod apps;
pub mod config;
mod desktop;
pub mod script;
mod taskbar;
pub mod utils;

pub use apps::{AppKind, AppRegistry, Application};
pub use config::{BaseCommand, Config, Keybind, Modifier};
pub use desktop::Desktop;
pub use script::ShellInput;
pub use taskbar::{Taskbar, TaskbarButton};
