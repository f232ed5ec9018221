//! Window management for a browser style desktop: frames, focus, stacking and the
//! notifications a renderer and taskbar need to follow along.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod errors;
mod event_loop;
pub mod frontends;
mod handlers;
pub mod models;
pub mod state;

pub use command::Command;
pub use config::Config;
pub use display_action::{ChangeKind, DisplayAction};
pub use display_event::DisplayEvent;
pub use frontends::Frontend;
pub use models::Manager;
pub use models::Mode;
pub use models::ResizeEdge;
pub use models::Viewport;
pub use models::Window;
pub use models::WindowId;
pub use models::WindowState;
pub use state::State;
