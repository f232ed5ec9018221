//! Objects (such as windows) used to develop `deskwm`.
mod bounds;
mod focus_manager;
mod frame_limits;
mod manager;
mod mode;
mod resize_edge;
mod viewport;
mod window;
mod window_state;

pub mod dto;

pub use bounds::Bounds;
pub use focus_manager::FocusManager;
pub use frame_limits::FrameLimits;
pub use manager::Manager;
pub use mode::Mode;
pub use mode::PointerSession;
pub use resize_edge::ResizeEdge;
pub use viewport::Viewport;
pub use window::Window;
pub use window::WindowId;
pub use window_state::WindowState;
