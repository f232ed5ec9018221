mod command_handler;
mod display_event_handler;
mod focus_handler;
mod pointer_session_handler;
mod viewport_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;
mod window_state_handler;

pub(crate) use window_move_handler::clamp_position;
