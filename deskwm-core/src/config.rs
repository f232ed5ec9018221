use crate::models::{FrameLimits, Viewport};

pub trait Config {
    /// Desktop size the manager starts with, before the shell reports a real one.
    fn viewport(&self) -> Viewport;

    fn default_width(&self) -> i32;
    fn default_height(&self) -> i32;
    fn min_width(&self) -> i32;
    fn min_height(&self) -> i32;
    fn title_bar_height(&self) -> i32;
    fn min_title_bar_visible(&self) -> i32;

    /// Where the first window of a cascade is placed.
    fn cascade_origin(&self) -> (i32, i32);
    /// Step between consecutive windows of a cascade, on both axes.
    fn cascade_offset(&self) -> i32;

    fn focus_new_windows(&self) -> bool;

    fn frame_limits(&self) -> FrameLimits {
        FrameLimits {
            min_width: self.min_width(),
            min_height: self.min_height(),
            title_bar_height: self.title_bar_height(),
            min_title_bar_visible: self.min_title_bar_visible(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[allow(clippy::module_name_repetitions)]
    pub struct TestConfig {
        pub viewport: Viewport,
        pub focus_new_windows: bool,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                viewport: Viewport::new(1280, 720, 48),
                focus_new_windows: true,
            }
        }
    }

    impl Config for TestConfig {
        fn viewport(&self) -> Viewport {
            self.viewport
        }
        fn default_width(&self) -> i32 {
            400
        }
        fn default_height(&self) -> i32 {
            300
        }
        fn min_width(&self) -> i32 {
            300
        }
        fn min_height(&self) -> i32 {
            200
        }
        fn title_bar_height(&self) -> i32 {
            32
        }
        fn min_title_bar_visible(&self) -> i32 {
            100
        }
        fn cascade_origin(&self) -> (i32, i32) {
            (50, 50)
        }
        fn cascade_offset(&self) -> i32 {
            30
        }
        fn focus_new_windows(&self) -> bool {
            self.focus_new_windows
        }
    }
}
