use super::Bounds;
use serde::{Deserialize, Serialize};

/// The visible desktop area. The taskbar is docked along the bottom edge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub taskbar_height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            taskbar_height: 48,
        }
    }
}

impl Viewport {
    #[must_use]
    pub const fn new(width: i32, height: i32, taskbar_height: i32) -> Self {
        Self {
            width,
            height,
            taskbar_height,
        }
    }

    /// The area windows may occupy: everything above the taskbar.
    #[must_use]
    pub fn available(&self) -> Bounds {
        let h = self.height.saturating_sub(self.taskbar_height).max(0);
        Bounds::new(0, 0, self.width.max(0), h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_area_excludes_the_taskbar() {
        let viewport = Viewport::new(1024, 768, 48);
        assert_eq!(viewport.available(), Bounds::new(0, 0, 1024, 720));
    }

    #[test]
    fn available_area_never_goes_negative() {
        let viewport = Viewport::new(100, 20, 48);
        assert_eq!(viewport.available().h(), 0);
    }
}
