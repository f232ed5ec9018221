//! `DeskWM` general configuration

mod checks;
mod default;
mod keybind;

pub use keybind::{BaseCommand, KeyAction, Keybind, Modifier};

use anyhow::{Context, Result};
use deskwm_core::models::Viewport;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Desktop size used until the host reports the real one.
    pub viewport_width: i32,
    pub viewport_height: i32,
    pub taskbar_height: i32,
    pub default_width: i32,
    pub default_height: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub title_bar_height: i32,
    /// How much of a title bar has to stay on screen, in pixels.
    pub min_title_bar_visible: i32,
    pub cascade_origin: (i32, i32),
    pub cascade_offset: i32,
    pub focus_new_windows: bool,
    pub log_level: String,
    pub keybind: Vec<Keybind>,
}

#[must_use]
pub fn load() -> Config {
    load_from_file(None)
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// Returns the path of `config.toml` in the XDG config directory, creating the directory
/// if needed.
///
/// # Errors
///
/// Fails if the base directories can't be determined or the directory can't be created.
pub fn default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("deskwm")?;
    Ok(path.place_config_file("config.toml")?)
}

/// Load the configuration at `path`, or at the default location.
/// A missing file is created with the defaults.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.toml, if config.toml cannot be read (access writes, malformed file,
/// etc.).
/// Function can also error from inability to save config.toml (if it is the first time running
/// `DeskWM`).
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let config_filename = match path {
        Some(path) => path.to_owned(),
        None => default_path()?,
    };
    if config_filename.exists() {
        let contents = fs::read_to_string(&config_filename)
            .with_context(|| format!("couldn't read {}", config_filename.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("couldn't parse {}", config_filename.display()))?;
        Ok(config)
    } else {
        let config = Config::default();
        let toml = toml::to_string(&config)?;
        fs::write(&config_filename, toml)
            .with_context(|| format!("couldn't write {}", config_filename.display()))?;
        tracing::info!("Wrote default config to {}", config_filename.display());
        Ok(config)
    }
}

impl deskwm_core::Config for Config {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height, self.taskbar_height)
    }

    fn default_width(&self) -> i32 {
        self.default_width
    }

    fn default_height(&self) -> i32 {
        self.default_height
    }

    fn min_width(&self) -> i32 {
        self.min_width
    }

    fn min_height(&self) -> i32 {
        self.min_height
    }

    fn title_bar_height(&self) -> i32 {
        self.title_bar_height
    }

    fn min_title_bar_visible(&self) -> i32 {
        self.min_title_bar_visible
    }

    fn cascade_origin(&self) -> (i32, i32) {
        self.cascade_origin
    }

    fn cascade_offset(&self) -> i32 {
        self.cascade_offset
    }

    fn focus_new_windows(&self) -> bool {
        self.focus_new_windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = load_from_file(Some(path.as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
        // And reads back the same.
        assert_eq!(load_from_file(Some(path.as_path())).unwrap(), config);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min_width = 250\nfocus_new_windows = false\n").unwrap();
        let config = load_from_file(Some(path.as_path())).unwrap();
        assert_eq!(config.min_width, 250);
        assert!(!config.focus_new_windows);
        assert_eq!(config.default_width, 400);
        assert_eq!(config.keybind.len(), 4);
    }

    #[test]
    fn keybinds_can_be_configured() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let toml = r#"
[[keybind]]
command = "OpenApp"
value = "calculator"
modifier = ["Control", "Alt"]
key = "c"

[[keybind]]
command = "ToggleMaximized"
modifier = "Super"
key = "Up"
"#;
        fs::write(&path, toml).unwrap();
        let config = load_from_file(Some(path.as_path())).unwrap();
        assert_eq!(config.keybind.len(), 2);
        assert_eq!(config.keybind[1].command, BaseCommand::ToggleMaximized);
        assert_eq!(config.keybind[1].modifier, Some(Modifier::Single("Super".to_owned())));
    }

    #[test]
    fn malformed_files_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min_width = \"wide\"").unwrap();
        assert!(load_from_file(Some(path.as_path())).is_err());
    }

    #[test]
    fn config_feeds_the_core() {
        use deskwm_core::Config as _;
        let config = Config::default();
        assert_eq!(config.viewport(), Viewport::new(1280, 720, 48));
        assert_eq!(config.frame_limits().min_title_bar_visible, 100);
    }
}
