use super::{BaseCommand, Config, Keybind};

impl Default for Config {
    fn default() -> Self {
        let keybind = vec![
            // Ctrl + Alt + t => Open a terminal
            Keybind {
                command: BaseCommand::OpenApp,
                value: "terminal".to_owned(),
                modifier: Some(vec!["Control".to_owned(), "Alt".to_owned()].into()),
                key: "t".to_owned(),
            },
            // Alt + F4 => Close the active window
            Keybind {
                command: BaseCommand::CloseWindow,
                value: String::default(),
                modifier: Some("Alt".into()),
                key: "F4".to_owned(),
            },
            // Alt + Tab => Focus the next window
            Keybind {
                command: BaseCommand::FocusNextWindow,
                value: String::default(),
                modifier: Some("Alt".into()),
                key: "Tab".to_owned(),
            },
            // Meta => Start menu
            Keybind {
                command: BaseCommand::ToggleStartMenu,
                value: String::default(),
                modifier: None,
                key: "Meta".to_owned(),
            },
        ];

        Self {
            viewport_width: 1280,
            viewport_height: 720,
            taskbar_height: 48,
            default_width: 400,
            default_height: 300,
            min_width: 300,
            min_height: 200,
            title_bar_height: 32,
            min_title_bar_visible: 100,
            cascade_origin: (50, 50),
            cascade_offset: 30,
            focus_new_windows: true,
            log_level: "info".to_owned(),
            keybind,
        }
    }
}
