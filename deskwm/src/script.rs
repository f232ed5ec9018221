//! Scripted input for the shell, one JSON value per line.
use crate::apps::AppKind;
use crate::desktop::Desktop;
use anyhow::{Context, Result};
use deskwm_core::{DisplayEvent, WindowId};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Open(AppKind),
    Close(AppKind),
    Key {
        #[serde(default)]
        modifier: Vec<String>,
        key: String,
    },
    Event(DisplayEvent),
    ClickTaskbar(WindowId),
    ToggleStartMenu,
    /// Desktop context menu entry, opens the settings.
    Personalize,
    Shutdown,
}

/// Parse a script. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Fails on the first line that can't be read or isn't a valid input.
pub fn parse_script(reader: impl BufRead) -> Result<Vec<ShellInput>> {
    let mut inputs = vec![];
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("couldn't read line {}", index + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let input = serde_json::from_str(line)
            .with_context(|| format!("invalid input on line {}: {line}", index + 1))?;
        inputs.push(input);
    }
    Ok(inputs)
}

impl Desktop {
    /// Returns true if anything changed.
    pub fn apply(&mut self, input: ShellInput) -> bool {
        tracing::trace!("Input: {:?}", input);
        match input {
            ShellInput::Open(kind) => self.open_app(kind).is_some(),
            ShellInput::Close(kind) => self.close_app(kind),
            ShellInput::Key { modifier, key } => self.handle_key(&modifier, &key),
            ShellInput::Event(event) => self.handle_event(event),
            ShellInput::ClickTaskbar(window) => self.click_taskbar(window),
            ShellInput::ToggleStartMenu => {
                self.toggle_start_menu();
                true
            }
            ShellInput::Personalize => self.open_app(AppKind::Settings).is_some(),
            ShellInput::Shutdown => self.shutdown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use deskwm_core::ResizeEdge;

    const SCRIPT: &str = r#"
# open two apps and play with them
{"Open":"terminal"}
{"Open":"calculator"}
{"Event":{"MoveWindow":[1,100,20]}}
{"Event":{"ResizeWindow":[1,"se",40,40]}}
{"Key":{"modifier":["Alt"],"key":"Tab"}}
"ToggleStartMenu"
"#;

    #[test]
    fn scripts_parse_line_by_line() {
        let inputs = parse_script(SCRIPT.as_bytes()).unwrap();
        assert_eq!(inputs.len(), 6);
        assert_eq!(inputs[0], ShellInput::Open(AppKind::Terminal));
        assert_eq!(
            inputs[3],
            ShellInput::Event(DisplayEvent::ResizeWindow(
                WindowId(1),
                ResizeEdge::SouthEast,
                40,
                40
            ))
        );
        assert_eq!(inputs[5], ShellInput::ToggleStartMenu);
    }

    #[test]
    fn bad_lines_name_their_line_number() {
        let err = parse_script("\"ToggleStartMenu\"\n{\"Open\":\"solitaire\"}\n".as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn a_script_drives_the_desktop() {
        let mut desktop = Desktop::new(Config::default());
        for input in parse_script(SCRIPT.as_bytes()).unwrap() {
            desktop.apply(input);
        }
        let state = desktop.state();
        assert_eq!(state.active_window, Some(WindowId(1)));
        let terminal = state.windows.iter().find(|w| w.id == WindowId(1)).unwrap();
        assert_eq!(
            (terminal.bounds.x(), terminal.bounds.y(), terminal.bounds.w(), terminal.bounds.h()),
            (150, 70, 680, 440)
        );
        assert!(desktop.is_start_menu_open());
    }

    #[test]
    fn shutdown_from_a_script_empties_the_desktop() {
        let script = "\"Personalize\"\n{\"Open\":\"terminal\"}\n\"Shutdown\"\n";
        let inputs = parse_script(script.as_bytes()).unwrap();
        assert_eq!(inputs[0], ShellInput::Personalize);
        assert_eq!(inputs[2], ShellInput::Shutdown);

        let mut desktop = Desktop::new(Config::default());
        assert!(desktop.apply(inputs[0].clone()));
        assert!(desktop.app_window(AppKind::Settings).is_some());
        desktop.apply(inputs[1].clone());
        assert_eq!(desktop.running_apps().count(), 2);
        assert!(desktop.apply(inputs[2].clone()));
        assert_eq!(desktop.running_apps().count(), 0);
        assert!(desktop.state().windows.is_empty());
    }
}
