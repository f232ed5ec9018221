use crate::apps::AppKind;
use anyhow::{ensure, Context, Result};
use deskwm_core::Command;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Things a key combination can be bound to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseCommand {
    /// `value` names the application.
    OpenApp,
    CloseWindow,
    MinimizeWindow,
    ToggleMaximized,
    RestoreWindow,
    FocusNextWindow,
    ToggleStartMenu,
    /// Close every window.
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    OpenApp(AppKind),
    ToggleStartMenu,
    Shutdown,
    Window(Command),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    /// # Errors
    ///
    /// Fails if the command needs a value and it is missing or cannot be parsed.
    pub fn try_convert_to_action(&self) -> Result<KeyAction> {
        let action = match self.command {
            BaseCommand::OpenApp => {
                ensure!(!self.value.is_empty(), "value must not be empty");
                let kind = AppKind::from_str(&self.value)
                    .context("could not parse application for command OpenApp")?;
                KeyAction::OpenApp(kind)
            }
            BaseCommand::ToggleStartMenu => KeyAction::ToggleStartMenu,
            BaseCommand::Shutdown => KeyAction::Shutdown,
            BaseCommand::CloseWindow => KeyAction::Window(Command::CloseWindow),
            BaseCommand::MinimizeWindow => KeyAction::Window(Command::MinimizeWindow),
            BaseCommand::ToggleMaximized => KeyAction::Window(Command::ToggleMaximized),
            BaseCommand::RestoreWindow => KeyAction::Window(Command::RestoreWindow),
            BaseCommand::FocusNextWindow => KeyAction::Window(Command::FocusNextWindow),
        };
        Ok(action)
    }

    /// Whether a key press with exactly these modifiers triggers this binding.
    pub fn matches(&self, modifiers: &[String], key: &str) -> bool {
        if !self.key.eq_ignore_ascii_case(key) {
            return false;
        }
        let bound = self.modifier.as_ref().map(normalize).unwrap_or_default();
        bound == normalize(modifiers)
    }
}

/// Lowercased and sorted, with `None` dropped.
fn normalize(modifiers: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    let mut list: Vec<String> = modifiers
        .into_iter()
        .map(|m| m.as_ref().to_lowercase())
        .filter(|m| !m.is_empty() && m != "none")
        .collect();
    list.sort_unstable();
    list.dedup();
    list
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    pub fn is_empty(&self) -> bool {
        match self {
            Modifier::Single(single) => single.is_empty(),
            Modifier::List(list) => list.is_empty(),
        }
    }
}

impl From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let ms = match self {
            Modifier::Single(m) => vec![m.clone()],
            Modifier::List(ms) => ms.clone(),
        };
        ms.into_iter()
    }
}
