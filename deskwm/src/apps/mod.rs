//! Applications that can be mounted into a window frame.
mod builtin;

pub use builtin::{Calculator, InfoApp, Terminal};

use deskwm_core::WindowId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Unknown application: {0}")]
    UnknownApp(String),
}

/// Every application the desktop knows how to start. Each one runs at most once.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    FileManager,
    TextEditor,
    Calculator,
    Terminal,
    Browser,
    Settings,
}

impl AppKind {
    pub const ALL: [Self; 6] = [
        Self::FileManager,
        Self::TextEditor,
        Self::Calculator,
        Self::Terminal,
        Self::Browser,
        Self::Settings,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileManager => "filemanager",
            Self::TextEditor => "texteditor",
            Self::Calculator => "calculator",
            Self::Terminal => "terminal",
            Self::Browser => "browser",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| AppError::UnknownApp(s.to_owned()))
    }
}

/// Content living inside a window frame.
pub trait Application {
    fn kind(&self) -> AppKind;
    fn title(&self) -> &str;
    fn icon(&self) -> &str;

    /// Frame size to open with. `None` uses the configured default.
    fn size(&self) -> Option<(i32, i32)> {
        None
    }

    /// Lines of text drawn inside the frame.
    fn render(&self) -> Vec<String>;

    /// The frame exists and the content is attached to it.
    fn on_mount(&mut self, _window: WindowId) {}

    /// The frame is gone. Release anything tied to it.
    fn on_unmount(&mut self) {}
}

type AppFactory = fn() -> Box<dyn Application>;

/// Maps an application kind to the code that builds it.
pub struct AppRegistry {
    factories: BTreeMap<AppKind, AppFactory>,
}

impl fmt::Debug for AppRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.factories.keys()).finish()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(AppKind::FileManager, || {
            Box::new(InfoApp::new(
                AppKind::FileManager,
                "File Manager",
                "folder",
                &["/", "  Desktop/", "  Documents/", "  Pictures/"],
            ))
        });
        registry.register(AppKind::TextEditor, || {
            Box::new(InfoApp::new(
                AppKind::TextEditor,
                "Text Editor",
                "file-text",
                &["untitled.txt", ""],
            ))
        });
        registry.register(AppKind::Calculator, || Box::<Calculator>::default());
        registry.register(AppKind::Terminal, || Box::<Terminal>::default());
        registry.register(AppKind::Browser, || {
            Box::new(InfoApp::new(
                AppKind::Browser,
                "Browser",
                "globe",
                &["about:blank"],
            ))
        });
        registry.register(AppKind::Settings, || {
            Box::new(InfoApp::new(
                AppKind::Settings,
                "Settings",
                "cog",
                &["Display", "Personalization", "About"],
            ))
        });
        registry
    }
}

impl AppRegistry {
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register (or replace) the factory for `kind`.
    pub fn register(&mut self, kind: AppKind, factory: AppFactory) {
        self.factories.insert(kind, factory);
    }

    pub fn launch(&self, kind: AppKind) -> Option<Box<dyn Application>> {
        self.factories.get(&kind).map(|factory| factory())
    }

    pub fn kinds(&self) -> impl Iterator<Item = AppKind> + '_ {
        self.factories.keys().copied()
    }
}
