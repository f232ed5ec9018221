use super::{AppKind, Application};
use deskwm_core::WindowId;

/// An application that only shows some fixed text.
#[derive(Debug, Clone)]
pub struct InfoApp {
    kind: AppKind,
    title: String,
    icon: String,
    lines: Vec<String>,
    window: Option<WindowId>,
}

impl InfoApp {
    pub fn new(kind: AppKind, title: &str, icon: &str, lines: &[&str]) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            icon: icon.to_owned(),
            lines: lines.iter().map(ToString::to_string).collect(),
            window: None,
        }
    }
}

impl Application for InfoApp {
    fn kind(&self) -> AppKind {
        self.kind
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn icon(&self) -> &str {
        &self.icon
    }
    fn render(&self) -> Vec<String> {
        self.lines.clone()
    }
    fn on_mount(&mut self, window: WindowId) {
        tracing::debug!("{} mounted in window {}", self.kind, window);
        self.window = Some(window);
    }
    fn on_unmount(&mut self) {
        tracing::debug!("{} unmounted", self.kind);
        self.window = None;
    }
}

#[derive(Debug, Clone)]
pub struct Terminal {
    cwd: String,
    history: Vec<String>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self {
            cwd: "/".to_owned(),
            history: vec![],
        }
    }
}

impl Terminal {
    /// Record a command line. Only `cd` does anything.
    pub fn run(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if let Some(dir) = line.strip_prefix("cd ") {
            self.cwd = match dir.trim() {
                "/" | "~" => "/".to_owned(),
                ".." => match self.cwd.trim_end_matches('/').rsplit_once('/') {
                    Some(("", _)) | None => "/".to_owned(),
                    Some((parent, _)) => parent.to_owned(),
                },
                path if path.starts_with('/') => path.to_owned(),
                path => format!("{}/{}", self.cwd.trim_end_matches('/'), path),
            };
        }
        self.history.push(line.to_owned());
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }
}

impl Application for Terminal {
    fn kind(&self) -> AppKind {
        AppKind::Terminal
    }
    fn title(&self) -> &str {
        "Terminal"
    }
    fn icon(&self) -> &str {
        "terminal"
    }
    fn size(&self) -> Option<(i32, i32)> {
        Some((640, 400))
    }
    fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.history.iter().map(|l| format!("$ {l}")).collect();
        lines.push(format!("{} $", self.cwd));
        lines
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    display: String,
}

impl Calculator {
    /// Feed one button press. Digits append, `C` clears.
    pub fn press(&mut self, key: char) {
        match key {
            'C' | 'c' => self.display.clear(),
            '0'..='9' | '.' | '+' | '-' | '*' | '/' => self.display.push(key),
            _ => {}
        }
    }

    pub fn display(&self) -> &str {
        if self.display.is_empty() {
            "0"
        } else {
            &self.display
        }
    }
}

impl Application for Calculator {
    fn kind(&self) -> AppKind {
        AppKind::Calculator
    }
    fn title(&self) -> &str {
        "Calculator"
    }
    fn icon(&self) -> &str {
        "calculator"
    }
    fn size(&self) -> Option<(i32, i32)> {
        Some((320, 450))
    }
    fn render(&self) -> Vec<String> {
        vec![format!("[{:>16}]", self.display())]
    }
}
