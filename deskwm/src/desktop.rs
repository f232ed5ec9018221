use crate::apps::{AppKind, AppRegistry, Application};
use crate::config::{Config, KeyAction, Keybind};
use crate::taskbar::Taskbar;
use deskwm_core::models::dto::ManagerState;
use deskwm_core::{DisplayEvent, Manager, WindowId};
use std::collections::BTreeMap;

struct RunningApp {
    window: WindowId,
    app: Box<dyn Application>,
}

/// The whole shell: the window manager, the applications mounted into its windows, the
/// taskbar and the start menu.
pub struct Desktop {
    manager: Manager<Config, Taskbar>,
    registry: AppRegistry,
    running: BTreeMap<AppKind, RunningApp>,
    start_menu_open: bool,
}

impl Desktop {
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, AppRegistry::default())
    }

    pub fn with_registry(config: Config, registry: AppRegistry) -> Self {
        Self {
            manager: Manager::new(config),
            registry,
            running: BTreeMap::new(),
            start_menu_open: false,
        }
    }

    pub fn manager(&self) -> &Manager<Config, Taskbar> {
        &self.manager
    }

    pub fn taskbar(&self) -> &Taskbar {
        &self.manager.frontend
    }

    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    /// The window an application is running in, if it is running.
    pub fn app_window(&self, kind: AppKind) -> Option<WindowId> {
        self.running.get(&kind).map(|r| r.window)
    }

    pub fn running_apps(&self) -> impl Iterator<Item = (AppKind, WindowId)> + '_ {
        self.running.iter().map(|(kind, r)| (*kind, r.window))
    }

    /// Start an application, or bring its window forward if it is already running.
    pub fn open_app(&mut self, kind: AppKind) -> Option<WindowId> {
        self.start_menu_open = false;
        if let Some(window) = self.app_window(kind) {
            self.handle_event(DisplayEvent::FocusWindow(window));
            return Some(window);
        }
        let Some(mut app) = self.registry.launch(kind) else {
            tracing::warn!("No application registered for {}", kind);
            return None;
        };
        let window = self.manager.create_window(app.title(), app.icon(), app.size());
        app.on_mount(window);
        self.running.insert(kind, RunningApp { window, app });
        tracing::info!("Opened {} in window {}", kind, window);
        Some(window)
    }

    pub fn close_app(&mut self, kind: AppKind) -> bool {
        match self.app_window(kind) {
            Some(window) => self.handle_event(DisplayEvent::CloseWindow(window)),
            None => false,
        }
    }

    /// Feed an event to the window manager. Applications whose window went away are
    /// unmounted.
    pub fn handle_event(&mut self, event: DisplayEvent) -> bool {
        let changed = self.manager.process_event(event);
        self.unmount_closed();
        changed
    }

    /// Run whatever is bound to this key combination.
    pub fn handle_key(&mut self, modifiers: &[String], key: &str) -> bool {
        let Some(action) = self
            .manager
            .config
            .keybind
            .iter()
            .find(|k| k.matches(modifiers, key))
            .map(Keybind::try_convert_to_action)
        else {
            return false;
        };
        match action {
            Ok(KeyAction::OpenApp(kind)) => self.open_app(kind).is_some(),
            Ok(KeyAction::ToggleStartMenu) => {
                self.toggle_start_menu();
                true
            }
            Ok(KeyAction::Shutdown) => self.shutdown(),
            Ok(KeyAction::Window(command)) => self.handle_event(DisplayEvent::SendCommand(command)),
            Err(err) => {
                tracing::warn!("Ignoring keybind for {}: {:#}", key, err);
                false
            }
        }
    }

    /// Close every window, unmounting the applications in them.
    pub fn shutdown(&mut self) -> bool {
        self.start_menu_open = false;
        let windows: Vec<WindowId> = self.manager.state.windows.iter().map(|w| w.id).collect();
        let mut changed = false;
        for window in windows {
            changed = self.handle_event(DisplayEvent::CloseWindow(window)) || changed;
        }
        tracing::info!("Shut down, {} application(s) still running", self.running.len());
        changed
    }

    /// A taskbar button was clicked: bring its window back and focus it.
    pub fn click_taskbar(&mut self, window: WindowId) -> bool {
        self.handle_event(DisplayEvent::FocusWindow(window))
    }

    /// Returns whether the menu is open afterwards.
    pub fn toggle_start_menu(&mut self) -> bool {
        self.start_menu_open = !self.start_menu_open;
        self.start_menu_open
    }

    pub fn state(&self) -> ManagerState {
        ManagerState::from(&self.manager.state)
    }

    /// Plain text picture of the desktop, bottom most window first.
    pub fn render(&self) -> String {
        let state = &self.manager.state;
        let viewport = state.viewport;
        let mut lines = vec![format!(
            "Desktop {}x{}{}",
            viewport.width,
            viewport.height,
            if self.start_menu_open {
                " (start menu open)"
            } else {
                ""
            }
        )];

        for window in state.stacking_order() {
            if window.is_minimized() {
                continue;
            }
            let bounds = window.bounds;
            let marker = if state.focus_manager.is_active(window.id) {
                " *"
            } else {
                ""
            };
            lines.push(format!(
                "[{}] {} {} ({},{} {}x{}) {:?}{}",
                window.id,
                window.icon,
                window.title,
                bounds.x(),
                bounds.y(),
                bounds.w(),
                bounds.h(),
                window.state(),
                marker
            ));
            if let Some(running) = self.running.values().find(|r| r.window == window.id) {
                lines.extend(running.app.render().into_iter().map(|l| format!("    {l}")));
            }
        }

        let buttons: Vec<String> = self
            .taskbar()
            .buttons()
            .iter()
            .map(|b| {
                let flag = if b.active {
                    "*"
                } else if b.minimized {
                    "_"
                } else {
                    ""
                };
                format!("[{flag}{}]", b.title)
            })
            .collect();
        lines.push(format!("Taskbar: {}", buttons.join(" ")));
        lines.join("\n")
    }

    fn unmount_closed(&mut self) {
        for window in self.manager.frontend.take_closed() {
            let Some(kind) = self
                .running
                .iter()
                .find(|(_, r)| r.window == window)
                .map(|(kind, _)| *kind)
            else {
                continue;
            };
            if let Some(mut running) = self.running.remove(&kind) {
                running.app.on_unmount();
                tracing::info!("Closed {}", kind);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::InfoApp;
    use deskwm_core::WindowState;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn keys(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn apps_run_at_most_once() {
        let mut desktop = Desktop::new(Config::default());
        let first = desktop.open_app(AppKind::Terminal).unwrap();
        desktop.open_app(AppKind::Calculator).unwrap();
        let again = desktop.open_app(AppKind::Terminal).unwrap();
        assert_eq!(first, again);
        assert_eq!(desktop.manager().state.windows.len(), 2);
        assert_eq!(desktop.state().active_window, Some(first));
    }

    #[test]
    fn apps_open_at_their_preferred_size() {
        let mut desktop = Desktop::new(Config::default());
        let window = desktop.open_app(AppKind::Terminal).unwrap();
        let bounds = desktop.manager().state.window(window).unwrap().bounds;
        assert_eq!((bounds.w(), bounds.h()), (640, 400));
    }

    static UNMOUNTED: AtomicUsize = AtomicUsize::new(0);

    struct Counting(InfoApp, &'static AtomicUsize);

    impl Application for Counting {
        fn kind(&self) -> AppKind {
            self.0.kind()
        }
        fn title(&self) -> &str {
            self.0.title()
        }
        fn icon(&self) -> &str {
            self.0.icon()
        }
        fn render(&self) -> Vec<String> {
            self.0.render()
        }
        fn on_unmount(&mut self) {
            self.1.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn closing_a_window_unmounts_its_app() {
        let mut registry = AppRegistry::empty();
        registry.register(AppKind::Settings, || {
            Box::new(Counting(
                InfoApp::new(AppKind::Settings, "Settings", "cog", &[]),
                &UNMOUNTED,
            ))
        });
        let mut desktop = Desktop::with_registry(Config::default(), registry);
        let window = desktop.open_app(AppKind::Settings).unwrap();
        assert!(desktop.open_app(AppKind::Browser).is_none());

        assert!(desktop.handle_event(DisplayEvent::CloseWindow(window)));
        assert_eq!(UNMOUNTED.load(Ordering::SeqCst), 1);
        assert!(desktop.app_window(AppKind::Settings).is_none());
        assert!(desktop.taskbar().buttons().is_empty());

        // A fresh instance gets a fresh window.
        let reopened = desktop.open_app(AppKind::Settings).unwrap();
        assert_ne!(reopened, window);
    }

    static SHUT_DOWN: AtomicUsize = AtomicUsize::new(0);

    #[test]
    fn shutdown_closes_everything() {
        let mut registry = AppRegistry::default();
        registry.register(AppKind::Calculator, || {
            Box::new(Counting(
                InfoApp::new(AppKind::Calculator, "Calculator", "abacus", &[]),
                &SHUT_DOWN,
            ))
        });
        let mut desktop = Desktop::with_registry(Config::default(), registry);
        desktop.open_app(AppKind::Calculator).unwrap();
        let terminal = desktop.open_app(AppKind::Terminal).unwrap();
        desktop.handle_event(DisplayEvent::MinimizeWindow(terminal));
        desktop.toggle_start_menu();

        assert!(desktop.shutdown());
        assert_eq!(SHUT_DOWN.load(Ordering::SeqCst), 1);
        assert_eq!(desktop.running_apps().count(), 0);
        assert!(desktop.taskbar().buttons().is_empty());
        assert!(desktop.manager().state.windows.is_empty());
        assert!(!desktop.is_start_menu_open());

        // Nothing left to close.
        assert!(!desktop.shutdown());
    }

    #[test]
    fn close_app_closes_its_window() {
        let mut desktop = Desktop::new(Config::default());
        desktop.open_app(AppKind::Calculator);
        assert!(desktop.close_app(AppKind::Calculator));
        assert!(!desktop.close_app(AppKind::Calculator));
        assert_eq!(desktop.running_apps().count(), 0);
    }

    #[test]
    fn default_shortcuts() {
        let mut desktop = Desktop::new(Config::default());
        assert!(desktop.handle_key(&keys(&["Control", "Alt"]), "t"));
        let terminal = desktop.app_window(AppKind::Terminal).unwrap();
        let editor = desktop.open_app(AppKind::TextEditor).unwrap();

        assert!(desktop.handle_key(&keys(&["Alt"]), "Tab"));
        assert_eq!(desktop.state().active_window, Some(terminal));

        assert!(desktop.handle_key(&keys(&["Alt"]), "F4"));
        assert!(desktop.app_window(AppKind::Terminal).is_none());
        assert_eq!(desktop.state().active_window, Some(editor));

        assert!(desktop.handle_key(&[], "Meta"));
        assert!(desktop.is_start_menu_open());
        assert!(!desktop.handle_key(&[], "q"));
    }

    #[test]
    fn opening_an_app_closes_the_start_menu() {
        let mut desktop = Desktop::new(Config::default());
        desktop.toggle_start_menu();
        desktop.open_app(AppKind::Browser);
        assert!(!desktop.is_start_menu_open());
    }

    #[test]
    fn taskbar_click_restores_a_minimized_window() {
        let mut desktop = Desktop::new(Config::default());
        let window = desktop.open_app(AppKind::FileManager).unwrap();
        desktop.handle_event(DisplayEvent::MinimizeWindow(window));
        assert!(desktop.taskbar().button(window).unwrap().minimized);

        assert!(desktop.click_taskbar(window));
        let state = desktop.state();
        assert_eq!(state.active_window, Some(window));
        assert_eq!(state.windows[0].state, WindowState::Normal);
        let button = desktop.taskbar().button(window).unwrap();
        assert!(button.active);
        assert!(!button.minimized);
    }

    #[test]
    fn render_lists_visible_windows_with_their_content() {
        let mut desktop = Desktop::new(Config::default());
        desktop.open_app(AppKind::Calculator);
        let editor = desktop.open_app(AppKind::TextEditor).unwrap();
        desktop.handle_event(DisplayEvent::MinimizeWindow(editor));
        let text = desktop.render();
        assert!(text.starts_with("Desktop 1280x720"));
        assert!(text.contains("Calculator (50,50 320x450) Normal *"));
        assert!(text.contains(&format!("    [{:>16}]", "0")));
        assert!(!text.contains("untitled.txt"));
        assert!(text.ends_with("Taskbar: [*Calculator] [_Text Editor]"));
    }
}
