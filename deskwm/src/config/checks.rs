use super::Config;
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

impl Config {
    /// Sizes must be positive and the defaults must respect the minimums.
    pub fn check_geometry(&self, verbose: bool) -> Vec<String> {
        if verbose {
            println!("Checking window geometry.");
        }
        let mut problems = vec![];
        for (name, value) in [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("min_width", self.min_width),
            ("min_height", self.min_height),
            ("title_bar_height", self.title_bar_height),
        ] {
            if value <= 0 {
                problems.push(format!("`{name}` must be positive, found {value}"));
            }
        }
        if self.taskbar_height < 0 || self.cascade_offset < 0 || self.min_title_bar_visible < 0 {
            problems.push("`taskbar_height`, `cascade_offset` and `min_title_bar_visible` must not be negative".to_owned());
        }
        if self.default_width < self.min_width || self.default_height < self.min_height {
            problems.push(format!(
                "default size {}x{} is smaller than the minimum {}x{}",
                self.default_width, self.default_height, self.min_width, self.min_height
            ));
        }
        if self.taskbar_height >= self.viewport_height {
            problems.push("the taskbar leaves no room for windows".to_owned());
        }
        problems
    }

    pub fn check_log_level(&self, verbose: bool) -> Option<String> {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) if verbose => {
                println!("Log level is ok.");
                None
            }
            Ok(_) => None,
            Err(err) => Some(format!("Log level is invalid: {err}")),
        }
    }

    /// Check all keybinds to ensure that required values are provided and that no key
    /// combination is bound twice.
    pub fn check_keybinds(&self, verbose: bool) -> Vec<String> {
        let mut returns = Vec::new();
        let mut bindings = HashSet::new();
        for keybind in &self.keybind {
            if verbose {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
            if let Err(err) = keybind.try_convert_to_action() {
                returns.push(format!("{keybind:?}: {err:#}"));
            }
            if keybind.key.is_empty() {
                returns.push(format!("{keybind:?}: key must not be empty"));
            }

            let mut modkey: Vec<String> = keybind
                .modifier
                .as_ref()
                .map(|m| m.into_iter().map(|m| m.to_lowercase()).collect())
                .unwrap_or_default();
            modkey.sort_unstable();
            if !bindings.insert((modkey.clone(), keybind.key.to_lowercase())) {
                returns.push(format!(
                    "Multiple commands bound to key combination {} + {}",
                    modkey.join(" + "),
                    keybind.key
                ));
            }
        }
        returns
    }
}
