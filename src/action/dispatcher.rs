use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::config::{default_bindings, parse_key, parse_modifiers, Config, KeyBinding};

use super::Action;

/// Dispatches key events to actions based on configuration
pub struct ActionDispatcher {
    bindings: Vec<KeyBinding>,
}

impl ActionDispatcher {
    /// Create a dispatcher; configured bindings win over the defaults
    pub fn new(config: &Config) -> Self {
        let mut bindings = config.bindings.clone();
        bindings.extend(default_bindings());
        Self { bindings }
    }

    /// Dispatch a key event to an action
    pub fn dispatch(&self, key: KeyEvent, mode: &Mode) -> Option<Action> {
        if let Some(binding) = self.bindings.iter().find(|b| self.matches(b, &key, mode)) {
            // A matching binding without a valid action disables the key
            return binding.action.as_deref().and_then(Action::from_str);
        }

        // Unbound printable characters feed the filter in Search mode
        if *mode == Mode::Search
            && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT)
        {
            if let KeyCode::Char(c) = key.code {
                return Some(Action::InsertChar(c));
            }
        }

        None
    }

    /// Check if a binding matches the key event and mode
    fn matches(&self, binding: &KeyBinding, key: &KeyEvent, mode: &Mode) -> bool {
        let Ok(binding_key) = parse_key(&binding.key) else {
            return false;
        };

        if binding_key != key.code {
            return false;
        }

        if parse_modifiers(binding.mods.as_deref()) != key.modifiers {
            return false;
        }

        match &binding.mode {
            Some(mode_str) => self.mode_matches(mode_str, mode),
            None => true,
        }
    }

    /// Check if mode restriction matches current mode
    fn mode_matches(&self, mode_str: &str, current_mode: &Mode) -> bool {
        let mode_str = mode_str.trim();

        // Handle negation (~)
        if let Some(stripped) = mode_str.strip_prefix('~') {
            return !self.mode_matches(stripped, current_mode);
        }

        // Handle multiple modes (|)
        if mode_str.contains('|') {
            return mode_str
                .split('|')
                .any(|m| self.mode_matches(m, current_mode));
        }

        match mode_str.to_lowercase().as_str() {
            "normal" => *current_mode == Mode::Normal,
            "search" => *current_mode == Mode::Search,
            _ => false,
        }
    }
}
