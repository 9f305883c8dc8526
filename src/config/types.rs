use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub guard: GuardConfig,

    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

impl Config {
    /// Merge two configs, with `other` taking precedence.
    /// Bindings from `other` are tried first.
    pub fn merge(self, other: Config) -> Config {
        let mut bindings = other.bindings;
        bindings.extend(self.bindings);

        Config {
            ui: UiConfig {
                wrap_navigation: other.ui.wrap_navigation.or(self.ui.wrap_navigation),
                show_numbers: other.ui.show_numbers.or(self.ui.show_numbers),
                color: other.ui.color.or(self.ui.color),
            },
            guard: GuardConfig {
                include_untracked: other.guard.include_untracked.or(self.guard.include_untracked),
            },
            bindings,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfig {
    /// Wrap the cursor around at the ends of the list
    #[serde(default)]
    pub wrap_navigation: Option<bool>,

    /// Prefix items with "1. ", "2. ", ...
    #[serde(default)]
    pub show_numbers: Option<bool>,

    /// Colorize the final report
    #[serde(default)]
    pub color: Option<bool>,
}

impl UiConfig {
    pub fn wrap_navigation(&self) -> bool {
        self.wrap_navigation.unwrap_or(false)
    }

    pub fn show_numbers(&self) -> bool {
        self.show_numbers.unwrap_or(true)
    }

    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}

/// Dirty worktree detection
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GuardConfig {
    /// Count untracked files as local changes
    #[serde(default)]
    pub include_untracked: Option<bool>,
}

impl GuardConfig {
    pub fn include_untracked(&self) -> bool {
        self.include_untracked.unwrap_or(true)
    }
}

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyBinding {
    /// Key to bind (e.g., "j", "Enter", "Esc", "F1")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Shift", "Alt", "Control|Shift")
    #[serde(default)]
    pub mods: Option<String>,

    /// Mode restriction (e.g., "Normal", "Search", "~Normal")
    #[serde(default)]
    pub mode: Option<String>,

    /// Built-in action to execute
    #[serde(default)]
    pub action: Option<String>,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            mode: None,
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}

/// Built-in bindings, tried after any configured ones
pub fn default_bindings() -> Vec<KeyBinding> {
    vec![
        // Always available
        KeyBinding::new("c").with_mods("Control").with_action("ForceQuit"),
        KeyBinding::new("Enter").with_action("Confirm"),
        KeyBinding::new("Up").with_action("MoveUp"),
        KeyBinding::new("Down").with_action("MoveDown"),
        KeyBinding::new("p").with_mods("Control").with_action("MoveUp"),
        KeyBinding::new("n").with_mods("Control").with_action("MoveDown"),
        KeyBinding::new("PageUp").with_action("PageUp"),
        KeyBinding::new("PageDown").with_action("PageDown"),
        KeyBinding::new("Home").with_action("MoveTop"),
        KeyBinding::new("End").with_action("MoveBottom"),
        // Normal mode
        KeyBinding::new("k").with_mode("Normal").with_action("MoveUp"),
        KeyBinding::new("j").with_mode("Normal").with_action("MoveDown"),
        KeyBinding::new("g").with_mode("Normal").with_action("MoveTop"),
        KeyBinding::new("G")
            .with_mods("Shift")
            .with_mode("Normal")
            .with_action("MoveBottom"),
        KeyBinding::new("G").with_mode("Normal").with_action("MoveBottom"),
        KeyBinding::new("/").with_mode("Normal").with_action("EnterSearchMode"),
        KeyBinding::new("q").with_mode("Normal").with_action("Quit"),
        KeyBinding::new("Esc").with_mode("Normal").with_action("Quit"),
        // Search mode
        KeyBinding::new("Esc").with_mode("Search").with_action("EnterNormalMode"),
        KeyBinding::new("Backspace").with_mode("Search").with_action("DeleteChar"),
        KeyBinding::new("w")
            .with_mods("Control")
            .with_mode("Search")
            .with_action("DeleteWord"),
    ]
}
