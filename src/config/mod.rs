mod keybinding;
mod loader;
mod types;

pub use keybinding::{parse_key, parse_modifiers};
pub use loader::load_local_config;
pub use types::{default_bindings, Config, GuardConfig, KeyBinding, UiConfig};
