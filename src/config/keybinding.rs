use crossterm::event::{KeyCode, KeyModifiers};

use crate::error::{Error, Result};

/// Parse a key string such as "j", "Enter" or "PageDown" into a KeyCode
pub fn parse_key(key: &str) -> Result<KeyCode> {
    let key = key.trim();

    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = key.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    match lower.as_str() {
        "enter" | "return" | "numpadenter" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Esc),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "tab" => Ok(KeyCode::Tab),
        "space" => Ok(KeyCode::Char(' ')),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" => Ok(KeyCode::PageUp),
        "pagedown" => Ok(KeyCode::PageDown),
        "delete" | "del" => Ok(KeyCode::Delete),
        _ => Err(Error::InvalidKeyBinding(format!("Unknown key: {}", key))),
    }
}

/// Parse modifier string ("Control|Shift") into KeyModifiers
pub fn parse_modifiers(mods: Option<&str>) -> KeyModifiers {
    let Some(mods) = mods else {
        return KeyModifiers::NONE;
    };

    mods.split('|')
        .map(|part| part.trim().to_lowercase())
        .fold(KeyModifiers::NONE, |acc, part| match part.as_str() {
            "control" | "ctrl" => acc | KeyModifiers::CONTROL,
            "shift" => acc | KeyModifiers::SHIFT,
            "alt" | "option" => acc | KeyModifiers::ALT,
            "super" | "command" | "cmd" => acc | KeyModifiers::SUPER,
            _ => acc,
        })
}
