/// Actions that can be performed in the branch menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveTop,
    MoveBottom,
    PageUp,
    PageDown,

    // Selection
    Confirm,
    Quit,
    ForceQuit,

    // Mode switching
    EnterSearchMode,
    EnterNormalMode,

    // Filter input
    InsertChar(char),
    DeleteChar,
    DeleteWord,
}

impl Action {
    /// Parse action from its configuration name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MoveUp" => Some(Action::MoveUp),
            "MoveDown" => Some(Action::MoveDown),
            "MoveTop" => Some(Action::MoveTop),
            "MoveBottom" => Some(Action::MoveBottom),
            "PageUp" => Some(Action::PageUp),
            "PageDown" => Some(Action::PageDown),
            "Confirm" | "Select" => Some(Action::Confirm),
            "Quit" => Some(Action::Quit),
            "ForceQuit" => Some(Action::ForceQuit),
            "EnterSearchMode" => Some(Action::EnterSearchMode),
            "EnterNormalMode" => Some(Action::EnterNormalMode),
            "DeleteChar" => Some(Action::DeleteChar),
            "DeleteWord" => Some(Action::DeleteWord),
            // "None" and unknown names disable the binding
            _ => None,
        }
    }
}
