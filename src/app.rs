use std::path::PathBuf;

use crossterm::event::KeyEvent;
use ratatui::backend::Backend;
use tracing::debug;

use crate::action::{ActionDispatcher, ActionHandler};
use crate::config::{Config, UiConfig};
use crate::error::{Error, Result};
use crate::git::{BranchName, Checkout, CheckoutError};
use crate::list::BranchList;
use crate::tui::{render, Event, EventSource};

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing into the branch filter
    Search,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Search => write!(f, "Search"),
        }
    }
}

/// Where the selection loop stands. `Confirmed` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Browsing,
    Confirmed,
    Aborted,
}

/// Why a confirmed checkout did not happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Local changes would be overwritten
    Conflict,
    NotFound,
    /// Checked out in the worktree at this path
    InUse(PathBuf),
    Git(String),
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Conflict => write!(f, "local changes would be overwritten"),
            FailureReason::NotFound => write!(f, "branch not found"),
            FailureReason::InUse(path) => write!(f, "checked out at {}", path.display()),
            FailureReason::Git(msg) => write!(f, "{}", msg),
        }
    }
}

/// Outcome of a confirmed selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutResult {
    Success {
        branch: BranchName,
    },
    Failure {
        branch: BranchName,
        reason: FailureReason,
        paths: Vec<String>,
    },
}

impl CheckoutResult {
    pub fn failure(branch: BranchName, err: CheckoutError) -> Self {
        let (reason, paths) = match err {
            CheckoutError::Conflict { paths } => (FailureReason::Conflict, paths),
            CheckoutError::NotFound(_) => (FailureReason::NotFound, Vec::new()),
            CheckoutError::InUse { path, .. } => (FailureReason::InUse(path), Vec::new()),
            CheckoutError::Git(e) => (FailureReason::Git(e.message().to_string()), Vec::new()),
        };
        CheckoutResult::Failure {
            branch,
            reason,
            paths,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckoutResult::Success { .. })
    }
}

/// Branch menu state
pub struct App {
    pub ui: UiConfig,
    pub mode: Mode,
    pub state: SelectionState,

    // Branch list
    pub list: BranchList,

    // Set once, when a confirmed checkout finishes
    pub result: Option<CheckoutResult>,

    // Exit flag
    pub should_quit: bool,

    action_dispatcher: ActionDispatcher,
}

impl App {
    /// Create the menu over `branches`, keeping their order
    pub fn new(config: &Config, branches: Vec<BranchName>) -> Self {
        Self {
            ui: config.ui.clone(),
            mode: Mode::Normal,
            state: SelectionState::Browsing,
            list: BranchList::new(branches, config.ui.wrap_navigation()),
            result: None,
            should_quit: false,
            action_dispatcher: ActionDispatcher::new(config),
        }
    }

    /// Run the menu until a branch is confirmed or the user quits.
    /// Returns None when the user quit without choosing.
    pub fn run<B, E, C>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
        events: &mut E,
        checkout: &C,
    ) -> Result<Option<CheckoutResult>>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
        E: EventSource + ?Sized,
        C: Checkout + ?Sized,
    {
        while !self.should_quit {
            terminal
                .draw(|frame| render(frame, self))
                .map_err(|e| Error::Terminal(Box::new(e)))?;

            let event = events.next_event()?;
            self.handle_event(event, checkout);
        }

        Ok(self.result.take())
    }

    /// Handle an event
    pub fn handle_event<C: Checkout + ?Sized>(&mut self, event: Event, checkout: &C) {
        match event {
            Event::Key(key) => self.handle_key(key, checkout),
            Event::Resize => {
                // Redrawn on the next loop iteration
            }
        }
    }

    /// Translate a key press through the bindings and apply it
    pub fn handle_key<C: Checkout + ?Sized>(&mut self, key: KeyEvent, checkout: &C) {
        let Some(action) = self.action_dispatcher.dispatch(key, &self.mode) else {
            return;
        };
        debug!(?action, mode = %self.mode, "dispatching");
        ActionHandler::handle(self, action, checkout);
    }

    /// Get selected branch
    pub fn selected_branch(&self) -> Option<&BranchName> {
        self.list.selected()
    }
}
