use tracing::{debug, info, warn};

use crate::app::{App, CheckoutResult, Mode, SelectionState};
use crate::git::Checkout;

use super::Action;

/// Handles action execution
pub struct ActionHandler;

impl ActionHandler {
    /// Apply an action to the app. Once the selection is confirmed or
    /// aborted every further action is ignored.
    pub fn handle<C: Checkout + ?Sized>(app: &mut App, action: Action, checkout: &C) {
        if app.state != SelectionState::Browsing {
            debug!(?action, state = ?app.state, "ignoring action after selection ended");
            return;
        }

        match action {
            // Navigation
            Action::MoveUp => app.list.move_up(),
            Action::MoveDown => app.list.move_down(),
            Action::MoveTop => app.list.move_top(),
            Action::MoveBottom => app.list.move_bottom(),
            Action::PageUp => app.list.page_up(),
            Action::PageDown => app.list.page_down(),

            // Selection
            Action::Confirm => Self::handle_confirm(app, checkout),
            Action::Quit | Action::ForceQuit => {
                info!("selection aborted");
                app.state = SelectionState::Aborted;
                app.should_quit = true;
            }

            // Mode switching
            Action::EnterSearchMode => {
                app.mode = Mode::Search;
            }
            Action::EnterNormalMode => {
                app.mode = Mode::Normal;
                app.list.clear_filter();
            }

            // Filter input
            Action::InsertChar(c) => {
                if app.mode == Mode::Search {
                    app.list.push_char(c);
                }
            }
            Action::DeleteChar => app.list.pop_char(),
            Action::DeleteWord => app.list.delete_word(),
        }
    }

    fn handle_confirm<C: Checkout + ?Sized>(app: &mut App, checkout: &C) {
        let Some(branch) = app.list.selected().cloned() else {
            debug!("confirm with no visible branch");
            return;
        };

        app.state = SelectionState::Confirmed;
        app.should_quit = true;

        info!(branch = %branch, "checking out branch");
        let result = match checkout.checkout(&branch) {
            Ok(()) => {
                info!(branch = %branch, "checkout succeeded");
                CheckoutResult::Success { branch }
            }
            Err(err) => {
                warn!(branch = %branch, error = %err, "checkout failed");
                CheckoutResult::failure(branch, err)
            }
        };
        app.result = Some(result);
    }
}
