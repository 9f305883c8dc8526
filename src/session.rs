//! Wires the guard, the branch menu and the reporter together.

use std::io::Write;
use std::process::ExitCode;

use ratatui::backend::Backend;
use tracing::{info, warn};

use crate::app::App;
use crate::config::Config;
use crate::error::Result;
use crate::git::{BranchName, BranchSource, Checkout, WorktreeInspector};
use crate::guard::{self, GuardDecision};
use crate::report::{Report, Reporter};
use crate::tui::{EventSource, Screen};

/// State of the working copy before any terminal setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Startup {
    /// Local changes found; the menu must not open
    Blocked(Vec<String>),
    /// Clean; branches to offer, in source order
    Ready(Vec<BranchName>),
}

/// Run the guard and, only if it passes, enumerate branches
pub fn prepare<R>(repo: &R) -> Result<Startup>
where
    R: WorktreeInspector + BranchSource + ?Sized,
{
    let status = repo.worktree_status()?;

    match guard::evaluate(&status) {
        GuardDecision::Block(paths) => {
            warn!(count = paths.len(), "working copy has local changes");
            Ok(Startup::Blocked(paths))
        }
        GuardDecision::Proceed => {
            let branches = repo.local_branches()?;
            Ok(Startup::Ready(branches))
        }
    }
}

/// Guard, menu, report. `open_screen` is only called once the guard
/// passes, and the screen is dropped before the report is written.
pub fn run<R, S, F, E, W>(
    config: &Config,
    repo: &R,
    open_screen: F,
    events: &mut E,
    reporter: Reporter,
    out: &mut W,
) -> Result<ExitCode>
where
    R: WorktreeInspector + BranchSource + Checkout + ?Sized,
    S: Screen,
    <S::Backend as Backend>::Error: Send + Sync + 'static,
    F: FnOnce() -> Result<S>,
    E: EventSource + ?Sized,
    W: Write + ?Sized,
{
    let branches = match prepare(repo)? {
        Startup::Blocked(paths) => {
            let report = Report::Blocked(paths);
            reporter.write_to(&report, out)?;
            return Ok(report.exit_code());
        }
        Startup::Ready(branches) => branches,
    };

    let mut app = App::new(config, branches);
    let result = {
        let mut screen = open_screen()?;
        app.run(screen.terminal(), events, repo)?
    };

    match result {
        Some(result) => {
            let report = Report::from(result);
            reporter.write_to(&report, out)?;
            Ok(report.exit_code())
        }
        None => {
            info!("quit without checkout");
            Ok(ExitCode::SUCCESS)
        }
    }
}
