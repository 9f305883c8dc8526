//! Final, non-interactive output printed after the terminal is restored.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use crossterm::style::{Color, Stylize};

use crate::app::{CheckoutResult, FailureReason};

const OVERWRITE_HEADER: &str =
    "error: Your local changes to the following files would be overwritten by checkout:";
const OVERWRITE_HINT: &str =
    "Please commit your changes or stash them before you switch branches.";
const ABORTING: &str = "Aborting";
const PATH_INDENT: &str = "        ";

const PATH_COLOR: Color = Color::AnsiValue(213);
const SUCCESS_COLOR: Color = Color::AnsiValue(108);
const ERROR_COLOR: Color = Color::AnsiValue(167);

/// Exit code when the dirty-worktree guard refuses to open the menu
pub const EXIT_BLOCKED: u8 = 2;
/// Exit code when a confirmed checkout failed
pub const EXIT_CHECKOUT_FAILED: u8 = 1;

/// Something worth telling the user once the program is done
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The guard found local changes
    Blocked(Vec<String>),
    /// A branch was confirmed in the menu
    Checkout(CheckoutResult),
}

impl Report {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Report::Blocked(_) => ExitCode::from(EXIT_BLOCKED),
            Report::Checkout(result) if result.is_success() => ExitCode::SUCCESS,
            Report::Checkout(_) => ExitCode::from(EXIT_CHECKOUT_FAILED),
        }
    }
}

impl From<CheckoutResult> for Report {
    fn from(result: CheckoutResult) -> Self {
        Report::Checkout(result)
    }
}

/// Formats reports, optionally with ANSI colors
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Plain output, no escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Color only when enabled in config, `NO_COLOR` is unset and stdout is a terminal
    pub fn for_stdout(color_enabled: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(color_enabled && !no_color && io::stdout().is_terminal())
    }

    /// Render the report as text, one line per entry, newline terminated
    pub fn render(&self, report: &Report) -> String {
        let lines = match report {
            Report::Blocked(paths) => self.overwrite_lines(paths),
            Report::Checkout(CheckoutResult::Success { branch }) => {
                vec![format!(
                    "Switched to branch '{}'",
                    self.paint(branch.as_str(), SUCCESS_COLOR)
                )]
            }
            Report::Checkout(CheckoutResult::Failure {
                branch,
                reason,
                paths,
            }) => match reason {
                FailureReason::Conflict => self.overwrite_lines(paths),
                FailureReason::NotFound => vec![
                    self.paint(
                        &format!(
                            "error: pathspec '{}' did not match any local branch",
                            branch
                        ),
                        ERROR_COLOR,
                    ),
                    ABORTING.to_string(),
                ],
                FailureReason::InUse(path) => vec![
                    self.paint(
                        &format!(
                            "error: '{}' is already checked out at '{}'",
                            branch,
                            path.display()
                        ),
                        ERROR_COLOR,
                    ),
                    ABORTING.to_string(),
                ],
                FailureReason::Git(msg) => vec![
                    self.paint(
                        &format!("error: failed to checkout '{}': {}", branch, msg),
                        ERROR_COLOR,
                    ),
                    ABORTING.to_string(),
                ],
            },
        };

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Write the rendered report to `out`
    pub fn write_to<W: Write + ?Sized>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        out.write_all(self.render(report).as_bytes())?;
        out.flush()
    }

    /// Header, every path on its own line, then the hint
    fn overwrite_lines(&self, paths: &[String]) -> Vec<String> {
        let mut lines = Vec::with_capacity(paths.len() + 3);
        lines.push(self.paint(OVERWRITE_HEADER, ERROR_COLOR));
        lines.extend(
            paths
                .iter()
                .map(|path| format!("{}{}", PATH_INDENT, self.paint(path, PATH_COLOR))),
        );
        lines.push(OVERWRITE_HINT.to_string());
        lines.push(ABORTING.to_string());
        lines
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}
