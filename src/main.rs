use std::process::ExitCode;

use color_eyre::Result;

use gbs::git::GitRepository;
use gbs::report::Reporter;
use gbs::tui::{EventHandler, Terminal};
use gbs::{logging, session, Config};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    // Load configuration
    let config = Config::load()?;
    logging::init()?;

    // Open the repository once; everything below works on this handle
    let current_dir = std::env::current_dir()?;
    let repo = GitRepository::discover(&current_dir)?
        .with_untracked(config.guard.include_untracked());

    let reporter = Reporter::for_stdout(config.ui.color());
    let code = session::run(
        &config,
        &repo,
        Terminal::new,
        &mut EventHandler::new(),
        reporter,
        &mut std::io::stdout(),
    )?;
    Ok(code)
}
