use std::io::{stdout, Stdout};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};

use crate::error::Result;

pub type CrosstermTerminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Something the menu can be drawn on
pub trait Screen {
    type Backend: Backend;

    fn terminal(&mut self) -> &mut ratatui::Terminal<Self::Backend>;
}

impl<B: Backend> Screen for ratatui::Terminal<B> {
    type Backend = B;

    fn terminal(&mut self) -> &mut ratatui::Terminal<B> {
        self
    }
}

/// The real terminal, in raw mode on the alternate screen until dropped
pub struct Terminal {
    terminal: CrosstermTerminal,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let terminal = enter_or_restore(Self::enter, Self::leave)?;
        Ok(Self { terminal })
    }

    fn enter() -> Result<CrosstermTerminal> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(ratatui::Terminal::new(CrosstermBackend::new(stdout()))?)
    }

    fn leave() -> Result<()> {
        disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen, Show)?;
        Ok(())
    }
}

impl Screen for Terminal {
    type Backend = CrosstermBackend<Stdout>;

    fn terminal(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = Self::leave();
    }
}

/// Run `enter`; if it fails part way, run `leave` before returning the error
fn enter_or_restore<T>(
    enter: impl FnOnce() -> Result<T>,
    leave: impl FnOnce() -> Result<()>,
) -> Result<T> {
    enter().inspect_err(|_| {
        let _ = leave();
    })
}
