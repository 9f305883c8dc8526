pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod git;
pub mod guard;
pub mod list;
pub mod logging;
pub mod report;
pub mod session;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
