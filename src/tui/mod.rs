pub mod colors;
pub mod event;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use event::{Event, EventHandler, EventSource};
pub use terminal::{Screen, Terminal};
pub use ui::render;
