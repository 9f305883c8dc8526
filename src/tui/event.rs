use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::error::Result;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize event
    Resize,
}

/// Source of input events for the menu loop
pub trait EventSource {
    /// Block until the next relevant event arrives
    fn next_event(&mut self) -> Result<Event>;
}

/// Reads events from the terminal
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for EventHandler {
    fn next_event(&mut self) -> Result<Event> {
        loop {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                event::Event::Resize(_, _) => return Ok(Event::Resize),
                _ => {}
            }
        }
    }
}
