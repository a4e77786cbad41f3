use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Application event
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Poll timed out, or an event the editor does not use
    Tick,
}

/// Event handler
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Wait at most `timeout` for the next event
    pub fn next(&self, timeout: Duration) -> Result<Event> {
        if event::poll(timeout)? {
            Ok(Self::convert(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }

    fn convert(event: CrosstermEvent) -> Event {
        match event {
            // Release and repeat reports from the enhanced keyboard protocol are not input
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        }
    }
}
