//! Main event loop.

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use std::time::Instant;

use mirage_editor::{Editor, Flow};
use mirage_keyboard::InputEvent;
use mirage_theme::Theme;

use crate::event::{Event, EventHandler};

/// Running editor application
pub struct App {
    editor: Editor,
    theme: Theme,
    event_handler: EventHandler,
}

impl App {
    pub fn new(editor: Editor, theme: Theme) -> Self {
        Self {
            editor,
            theme,
            event_handler: EventHandler::new(),
        }
    }

    #[cfg(test)]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Run until the editor quits.
    ///
    /// One iteration per frame: draw, count the frame against the status
    /// message, then wait for one event with the editor's timeout.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.draw(terminal)?;

            let timeout = self.editor.poll_timeout(Instant::now());
            let event = self.event_handler.next(timeout)?;
            if self.handle_event(event) == Flow::Quit {
                break;
            }
        }

        log::info!("Session ended");
        Ok(())
    }

    /// Clamp, scroll and render one frame.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let editor = &mut self.editor;
        let theme = &self.theme;

        terminal.draw(|frame| {
            let plan = editor.prepare_frame(frame.area());
            editor.render(frame.buffer_mut(), &plan, theme, Instant::now());
        })?;

        editor.tick_status();
        Ok(())
    }

    /// Apply one event to the editor.
    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) => {
                let input = InputEvent::from_key_event(key);
                log::debug!("Key {:?} -> {:?}", key.code, input);
                self.editor.handle_input(input)
            }
            Event::Resize(width, height) => {
                log::debug!("Terminal resized to {}x{}", width, height);
                Flow::Continue
            }
            Event::Tick => {
                self.editor.on_tick(Instant::now());
                Flow::Continue
            }
        }
    }
}
