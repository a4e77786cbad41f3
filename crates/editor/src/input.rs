//! Input dispatch and the editor mode machine.
//!
//! ```text
//! Normal ──Help──▶ Help ──any key──▶ Normal
//! Normal ──Quit (modified)──▶ QuitConfirm ──Quit──▶ exit
//!                             QuitConfirm ──other key / timeout──▶ Normal
//! Normal ──Quit (saved)──▶ exit
//! ```

use std::time::{Duration, Instant};

use mirage_keyboard::InputEvent;

use crate::{core::Editor, status::StatusMessage};

/// Editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Regular editing
    Normal,
    /// Help overlay, closed by the next key
    Help,
    /// Waiting for a second quit key until `expires_at`
    QuitConfirm { expires_at: Instant },
}

/// What the event loop does after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Editor {
    /// Apply one input event.
    pub fn handle_input(&mut self, event: InputEvent) -> Flow {
        self.handle_input_at(event, Instant::now())
    }

    /// Apply one input event received at `now`.
    pub fn handle_input_at(&mut self, event: InputEvent, now: Instant) -> Flow {
        if self.quit_confirm_expired(now) {
            self.cancel_quit();
        }

        let flow = match self.mode {
            Mode::Help => {
                log::debug!("Help closed");
                self.mode = Mode::Normal;
                Flow::Continue
            }
            Mode::QuitConfirm { .. } => {
                if event == InputEvent::Quit {
                    log::info!("Quit confirmed, discarding unsaved changes");
                    Flow::Quit
                } else {
                    self.cancel_quit();
                    Flow::Continue
                }
            }
            Mode::Normal => self.dispatch(event, now),
        };

        self.clamp_cursor();
        flow
    }

    /// Wait for the next input at most this long.
    ///
    /// In quit confirmation the wait never passes the deadline, and the
    /// countdown in the footer is redrawn at least once per tick.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.mode {
            Mode::QuitConfirm { expires_at } => expires_at
                .saturating_duration_since(now)
                .min(self.config.tick_rate),
            Mode::Normal | Mode::Help => self.config.tick_rate,
        }
    }

    /// Handle a poll timeout without input.
    pub fn on_tick(&mut self, now: Instant) {
        if self.quit_confirm_expired(now) {
            self.cancel_quit();
        }
    }

    /// Whole seconds left in the quit confirmation window
    pub fn quit_seconds_left(&self, now: Instant) -> Option<u64> {
        match self.mode {
            Mode::QuitConfirm { expires_at } => {
                let left = expires_at.saturating_duration_since(now);
                Some(left.as_millis().div_ceil(1000) as u64)
            }
            _ => None,
        }
    }

    fn quit_confirm_expired(&self, now: Instant) -> bool {
        matches!(self.mode, Mode::QuitConfirm { expires_at } if now >= expires_at)
    }

    fn cancel_quit(&mut self) {
        log::debug!("Quit cancelled");
        self.mode = Mode::Normal;
        self.set_status(StatusMessage::info("Quit cancelled"));
    }

    fn dispatch(&mut self, event: InputEvent, now: Instant) -> Flow {
        match event {
            // Commands
            InputEvent::Save => {
                self.save();
            }
            InputEvent::Quit => {
                if !self.is_modified() {
                    log::info!("Quit");
                    return Flow::Quit;
                }
                log::debug!("Quit requested with unsaved changes");
                self.mode = Mode::QuitConfirm {
                    expires_at: now + self.config.quit_confirm,
                };
            }
            InputEvent::ToggleWrap => {
                self.wrap_enabled = !self.wrap_enabled;
                self.set_status(StatusMessage::info(format!(
                    "Line wrap: {}",
                    on_off(self.wrap_enabled)
                )));
            }
            InputEvent::ToggleLineNumbers => {
                self.show_line_numbers = !self.show_line_numbers;
                self.set_status(StatusMessage::info(format!(
                    "Line numbers: {}",
                    on_off(self.show_line_numbers)
                )));
            }
            InputEvent::Help => {
                log::debug!("Help opened");
                self.mode = Mode::Help;
            }

            // Navigation
            InputEvent::MoveUp => self.move_up(),
            InputEvent::MoveDown => self.move_down(),
            InputEvent::MoveLeft => self.move_left(),
            InputEvent::MoveRight => self.move_right(),
            InputEvent::LineStart => self.move_to_line_start(),
            InputEvent::LineEnd => self.move_to_line_end(),

            // Editing
            InputEvent::Newline => self.insert_newline(),
            InputEvent::Backspace => self.delete_backward(),
            InputEvent::Delete => self.delete_forward(),
            InputEvent::Char(ch) => self.insert_char(ch),

            InputEvent::Ignored => log::debug!("Ignored input"),
        }
        Flow::Continue
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}
