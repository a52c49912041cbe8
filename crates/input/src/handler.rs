//! Input handler for the interactive session.
//!
//! Turns the result of one blocking terminal read into a session decision.
//! Read failures are counted; the session keeps reading until too many fail
//! in a row.

use std::io;

use crossterm::event::{Event, KeyEventKind};
use log::warn;

use crate::map::{handle_key_event, should_quit, InputAction};
use crate::types::MAX_CONSECUTIVE_READ_ERRORS;

/// Outcome of one terminal read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A mapped key press
    Action(InputAction),
    /// Quit key pressed
    Quit,
    /// Terminal resized; the view should be redrawn
    Resize,
    /// Nothing to do (unmapped key, release event, mouse, ...)
    Ignored,
    /// The read failed; try again
    Retry,
    /// Too many consecutive reads failed
    GiveUp,
}

/// Tracks consecutive read failures.
#[derive(Debug, Clone)]
pub struct InputHandler {
    consecutive_errors: u32,
    max_errors: u32,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_max_errors(MAX_CONSECUTIVE_READ_ERRORS)
    }

    pub fn with_max_errors(max_errors: u32) -> Self {
        Self {
            consecutive_errors: 0,
            max_errors: max_errors.max(1),
        }
    }

    pub fn consecutive_errors(&self) -> u32 {
        self.consecutive_errors
    }

    /// Classify one read result.
    pub fn handle_read(&mut self, read: io::Result<Event>) -> Input {
        match read {
            Ok(event) => {
                self.consecutive_errors = 0;
                self.handle_event(event)
            }
            Err(err) => {
                self.consecutive_errors += 1;
                warn!(
                    "failed to read key ({}/{}): {err}",
                    self.consecutive_errors, self.max_errors
                );
                if self.consecutive_errors >= self.max_errors {
                    Input::GiveUp
                } else {
                    Input::Retry
                }
            }
        }
    }

    fn handle_event(&self, event: Event) -> Input {
        match event {
            Event::Key(key) => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    if should_quit(key) {
                        Input::Quit
                    } else {
                        handle_key_event(key).map_or(Input::Ignored, Input::Action)
                    }
                }
                KeyEventKind::Release => Input::Ignored,
            },
            Event::Resize(_, _) => Input::Resize,
            _ => Input::Ignored,
        }
    }
}
