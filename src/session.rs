//! Interactive session: one cube, one key stream, one redraw per accepted move.

use anyhow::{bail, Result};
use crossterm::event;
use log::{debug, info};

use crate::config::Config;
use crate::core::{Cube, Net};
use crate::input::{Input, InputAction, InputHandler};
use crate::term::{terminal_width, CubeView, FrameBuffer, Palette, TerminalRenderer};
use crate::types::{DisplayMode, Move};

const KEY_HELP: &str = "keys: f b u d r l turn, shift reverses, q quits";

/// What the loop should do after handling one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    /// Terminal size changed; the old frame may have rewrapped.
    Reflow,
    Idle,
    Quit,
}

pub struct Session<'a> {
    cube: Cube,
    palette: &'a Palette,
    display: DisplayMode,
    input: InputHandler,
    move_count: u32,
    last_move: Option<Move>,
}

impl<'a> Session<'a> {
    pub fn new(config: &Config, palette: &'a Palette) -> Self {
        Self {
            cube: Cube::new(),
            palette,
            display: config.display,
            input: InputHandler::new(),
            move_count: 0,
            last_move: None,
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Apply one classified input.
    ///
    /// Fails only when the input handler has given up on the terminal.
    pub fn handle(&mut self, input: Input) -> Result<Flow> {
        match input {
            Input::Action(InputAction::Turn(mv)) => {
                self.cube.apply(mv);
                self.move_count += 1;
                self.last_move = Some(mv);
                Ok(Flow::Redraw)
            }
            Input::Action(InputAction::Timer) => {
                debug!("timer key pressed; timer is not implemented");
                Ok(Flow::Idle)
            }
            Input::Resize => Ok(Flow::Reflow),
            Input::Quit => Ok(Flow::Quit),
            Input::Ignored | Input::Retry => Ok(Flow::Idle),
            Input::GiveUp => bail!(
                "giving up after {} consecutive failed key reads",
                self.input.consecutive_errors()
            ),
        }
    }

    fn status_line(&self) -> String {
        let last = self.last_move.map_or("-", |mv| mv.as_str());
        let mut line = format!("moves: {}  last: {}", self.move_count, last);
        if self.move_count > 0 && self.cube.is_solved() {
            line.push_str("  solved");
        }
        line
    }

    /// Frame for the current state: blank line, net, blank line, footer.
    pub fn frame(&self, width: u16) -> FrameBuffer {
        let view = CubeView::new(self.palette, self.display).with_top_margin(true);
        let status = self.status_line();
        let legend = format!("axes: {}", self.palette.axis_legend());
        view.render(
            &[Net::from_cube(&self.cube)],
            width,
            &[status.as_str(), legend.as_str(), KEY_HELP],
        )
    }

    /// Read keys until quit. The caller owns terminal setup and teardown.
    pub fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        info!("session started");
        term.draw(&self.frame(terminal_width()))?;

        loop {
            let input = self.input.handle_read(event::read());
            match self.handle(input)? {
                Flow::Redraw => term.draw(&self.frame(terminal_width()))?,
                Flow::Reflow => {
                    term.reset()?;
                    term.draw(&self.frame(terminal_width()))?;
                }
                Flow::Idle => {}
                Flow::Quit => {
                    info!("session ended after {} moves", self.move_count);
                    return Ok(());
                }
            }
        }
    }
}
