//! Terminal presenter over any line reader and writer.

use std::io::{BufRead, Write};

use tracing::trace;

use super::{command, render};
use crate::application::{Intent, StepView};
use crate::domain::quiz::QuizError;
use crate::ports::{Presenter, PresenterError};

/// Line-oriented presenter; stdin/stdout in the binary, buffers in tests.
///
/// End of input is treated as a request to quit.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, PresenterError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn present(
        &mut self,
        view: &StepView,
        feedback: Option<&QuizError>,
    ) -> Result<Intent, PresenterError> {
        render::render(&mut self.output, view)?;
        if let Some(err) = feedback {
            writeln!(self.output, "! {}", err)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(Intent::Quit);
            };
            match command::parse(view.step(), &line) {
                Some(intent) => {
                    trace!(step = %view.step(), intent = ?intent, "Command parsed");
                    return Ok(intent);
                }
                None => writeln!(self.output, "Unrecognized command: {}", line.trim())?,
            }
        }
    }
}
