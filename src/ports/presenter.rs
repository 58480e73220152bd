//! Presenter port - the presentation collaborator.
//!
//! A presenter renders the current screen and hands back the next thing
//! the user wants to do. It never touches session state directly.

use thiserror::Error;

use crate::application::{Intent, StepView};
use crate::domain::quiz::QuizError;

/// Errors raised by a presenter.
#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("Presenter I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for rendering screens and collecting user intents.
pub trait Presenter {
    /// Renders `view` and blocks until the user produces an intent.
    ///
    /// `feedback` carries the error from the previous intent, if it was
    /// rejected for bad input.
    fn present(
        &mut self,
        view: &StepView,
        feedback: Option<&QuizError>,
    ) -> Result<Intent, PresenterError>;
}
