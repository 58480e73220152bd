//! QuizRunner - drives one session through a presenter.

use chrono::Duration;
use thiserror::Error;
use tracing::info;

use super::{IntentHandler, Outcome, StepView};
use crate::domain::classification::Classification;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::quiz::{QuizError, QuizSession};
use crate::ports::{Presenter, PresenterError};

/// Errors that end a run early.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Presenter(#[from] PresenterError),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub session_id: SessionId,
    pub classification: Option<Classification>,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub intents: usize,
}

impl RunSummary {
    /// Time taken to reach results, if the user got there.
    pub fn elapsed(&self) -> Option<Duration> {
        self.completed_at
            .map(|completed| completed.duration_since(&self.started_at))
    }
}

/// Render/dispatch loop.
///
/// Each iteration renders the current step, takes one intent and applies
/// it. Rejected input is handed back to the presenter as feedback on the
/// next render. The loop ends when the presenter returns `Quit`.
pub struct QuizRunner<P: Presenter> {
    presenter: P,
    handler: IntentHandler,
}

impl<P: Presenter> QuizRunner<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            handler: IntentHandler::new(),
        }
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Runs until the user quits.
    ///
    /// # Errors
    ///
    /// - `Presenter` if the presenter fails to render or read
    /// - `Quiz` if a view cannot be built for the current step
    pub fn run(&mut self, session: &mut QuizSession) -> Result<RunSummary, RunError> {
        info!(session_id = %session.id(), "Quiz started");

        let mut feedback: Option<QuizError> = None;
        let mut intents = 0;

        loop {
            let view = StepView::of(session)?;
            let intent = self.presenter.present(&view, feedback.as_ref())?;
            intents += 1;

            feedback = match self.handler.handle(session, intent) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Applied) | Ok(Outcome::Ignored) => None,
                Err(err) => Some(err),
            };
        }

        let summary = RunSummary {
            session_id: *session.id(),
            classification: session.classification().ok().copied(),
            started_at: *session.started_at(),
            completed_at: session.completed_at().copied(),
            intents,
        };
        info!(
            session_id = %summary.session_id,
            intents = summary.intents,
            finished = session.is_finished(),
            archetype = ?summary.classification.map(|c| c.archetype),
            elapsed_ms = ?summary.elapsed().map(|d| d.num_milliseconds()),
            "Quiz ended"
        );
        Ok(summary)
    }
}
