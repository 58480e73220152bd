//! Intent dispatch - routes user intents to session commands.
//!
//! The presentation layer only offers controls that make sense on the
//! current screen, so a guard failure here means the user pressed a
//! disabled control. Those are swallowed; bad input is surfaced.

use tracing::{debug, warn};

use super::Intent;
use crate::domain::foundation::DomainError;
use crate::domain::quiz::{QuizError, QuizSession};

/// What became of a dispatched intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session accepted the command.
    Applied,
    /// The command was not available on the current screen; nothing changed.
    Ignored,
    /// The user asked to leave.
    Quit,
}

/// Stateless handler that applies intents to a session.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentHandler;

impl IntentHandler {
    pub fn new() -> Self {
        Self
    }

    /// Applies one intent.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the intent carries a bad rating, question or option
    pub fn handle(&self, session: &mut QuizSession, intent: Intent) -> Result<Outcome, QuizError> {
        let result = match intent {
            Intent::Answer {
                part,
                question_id,
                value,
            } => session.answer(part, question_id, value),
            Intent::Advance => session.advance().map(|_| ()),
            Intent::GoBack => session.go_back().map(|_| ()),
            Intent::SelectTieBreaker { option_id } => {
                session.select_tie_breaker(option_id).map(|_| ())
            }
            Intent::ViewQuadrant { archetype_id } => session.view_quadrant(archetype_id).map(|_| ()),
            Intent::Restart => {
                session.restart();
                Ok(())
            }
            Intent::Quit => return Ok(Outcome::Quit),
        };

        match result {
            Ok(()) => Ok(Outcome::Applied),
            Err(err) if err.is_invalid_transition() => {
                debug!(session_id = %session.id(), error = %err, "Intent ignored");
                Ok(Outcome::Ignored)
            }
            Err(err) => {
                let report = DomainError::from(err.clone());
                warn!(
                    session_id = %session.id(),
                    code = %report.code,
                    details = ?report.details,
                    error = %report.message,
                    "Intent rejected"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedContentSource;
    use crate::domain::foundation::{OptionId, Part, QuestionId};
    use crate::domain::quiz::QuizStep;
    use crate::domain::scoring::InputError;
    use crate::ports::ContentSource;
    use std::sync::Arc;

    fn session() -> QuizSession {
        let catalog = EmbeddedContentSource::new().load().unwrap();
        QuizSession::new(Arc::new(catalog))
    }

    fn answer(part: Part, id: u32, value: i32) -> Intent {
        Intent::Answer {
            part,
            question_id: QuestionId::new(id),
            value,
        }
    }

    #[test]
    fn applies_available_commands() {
        let mut session = session();
        let handler = IntentHandler::new();

        assert_eq!(handler.handle(&mut session, Intent::Advance), Ok(Outcome::Applied));
        assert_eq!(session.current_step(), QuizStep::PartA);
        assert_eq!(
            handler.handle(&mut session, answer(Part::Insight, 1, 4)),
            Ok(Outcome::Applied)
        );
        assert_eq!(session.raw_total(Part::Insight), 4);
    }

    #[test]
    fn ignores_guard_failures() {
        let mut session = session();
        let handler = IntentHandler::new();
        handler.handle(&mut session, Intent::Advance).unwrap();

        assert_eq!(handler.handle(&mut session, Intent::Advance), Ok(Outcome::Ignored));
        assert_eq!(session.current_step(), QuizStep::PartA);
    }

    #[test]
    fn ignores_commands_from_other_screens() {
        let mut session = session();
        let handler = IntentHandler::new();

        let outcome = handler.handle(
            &mut session,
            Intent::SelectTieBreaker {
                option_id: OptionId::new(1),
            },
        );
        assert_eq!(outcome, Ok(Outcome::Ignored));
        assert_eq!(
            handler.handle(&mut session, answer(Part::Insight, 1, 3)),
            Ok(Outcome::Ignored)
        );
        assert_eq!(session.raw_total(Part::Insight), 0);
    }

    #[test]
    fn surfaces_invalid_input() {
        let mut session = session();
        let handler = IntentHandler::new();
        handler.handle(&mut session, Intent::Advance).unwrap();

        let err = handler
            .handle(&mut session, answer(Part::Insight, 1, 6))
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidInput(InputError::Validation(_))));

        let err = handler
            .handle(&mut session, answer(Part::Insight, 42, 3))
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidInput(InputError::UnknownQuestion { .. })
        ));
    }

    #[test]
    fn quit_leaves_session_untouched() {
        let mut session = session();
        let before = session.snapshot();
        assert_eq!(
            IntentHandler::new().handle(&mut session, Intent::Quit),
            Ok(Outcome::Quit)
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn restart_is_always_applied() {
        let mut session = session();
        let handler = IntentHandler::new();
        handler.handle(&mut session, Intent::Advance).unwrap();
        handler.handle(&mut session, answer(Part::Insight, 2, 5)).unwrap();

        assert_eq!(handler.handle(&mut session, Intent::Restart), Ok(Outcome::Applied));
        assert_eq!(session.current_step(), QuizStep::Intro);
        assert_eq!(session.raw_total(Part::Insight), 0);
    }
}
