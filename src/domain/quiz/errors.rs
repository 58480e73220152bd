//! Quiz-specific error types.

use std::fmt;
use thiserror::Error;

use super::QuizStep;
use crate::domain::foundation::{DomainError, ErrorCode, Part, ValidationError};
use crate::domain::scoring::InputError;

/// Command a caller attempted on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Answer,
    Advance,
    GoBack,
    SelectTieBreaker,
    ViewQuadrant,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizAction::Answer => "answer",
            QuizAction::Advance => "advance",
            QuizAction::GoBack => "go back",
            QuizAction::SelectTieBreaker => "select tie-breaker",
            QuizAction::ViewQuadrant => "view quadrant",
        };
        write!(f, "{}", s)
    }
}

/// Why a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The action does not exist on the current screen.
    NotAvailable,
    /// The part must be fully answered first.
    PartIncomplete(Part),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotAvailable => write!(f, "not available here"),
            Rejection::PartIncomplete(part) => {
                write!(f, "every {} question needs an answer first", part)
            }
        }
    }
}

/// Query that needs a classification to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultQuery {
    FinalTotals,
    Classification,
    ViewedArchetype,
}

impl fmt::Display for ResultQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultQuery::FinalTotals => "final totals",
            ResultQuery::Classification => "classification",
            ResultQuery::ViewedArchetype => "viewed archetype",
        };
        write!(f, "{}", s)
    }
}

/// Errors surfaced by [`QuizSession`](super::QuizSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Cannot {action} from {from}: {rejection}")]
    InvalidTransition {
        from: QuizStep,
        action: QuizAction,
        rejection: Rejection,
    },

    #[error("No {query} before a tie-breaker has been selected")]
    PrematureQuery { query: ResultQuery },
}

impl QuizError {
    pub fn not_available(from: QuizStep, action: QuizAction) -> Self {
        QuizError::InvalidTransition {
            from,
            action,
            rejection: Rejection::NotAvailable,
        }
    }

    pub fn premature(query: ResultQuery) -> Self {
        QuizError::PrematureQuery { query }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::InvalidInput(_) => ErrorCode::InvalidInput,
            QuizError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            QuizError::PrematureQuery { .. } => ErrorCode::PrematureQuery,
        }
    }

    /// Returns true for guard failures the controlled interface may ignore.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, QuizError::InvalidTransition { .. })
    }
}

impl From<ValidationError> for QuizError {
    fn from(err: ValidationError) -> Self {
        QuizError::InvalidInput(InputError::Validation(err))
    }
}

impl From<QuizError> for DomainError {
    fn from(err: QuizError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match &err {
            QuizError::InvalidTransition { from, action, .. } => domain
                .with_detail("step", from.to_string())
                .with_detail("action", action.to_string()),
            QuizError::PrematureQuery { query } => domain.with_detail("query", query.to_string()),
            QuizError::InvalidInput(InputError::Validation(invalid)) => {
                let validation = DomainError::from(invalid.clone());
                validation
                    .details
                    .into_iter()
                    .fold(domain, |domain, (key, value)| domain.with_detail(key, value))
            }
            QuizError::InvalidInput(InputError::UnknownQuestion { part, question_id }) => domain
                .with_detail("part", part.to_string())
                .with_detail("question_id", question_id.to_string()),
            QuizError::InvalidInput(InputError::UnknownOption(option_id)) => {
                domain.with_detail("option_id", option_id.to_string())
            }
        }
    }
}
