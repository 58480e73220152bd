//! Input errors raised by the scoring engine.

use thiserror::Error;

use crate::domain::foundation::{OptionId, Part, QuestionId, ValidationError};

/// A request referenced something that does not exist or is out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Part {part} has no question {question_id}")]
    UnknownQuestion { part: Part, question_id: QuestionId },

    #[error("No tie-breaker option {0}")]
    UnknownOption(OptionId),
}
