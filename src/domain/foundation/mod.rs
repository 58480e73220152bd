//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the compass domain.

mod errors;
mod ids;
mod part;
mod rating;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{OptionId, QuestionId, SessionId};
pub use part::Part;
pub use rating::Rating;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
