//! Serializable view of a session's observable state.

use serde::{Deserialize, Serialize};

use super::QuizStep;
use crate::domain::classification::{Archetype, Classification};
use crate::domain::foundation::OptionId;
use crate::domain::scoring::RatingSheet;

/// Everything a caller can observe about a session, minus identity and
/// timestamps. Two sessions with equal snapshots behave identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    pub step: QuizStep,
    pub ratings_a: RatingSheet,
    pub ratings_b: RatingSheet,
    pub tie_breaker: Option<OptionId>,
    pub classification: Option<Classification>,
    pub viewed: Option<Archetype>,
}
