//! Classifier - maps two axis totals onto an archetype.

use serde::{Deserialize, Serialize};

use super::Archetype;
use crate::domain::foundation::OptionId;
use crate::domain::scoring::ScoreTotals;

/// Pure threshold classifier.
pub struct Classifier;

impl Classifier {
    /// True when a total reaches the threshold. The threshold is inclusive.
    pub fn is_high(total: i32, threshold: i32) -> bool {
        total >= threshold
    }

    /// Classifies a pair of totals.
    ///
    /// | high insight | high mechanics | result      |
    /// |--------------|----------------|-------------|
    /// | yes          | no             | Philosopher |
    /// | yes          | yes            | Captain     |
    /// | no           | no             | Explorer    |
    /// | no           | yes            | Architect   |
    pub fn classify(total_a: i32, total_b: i32, threshold: i32) -> Archetype {
        Archetype::from_levels(
            Self::is_high(total_a, threshold),
            Self::is_high(total_b, threshold),
        )
    }
}

/// The user's fixed result, captured when the tie-breaker is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub archetype: Archetype,
    pub totals: ScoreTotals,
    pub threshold: i32,
    pub tie_breaker: OptionId,
}

impl Classification {
    /// Classifies final totals.
    pub fn compute(totals: ScoreTotals, threshold: i32, tie_breaker: OptionId) -> Self {
        Self {
            archetype: Classifier::classify(totals.insight, totals.mechanics, threshold),
            totals,
            threshold,
            tie_breaker,
        }
    }
}
