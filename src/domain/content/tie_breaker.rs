//! Tie-breaker options and their axis adjustments.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, Part, ValidationError};

/// One answer to the forced-choice tie-breaker question.
///
/// `adj_a` and `adj_b` are signed nudges added once to the insight and
/// mechanics totals respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreakerOption {
    pub id: OptionId,
    pub text: String,
    pub adj_a: i32,
    pub adj_b: i32,
    /// Which archetype this option leans towards, e.g. "Captain Bias".
    #[serde(rename = "type")]
    pub label: String,
}

impl TieBreakerOption {
    pub fn new(
        id: impl Into<OptionId>,
        text: impl Into<String>,
        adj_a: i32,
        adj_b: i32,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            adj_a,
            adj_b,
            label: label.into(),
        }
    }

    /// Adjustment this option applies to the given part's total.
    pub fn adjustment(&self, part: Part) -> i32 {
        match part {
            Part::Insight => self.adj_a,
            Part::Mechanics => self.adj_b,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field(format!(
                "tie_breakers[{}].text",
                self.id
            )));
        }
        Ok(())
    }
}
