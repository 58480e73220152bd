//! Question statement rated by the user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, ValidationError};

/// A single statement in one part's battery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
}

impl Question {
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    pub(crate) fn validate(&self, field: &str) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field(format!(
                "{}[{}].text",
                field, self.id
            )));
        }
        Ok(())
    }
}
