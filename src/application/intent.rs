//! User intents emitted by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, Part, QuestionId};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    Answer {
        part: Part,
        question_id: QuestionId,
        value: i32,
    },
    Advance,
    GoBack,
    SelectTieBreaker { option_id: OptionId },
    ViewQuadrant { archetype_id: u8 },
    Restart,
    Quit,
}
