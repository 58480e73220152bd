//! QuizStep - the screens a session moves through.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::flow::TRANSITIONS;
use crate::domain::foundation::{Part, StateMachine};

/// The active screen of a quiz session.
///
/// Sessions move `Intro -> PartA -> PartB -> TieBreaker -> Results`, with
/// back steps `PartB -> PartA` and `TieBreaker -> PartB`. Leaving
/// `Results` is only possible through a restart, which is a reset rather
/// than a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizStep {
    #[default]
    Intro,
    PartA,
    PartB,
    TieBreaker,
    Results,
}

impl QuizStep {
    /// The battery screen for a part.
    pub fn for_part(part: Part) -> Self {
        match part {
            Part::Insight => QuizStep::PartA,
            Part::Mechanics => QuizStep::PartB,
        }
    }

    /// The part answered on this screen, if any.
    pub fn part(&self) -> Option<Part> {
        match self {
            QuizStep::PartA => Some(Part::Insight),
            QuizStep::PartB => Some(Part::Mechanics),
            _ => None,
        }
    }
}

impl StateMachine for QuizStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        TRANSITIONS
            .iter()
            .any(|t| t.from == *self && t.to == *target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        TRANSITIONS
            .iter()
            .filter(|t| t.from == *self)
            .map(|t| t.to)
            .collect()
    }
}

impl fmt::Display for QuizStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizStep::Intro => "intro",
            QuizStep::PartA => "partA",
            QuizStep::PartB => "partB",
            QuizStep::TieBreaker => "tiebreaker",
            QuizStep::Results => "results",
        };
        write!(f, "{}", s)
    }
}
