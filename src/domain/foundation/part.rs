//! Part enum naming the two question batteries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two question batteries, each feeding one scoring axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Part {
    /// Part A, the insight axis.
    #[serde(rename = "A")]
    Insight,
    /// Part B, the mechanics axis.
    #[serde(rename = "B")]
    Mechanics,
}

impl Part {
    /// Both parts in assessment order.
    pub const ALL: [Part; 2] = [Part::Insight, Part::Mechanics];

    /// Single-letter code used in content files and on screen.
    pub fn code(&self) -> char {
        match self {
            Part::Insight => 'A',
            Part::Mechanics => 'B',
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Part::Insight => "Insight",
            Part::Mechanics => "Mechanics",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
