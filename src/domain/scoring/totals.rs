//! Score totals for the two axes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Part;

/// Insight and mechanics totals, raw or adjusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreTotals {
    pub insight: i32,
    pub mechanics: i32,
}

impl ScoreTotals {
    pub fn new(insight: i32, mechanics: i32) -> Self {
        Self { insight, mechanics }
    }

    /// Total for one part.
    pub fn get(&self, part: Part) -> i32 {
        match part {
            Part::Insight => self.insight,
            Part::Mechanics => self.mechanics,
        }
    }

    /// Adds per-axis adjustments.
    pub fn adjusted(self, adj_a: i32, adj_b: i32) -> Self {
        Self {
            insight: self.insight.saturating_add(adj_a),
            mechanics: self.mechanics.saturating_add(adj_b),
        }
    }
}
