//! Archetype identity - the four quadrants of the compass.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the four fixed classification outcomes.
///
/// Carries identity only; descriptive content lives in
/// [`ArchetypeProfile`](crate::domain::content::ArchetypeProfile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Archetype {
    /// High insight, lower mechanics.
    Philosopher = 1,
    /// High insight, high mechanics.
    Captain = 2,
    /// Developing both.
    Explorer = 3,
    /// Lower insight, high mechanics.
    Architect = 4,
}

impl Archetype {
    /// All archetypes in id order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Philosopher,
        Archetype::Captain,
        Archetype::Explorer,
        Archetype::Architect,
    ];

    /// Creates an Archetype from its 1-based id.
    pub fn try_from_id(id: u8) -> Result<Self, ValidationError> {
        match id {
            1 => Ok(Archetype::Philosopher),
            2 => Ok(Archetype::Captain),
            3 => Ok(Archetype::Explorer),
            4 => Ok(Archetype::Architect),
            _ => Err(ValidationError::out_of_range("archetype", 1, 4, id as i32)),
        }
    }

    /// Returns the 1-based id.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Zero-based position in [`Archetype::ALL`].
    pub fn index(&self) -> usize {
        self.id() as usize - 1
    }

    /// Quadrant for a pair of axis levels.
    pub fn from_levels(high_insight: bool, high_mechanics: bool) -> Self {
        match (high_insight, high_mechanics) {
            (true, false) => Archetype::Philosopher,
            (true, true) => Archetype::Captain,
            (false, false) => Archetype::Explorer,
            (false, true) => Archetype::Architect,
        }
    }

    /// True for the two quadrants above the insight threshold.
    pub fn is_high_insight(&self) -> bool {
        matches!(self, Archetype::Philosopher | Archetype::Captain)
    }

    /// True for the two quadrants above the mechanics threshold.
    pub fn is_high_mechanics(&self) -> bool {
        matches!(self, Archetype::Captain | Archetype::Architect)
    }

    /// Short identity name, independent of catalog content.
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Philosopher => "Philosopher",
            Archetype::Captain => "Captain",
            Archetype::Explorer => "Explorer",
            Archetype::Architect => "Architect",
        }
    }
}

impl TryFrom<u8> for Archetype {
    type Error = ValidationError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::try_from_id(id)
    }
}

impl From<Archetype> for u8 {
    fn from(archetype: Archetype) -> Self {
        archetype.id()
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
