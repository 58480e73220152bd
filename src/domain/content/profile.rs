//! Descriptive content attached to each archetype.

use serde::{Deserialize, Serialize};

use crate::domain::classification::Archetype;

/// Explanatory content for one archetype, shown in the results view.
///
/// The classifier never reads this; it only selects an [`Archetype`] and
/// the presentation looks the profile up by that identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    pub id: Archetype,
    pub name: String,
    pub tagline: String,
    pub result_title: String,
    pub result_quote: String,
    pub diagnosis: String,
    pub prescription: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    pub approach: String,
}
