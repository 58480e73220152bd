//! Catalog - the validated, read-only content store.
//!
//! A catalog bundles both question batteries, the tie-breaker options, the
//! four archetype profiles and the classification threshold. It is built
//! once from a [`CatalogDocument`] and shared behind an `Arc`.
//!
//! # Invariants
//!
//! - Each part has at least one question, ids unique within the part
//! - Exactly four tie-breaker options with unique ids
//! - Exactly one profile per archetype

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{ArchetypeProfile, ContentError, Question, TieBreakerOption};
use crate::domain::classification::Archetype;
use crate::domain::foundation::{OptionId, Part, QuestionId, ValidationError};

/// Threshold used when a document does not name one.
pub const DEFAULT_THRESHOLD: i32 = 18;

/// Number of tie-breaker options a catalog must offer.
pub const TIE_BREAKER_COUNT: usize = 4;

/// Raw, unvalidated catalog as it appears in a content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default = "default_threshold")]
    pub threshold: i32,
    pub questions_a: Vec<Question>,
    pub questions_b: Vec<Question>,
    pub tie_breakers: Vec<TieBreakerOption>,
    pub archetypes: Vec<ArchetypeProfile>,
}

fn default_threshold() -> i32 {
    DEFAULT_THRESHOLD
}

impl CatalogDocument {
    /// Parses a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, ContentError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON document.
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Validated content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    threshold: i32,
    questions_a: Vec<Question>,
    questions_b: Vec<Question>,
    tie_breakers: Vec<TieBreakerOption>,
    /// Indexed by `Archetype::index()`.
    profiles: [ArchetypeProfile; 4],
}

impl Catalog {
    /// Validates a document into a catalog.
    ///
    /// # Errors
    ///
    /// - `ValidationError` describing the first broken invariant
    pub fn from_document(doc: CatalogDocument) -> Result<Self, ValidationError> {
        Self::validate_questions("questions_a", &doc.questions_a)?;
        Self::validate_questions("questions_b", &doc.questions_b)?;
        Self::validate_tie_breakers(&doc.tie_breakers)?;
        let profiles = Self::index_profiles(doc.archetypes)?;

        Ok(Self {
            threshold: doc.threshold,
            questions_a: doc.questions_a,
            questions_b: doc.questions_b,
            tie_breakers: doc.tie_breakers,
            profiles,
        })
    }

    /// Replaces the classification threshold.
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Cut-off separating high from low on both axes.
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Ordered questions of one part.
    pub fn questions(&self, part: Part) -> &[Question] {
        match part {
            Part::Insight => &self.questions_a,
            Part::Mechanics => &self.questions_b,
        }
    }

    /// Looks up a question within one part.
    pub fn question(&self, part: Part, id: QuestionId) -> Option<&Question> {
        self.questions(part).iter().find(|q| q.id == id)
    }

    /// All tie-breaker options in display order.
    pub fn tie_breakers(&self) -> &[TieBreakerOption] {
        &self.tie_breakers
    }

    /// Looks up a tie-breaker option.
    pub fn tie_breaker(&self, id: OptionId) -> Option<&TieBreakerOption> {
        self.tie_breakers.iter().find(|o| o.id == id)
    }

    /// Profile content for an archetype.
    pub fn profile(&self, archetype: Archetype) -> &ArchetypeProfile {
        &self.profiles[archetype.index()]
    }

    /// Profiles in archetype order.
    pub fn profiles(&self) -> &[ArchetypeProfile; 4] {
        &self.profiles
    }

    /// Converts back into a serializable document.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            threshold: self.threshold,
            questions_a: self.questions_a.clone(),
            questions_b: self.questions_b.clone(),
            tie_breakers: self.tie_breakers.clone(),
            archetypes: self.profiles.to_vec(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_questions(field: &str, questions: &[Question]) -> Result<(), ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let mut seen = BTreeSet::new();
        for question in questions {
            question.validate(field)?;
            if !seen.insert(question.id) {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("duplicate question id {}", question.id),
                ));
            }
        }
        Ok(())
    }

    fn validate_tie_breakers(options: &[TieBreakerOption]) -> Result<(), ValidationError> {
        if options.len() != TIE_BREAKER_COUNT {
            return Err(ValidationError::invalid_format(
                "tie_breakers",
                format!(
                    "expected {} options, found {}",
                    TIE_BREAKER_COUNT,
                    options.len()
                ),
            ));
        }
        let mut seen = BTreeSet::new();
        for option in options {
            option.validate()?;
            if !seen.insert(option.id) {
                return Err(ValidationError::invalid_format(
                    "tie_breakers",
                    format!("duplicate option id {}", option.id),
                ));
            }
        }
        Ok(())
    }

    fn index_profiles(
        mut profiles: Vec<ArchetypeProfile>,
    ) -> Result<[ArchetypeProfile; 4], ValidationError> {
        profiles.sort_by_key(|p| p.id);
        let ids: Vec<Archetype> = profiles.iter().map(|p| p.id).collect();
        if ids != Archetype::ALL {
            return Err(ValidationError::invalid_format(
                "archetypes",
                "expected exactly one profile for each of archetypes 1-4",
            ));
        }
        <[ArchetypeProfile; 4]>::try_from(profiles).map_err(|_| {
            ValidationError::invalid_format("archetypes", "expected exactly four profiles")
        })
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = ContentError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Ok(Catalog::from_document(doc)?)
    }
}
