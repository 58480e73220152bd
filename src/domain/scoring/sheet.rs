//! RatingSheet - answers recorded for one part.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::content::Question;
use crate::domain::foundation::{QuestionId, Rating};

/// Mapping from question id to the rating given for it.
///
/// Re-answering a question overwrites the earlier rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingSheet {
    ratings: BTreeMap<QuestionId, Rating>,
}

impl RatingSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a rating, returning the one it replaced.
    pub fn record(&mut self, question_id: QuestionId, rating: Rating) -> Option<Rating> {
        self.ratings.insert(question_id, rating)
    }

    pub fn get(&self, question_id: QuestionId) -> Option<Rating> {
        self.ratings.get(&question_id).copied()
    }

    /// Number of distinct questions answered.
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Sum of all recorded ratings; 0 when empty.
    pub fn total(&self) -> i32 {
        self.ratings.values().map(|r| i32::from(r.value())).sum()
    }

    /// True when every question in `questions` has a rating.
    pub fn covers(&self, questions: &[Question]) -> bool {
        self.ratings.len() == questions.len()
            && questions.iter().all(|q| self.ratings.contains_key(&q.id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Rating)> + '_ {
        self.ratings.iter().map(|(id, rating)| (*id, *rating))
    }

    pub fn clear(&mut self) {
        self.ratings.clear();
    }
}
