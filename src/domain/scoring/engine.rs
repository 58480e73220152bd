//! ScoringEngine - accumulates ratings and the tie-breaker adjustment.
//!
//! Totals are never stored; every query recomputes them from the rating
//! sheets and the selected option so they cannot drift from the answers.

use std::sync::Arc;

use super::{InputError, RatingSheet, ScoreTotals};
use crate::domain::content::{Catalog, TieBreakerOption};
use crate::domain::foundation::{OptionId, Part, QuestionId, Rating};

/// Per-session scoring state.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<Catalog>,
    insight: RatingSheet,
    mechanics: RatingSheet,
    tie_breaker: Option<TieBreakerOption>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            insight: RatingSheet::new(),
            mechanics: RatingSheet::new(),
            tie_breaker: None,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Upserts the rating for one question.
    ///
    /// # Errors
    ///
    /// - `Validation` if `value` is outside 1..=5
    /// - `UnknownQuestion` if the part has no such question
    pub fn record_rating(
        &mut self,
        part: Part,
        question_id: QuestionId,
        value: i32,
    ) -> Result<Option<Rating>, InputError> {
        let rating = Rating::try_from_i32(value)?;
        if self.catalog.question(part, question_id).is_none() {
            return Err(InputError::UnknownQuestion { part, question_id });
        }
        Ok(self.sheet_mut(part).record(question_id, rating))
    }

    /// Selects the tie-breaker, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// - `UnknownOption` if the catalog has no such option
    pub fn apply_tie_breaker(&mut self, option_id: OptionId) -> Result<&TieBreakerOption, InputError> {
        let option = self
            .catalog
            .tie_breaker(option_id)
            .cloned()
            .ok_or(InputError::UnknownOption(option_id))?;
        Ok(&*self.tie_breaker.insert(option))
    }

    /// Clears all ratings and the tie-breaker.
    pub fn reset(&mut self) {
        self.insight.clear();
        self.mechanics.clear();
        self.tie_breaker = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn sheet(&self, part: Part) -> &RatingSheet {
        match part {
            Part::Insight => &self.insight,
            Part::Mechanics => &self.mechanics,
        }
    }

    pub fn rating(&self, part: Part, question_id: QuestionId) -> Option<Rating> {
        self.sheet(part).get(question_id)
    }

    /// Sum of recorded ratings for a part, without adjustment.
    pub fn total_for(&self, part: Part) -> i32 {
        self.sheet(part).total()
    }

    /// True once every question of the part has been answered.
    pub fn is_part_complete(&self, part: Part) -> bool {
        self.sheet(part).covers(self.catalog.questions(part))
    }

    /// Number of answered and total questions for a part.
    pub fn progress(&self, part: Part) -> (usize, usize) {
        (self.sheet(part).len(), self.catalog.questions(part).len())
    }

    pub fn tie_breaker(&self) -> Option<&TieBreakerOption> {
        self.tie_breaker.as_ref()
    }

    /// Unadjusted totals for both parts.
    pub fn raw_totals(&self) -> ScoreTotals {
        ScoreTotals::new(self.total_for(Part::Insight), self.total_for(Part::Mechanics))
    }

    /// Totals including the selected tie-breaker (zero adjustment if none).
    pub fn final_totals(&self) -> ScoreTotals {
        self.totals_with(self.tie_breaker.as_ref())
    }

    /// Totals as they would be with `option` as the tie-breaker.
    pub fn totals_with(&self, option: Option<&TieBreakerOption>) -> ScoreTotals {
        let (adj_a, adj_b) = option.map_or((0, 0), |o| (o.adj_a, o.adj_b));
        self.raw_totals().adjusted(adj_a, adj_b)
    }

    fn sheet_mut(&mut self, part: Part) -> &mut RatingSheet {
        match part {
            Part::Insight => &mut self.insight,
            Part::Mechanics => &mut self.mechanics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::builtin_document;
    use proptest::prelude::*;

    fn engine() -> ScoringEngine {
        let catalog = Catalog::try_from(builtin_document().unwrap()).unwrap();
        ScoringEngine::new(Arc::new(catalog))
    }

    fn fill(engine: &mut ScoringEngine, part: Part, values: [i32; 5]) {
        for (i, value) in values.iter().enumerate() {
            engine
                .record_rating(part, QuestionId::new(i as u32 + 1), *value)
                .unwrap();
        }
    }

    mod recording {
        use super::*;

        #[test]
        fn total_is_zero_before_any_rating() {
            let engine = engine();
            assert_eq!(engine.total_for(Part::Insight), 0);
            assert_eq!(engine.total_for(Part::Mechanics), 0);
        }

        #[test]
        fn parts_are_scored_independently() {
            let mut engine = engine();
            engine.record_rating(Part::Insight, QuestionId::new(1), 4).unwrap();
            engine.record_rating(Part::Mechanics, QuestionId::new(1), 2).unwrap();
            assert_eq!(engine.total_for(Part::Insight), 4);
            assert_eq!(engine.total_for(Part::Mechanics), 2);
        }

        #[test]
        fn rerecording_overwrites() {
            let mut engine = engine();
            engine.record_rating(Part::Insight, QuestionId::new(2), 1).unwrap();
            let previous = engine.record_rating(Part::Insight, QuestionId::new(2), 5).unwrap();
            assert_eq!(previous.map(|r| r.value()), Some(1));
            assert_eq!(engine.total_for(Part::Insight), 5);
        }

        #[test]
        fn rejects_out_of_range_value() {
            let mut engine = engine();
            let err = engine.record_rating(Part::Insight, QuestionId::new(1), 6).unwrap_err();
            assert!(matches!(err, InputError::Validation(_)));
            assert!(engine.sheet(Part::Insight).is_empty());
        }

        #[test]
        fn rejects_unknown_question() {
            let mut engine = engine();
            let err = engine
                .record_rating(Part::Mechanics, QuestionId::new(99), 3)
                .unwrap_err();
            assert_eq!(
                err,
                InputError::UnknownQuestion {
                    part: Part::Mechanics,
                    question_id: QuestionId::new(99)
                }
            );
        }
    }

    mod completion {
        use super::*;

        #[test]
        fn incomplete_until_every_question_answered() {
            let mut engine = engine();
            for id in 1..=4 {
                engine.record_rating(Part::Insight, QuestionId::new(id), 3).unwrap();
            }
            assert!(!engine.is_part_complete(Part::Insight));
            assert_eq!(engine.progress(Part::Insight), (4, 5));

            engine.record_rating(Part::Insight, QuestionId::new(5), 3).unwrap();
            assert!(engine.is_part_complete(Part::Insight));
            assert!(!engine.is_part_complete(Part::Mechanics));
        }

        #[test]
        fn repeated_answers_do_not_count_twice() {
            let mut engine = engine();
            for _ in 0..5 {
                engine.record_rating(Part::Insight, QuestionId::new(1), 3).unwrap();
            }
            assert!(!engine.is_part_complete(Part::Insight));
        }
    }

    mod tie_breaker {
        use super::*;

        #[test]
        fn final_totals_without_tie_breaker_equal_raw() {
            let mut engine = engine();
            fill(&mut engine, Part::Insight, [3; 5]);
            assert_eq!(engine.final_totals(), engine.raw_totals());
        }

        #[test]
        fn applies_adjustment_once() {
            let mut engine = engine();
            fill(&mut engine, Part::Insight, [3; 5]);
            fill(&mut engine, Part::Mechanics, [5; 5]);
            engine.apply_tie_breaker(OptionId::new(2)).unwrap();
            assert_eq!(engine.final_totals(), ScoreTotals::new(14, 27));
            assert_eq!(engine.raw_totals(), ScoreTotals::new(15, 25));
        }

        #[test]
        fn second_selection_replaces_first() {
            let mut engine = engine();
            fill(&mut engine, Part::Insight, [4; 5]);
            fill(&mut engine, Part::Mechanics, [2; 5]);
            engine.apply_tie_breaker(OptionId::new(1)).unwrap();
            engine.apply_tie_breaker(OptionId::new(4)).unwrap();
            assert_eq!(engine.final_totals(), ScoreTotals::new(21, 11));
            assert_eq!(engine.tie_breaker().map(|o| o.id), Some(OptionId::new(4)));
        }

        #[test]
        fn unknown_option_leaves_choice_untouched() {
            let mut engine = engine();
            engine.apply_tie_breaker(OptionId::new(3)).unwrap();
            let err = engine.apply_tie_breaker(OptionId::new(7)).unwrap_err();
            assert_eq!(err, InputError::UnknownOption(OptionId::new(7)));
            assert_eq!(engine.tie_breaker().map(|o| o.id), Some(OptionId::new(3)));
        }

        #[test]
        fn reset_clears_everything() {
            let mut engine = engine();
            fill(&mut engine, Part::Mechanics, [5; 5]);
            engine.apply_tie_breaker(OptionId::new(1)).unwrap();
            engine.reset();
            assert_eq!(engine.final_totals(), ScoreTotals::default());
            assert!(engine.tie_breaker().is_none());
        }
    }

    proptest! {
        #[test]
        fn rerecording_matches_single_final_recording(
            values in prop::collection::vec(1i32..=5, 1..10)
        ) {
            let mut repeated = engine();
            for value in &values {
                repeated.record_rating(Part::Insight, QuestionId::new(3), *value).unwrap();
            }

            let mut single = engine();
            let last = *values.last().unwrap();
            single.record_rating(Part::Insight, QuestionId::new(3), last).unwrap();

            prop_assert_eq!(repeated.total_for(Part::Insight), single.total_for(Part::Insight));
        }

        #[test]
        fn completion_ignores_answer_order(
            order in Just(vec![1u32, 2, 3, 4, 5]).prop_shuffle(),
            value in 1i32..=5
        ) {
            let mut engine = engine();
            for id in &order {
                prop_assert!(!engine.is_part_complete(Part::Mechanics));
                engine.record_rating(Part::Mechanics, QuestionId::new(*id), value).unwrap();
            }
            prop_assert!(engine.is_part_complete(Part::Mechanics));
            prop_assert_eq!(engine.total_for(Part::Mechanics), value * 5);
        }
    }
}
