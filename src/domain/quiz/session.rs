//! QuizSession aggregate - the flow state machine over a scoring engine.
//!
//! A session owns everything one user produces: the current step, both
//! rating sheets, the tie-breaker choice and the resulting classification.
//! All commands are synchronous; a failed command leaves the session
//! exactly as it was.
//!
//! # Invariants
//!
//! - `classification` is `Some` iff `step == Results`
//! - `viewed` is `Some` iff `classification` is `Some`
//! - Ratings only change while their part's screen is active, so the
//!   stored classification always matches the stored ratings

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info};

use super::flow::{self, Guard, Trigger};
use super::{QuizAction, QuizError, QuizSnapshot, QuizStep, Rejection, ResultQuery};
use crate::domain::classification::{Archetype, Classification};
use crate::domain::content::{ArchetypeProfile, Catalog};
use crate::domain::foundation::{OptionId, Part, QuestionId, SessionId, StateMachine, Timestamp};
use crate::domain::scoring::{ScoreTotals, ScoringEngine};

/// One user's pass through the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: SessionId,
    step: QuizStep,
    scoring: ScoringEngine,
    classification: Option<Classification>,
    viewed: Option<Archetype>,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl QuizSession {
    /// Starts a fresh session on the intro screen.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            id: SessionId::new(),
            step: QuizStep::Intro,
            scoring: ScoringEngine::new(catalog),
            classification: None,
            viewed: None,
            started_at: Timestamp::now(),
            completed_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn current_step(&self) -> QuizStep {
        self.step
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.scoring.catalog()
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// When the session reached results, if it has.
    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn is_part_complete(&self, part: Part) -> bool {
        self.scoring.is_part_complete(part)
    }

    /// Unadjusted total for a part; always available.
    pub fn raw_total(&self, part: Part) -> i32 {
        self.scoring.total_for(part)
    }

    /// Totals including the tie-breaker adjustment.
    ///
    /// # Errors
    ///
    /// - `PrematureQuery` before a tie-breaker has been selected
    pub fn final_totals(&self) -> Result<ScoreTotals, QuizError> {
        if self.scoring.tie_breaker().is_none() {
            return Err(QuizError::premature(ResultQuery::FinalTotals));
        }
        Ok(self.scoring.final_totals())
    }

    /// The user's result, fixed when results were entered.
    ///
    /// # Errors
    ///
    /// - `PrematureQuery` before a tie-breaker has been selected
    pub fn classification(&self) -> Result<&Classification, QuizError> {
        self.classification
            .as_ref()
            .ok_or(QuizError::premature(ResultQuery::Classification))
    }

    /// The quadrant currently shown in the results view.
    ///
    /// # Errors
    ///
    /// - `PrematureQuery` before a tie-breaker has been selected
    pub fn viewed_archetype(&self) -> Result<Archetype, QuizError> {
        self.viewed
            .ok_or(QuizError::premature(ResultQuery::ViewedArchetype))
    }

    /// Profile content for the viewed quadrant.
    pub fn viewed_profile(&self) -> Result<&ArchetypeProfile, QuizError> {
        let archetype = self.viewed_archetype()?;
        Ok(self.catalog().profile(archetype))
    }

    /// Returns true if `advance()` would succeed right now.
    pub fn can_advance(&self) -> bool {
        self.check(Trigger::Advance, QuizAction::Advance).is_ok()
    }

    /// Returns true if `go_back()` would succeed right now.
    pub fn can_go_back(&self) -> bool {
        self.check(Trigger::GoBack, QuizAction::GoBack).is_ok()
    }

    /// Returns true once the session has reached its final screen.
    pub fn is_finished(&self) -> bool {
        self.step.is_terminal()
    }

    /// Time from start to classification, once classified.
    pub fn elapsed(&self) -> Option<Duration> {
        self.completed_at
            .map(|completed| completed.duration_since(&self.started_at))
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            step: self.step,
            ratings_a: self.scoring.sheet(Part::Insight).clone(),
            ratings_b: self.scoring.sheet(Part::Mechanics).clone(),
            tie_breaker: self.scoring.tie_breaker().map(|o| o.id),
            classification: self.classification,
            viewed: self.viewed,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Records a rating for a question of the part on screen.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the part's screen is not active
    /// - `InvalidInput` if the value is outside 1..=5 or the question is unknown
    pub fn answer(
        &mut self,
        part: Part,
        question_id: QuestionId,
        value: i32,
    ) -> Result<(), QuizError> {
        if self.step.part() != Some(part) {
            return Err(QuizError::not_available(self.step, QuizAction::Answer));
        }
        let previous = self.scoring.record_rating(part, question_id, value)?;
        debug!(
            session_id = %self.id,
            part = %part,
            question = %question_id,
            value,
            replaced = previous.map(|r| r.value()),
            "Rating recorded"
        );
        Ok(())
    }

    /// Attempts the guarded forward transition for the current step.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if there is no forward step or its guard fails
    pub fn advance(&mut self) -> Result<QuizStep, QuizError> {
        self.fire(Trigger::Advance, QuizAction::Advance)
    }

    /// Attempts the backward transition for the current step.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the current step has no back step
    pub fn go_back(&mut self) -> Result<QuizStep, QuizError> {
        self.fire(Trigger::GoBack, QuizAction::GoBack)
    }

    /// Selects the tie-breaker and moves to results.
    ///
    /// Persists the choice, computes final totals, classifies, points the
    /// results view at the classification and enters `Results`. Either all
    /// of that happens or none of it does.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside the tie-breaker screen
    /// - `InvalidInput` if the option id is unknown
    pub fn select_tie_breaker(&mut self, option_id: OptionId) -> Result<&Classification, QuizError> {
        let transition = self.check(Trigger::SelectTieBreaker, QuizAction::SelectTieBreaker)?;
        let target = self.target(transition.to, QuizAction::SelectTieBreaker)?;

        self.scoring.apply_tie_breaker(option_id)?;
        let totals = self.scoring.final_totals();
        let classification =
            Classification::compute(totals, self.catalog().threshold(), option_id);

        let completed_at = Timestamp::now();
        self.step = target;
        self.viewed = Some(classification.archetype);
        self.completed_at = Some(completed_at);

        info!(
            session_id = %self.id,
            option = %option_id,
            insight = totals.insight,
            mechanics = totals.mechanics,
            archetype = %classification.archetype,
            elapsed_ms = completed_at.duration_since(&self.started_at).num_milliseconds(),
            "Session classified"
        );

        Ok(&*self.classification.insert(classification))
    }

    /// Shows another quadrant's profile in the results view.
    ///
    /// Does not touch the classification, the ratings or the step.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside results
    /// - `InvalidInput` if the id is not 1-4
    pub fn view_quadrant(&mut self, archetype_id: u8) -> Result<Archetype, QuizError> {
        if self.step != QuizStep::Results {
            return Err(QuizError::not_available(self.step, QuizAction::ViewQuadrant));
        }
        let archetype = Archetype::try_from_id(archetype_id)?;
        self.viewed = Some(archetype);
        debug!(session_id = %self.id, archetype = %archetype, "Viewing quadrant");
        Ok(archetype)
    }

    /// Discards all progress and returns to the intro screen.
    ///
    /// The session takes a new id; nothing from the previous run survives.
    pub fn restart(&mut self) {
        let previous = self.id;
        self.id = SessionId::new();
        self.step = QuizStep::Intro;
        self.scoring.reset();
        self.classification = None;
        self.viewed = None;
        self.started_at = Timestamp::now();
        self.completed_at = None;
        info!(previous = %previous, session_id = %self.id, "Session restarted");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn fire(&mut self, trigger: Trigger, action: QuizAction) -> Result<QuizStep, QuizError> {
        let transition = self.check(trigger, action)?;
        let from = self.step;
        self.step = self.target(transition.to, action)?;
        debug!(session_id = %self.id, from = %from, to = %self.step, "Step changed");
        Ok(self.step)
    }

    /// Confirms the step graph allows moving to `to`.
    fn target(&self, to: QuizStep, action: QuizAction) -> Result<QuizStep, QuizError> {
        self.step
            .transition_to(to)
            .map_err(|_| QuizError::not_available(self.step, action))
    }

    /// Finds the transition for a trigger and checks its guard.
    fn check(
        &self,
        trigger: Trigger,
        action: QuizAction,
    ) -> Result<&'static flow::Transition, QuizError> {
        let transition = flow::lookup(self.step, trigger)
            .ok_or(QuizError::not_available(self.step, action))?;

        match transition.guard {
            Guard::Always => Ok(transition),
            Guard::PartComplete(part) if self.scoring.is_part_complete(part) => Ok(transition),
            Guard::PartComplete(part) => Err(QuizError::InvalidTransition {
                from: self.step,
                action,
                rejection: Rejection::PartIncomplete(part),
            }),
        }
    }
}
