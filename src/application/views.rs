//! Screen view models built from a session.
//!
//! Presenters render these and nothing else. Views are read-only copies;
//! tie-breaker adjustments and scoring internals stay hidden until results.

use serde::Serialize;

use crate::domain::classification::{Archetype, MarkerPosition, QuadrantChart};
use crate::domain::content::ArchetypeProfile;
use crate::domain::foundation::{OptionId, Part, QuestionId, Rating};
use crate::domain::quiz::{QuizError, QuizSession, QuizStep};
use crate::domain::scoring::ScoreTotals;

/// What the current screen shows.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum StepView {
    Intro(IntroView),
    Battery(BatteryView),
    TieBreaker(TieBreakerView),
    Results(Box<ResultsView>),
}

impl StepView {
    /// Builds the view for the session's current step.
    ///
    /// # Errors
    ///
    /// - `PrematureQuery` if the session claims to be on results without a
    ///   classification, which the session's invariants rule out
    pub fn of(session: &QuizSession) -> Result<Self, QuizError> {
        let view = match session.current_step() {
            QuizStep::Intro => StepView::Intro(IntroView::of(session)),
            QuizStep::PartA => StepView::Battery(BatteryView::of(session, Part::Insight)),
            QuizStep::PartB => StepView::Battery(BatteryView::of(session, Part::Mechanics)),
            QuizStep::TieBreaker => StepView::TieBreaker(TieBreakerView::of(session)),
            QuizStep::Results => StepView::Results(Box::new(ResultsView::of(session)?)),
        };
        Ok(view)
    }

    pub fn step(&self) -> QuizStep {
        match self {
            StepView::Intro(_) => QuizStep::Intro,
            StepView::Battery(view) => QuizStep::for_part(view.part),
            StepView::TieBreaker(_) => QuizStep::TieBreaker,
            StepView::Results(_) => QuizStep::Results,
        }
    }
}

/// Landing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroView {
    pub insight_questions: usize,
    pub mechanics_questions: usize,
}

impl IntroView {
    fn of(session: &QuizSession) -> Self {
        let catalog = session.catalog();
        Self {
            insight_questions: catalog.questions(Part::Insight).len(),
            mechanics_questions: catalog.questions(Part::Mechanics).len(),
        }
    }
}

/// One question with the user's current answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: String,
    pub rating: Option<Rating>,
}

/// A question battery screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryView {
    pub part: Part,
    pub questions: Vec<QuestionView>,
    pub answered: usize,

    /// Actions
    pub can_advance: bool,
    pub can_go_back: bool,
}

impl BatteryView {
    fn of(session: &QuizSession, part: Part) -> Self {
        let scoring = session.scoring();
        let (answered, _) = scoring.progress(part);
        let questions = session
            .catalog()
            .questions(part)
            .iter()
            .map(|q| QuestionView {
                id: q.id,
                text: q.text.clone(),
                rating: scoring.rating(part, q.id),
            })
            .collect();

        Self {
            part,
            questions,
            answered,
            can_advance: session.can_advance(),
            can_go_back: session.can_go_back(),
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answered == self.questions.len()
    }
}

/// A tie-breaker choice as offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    pub id: OptionId,
    pub text: String,
}

/// The forced-choice screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TieBreakerView {
    pub options: Vec<OptionView>,
    pub can_go_back: bool,
}

impl TieBreakerView {
    fn of(session: &QuizSession) -> Self {
        Self {
            options: session
                .catalog()
                .tie_breakers()
                .iter()
                .map(|o| OptionView {
                    id: o.id,
                    text: o.text.clone(),
                })
                .collect(),
            can_go_back: session.can_go_back(),
        }
    }
}

/// One cell of the 2x2 results grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantTile {
    pub archetype: Archetype,
    pub name: String,
    pub tagline: String,
    pub is_result: bool,
    pub is_viewed: bool,
}

/// Results screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub result: Archetype,
    pub result_profile: ArchetypeProfile,
    pub totals: ScoreTotals,
    pub threshold: i32,
    pub marker: MarkerPosition,

    /// Whole seconds from start to classification
    pub elapsed_secs: i64,

    /// Profile of the quadrant currently selected for reading
    pub viewed: ArchetypeProfile,

    /// Grid in id order: Philosopher, Captain, Explorer, Architect
    pub quadrants: Vec<QuadrantTile>,
}

impl ResultsView {
    fn of(session: &QuizSession) -> Result<Self, QuizError> {
        let classification = *session.classification()?;
        let viewed = session.viewed_archetype()?;
        let catalog = session.catalog();

        let quadrants = catalog
            .profiles()
            .iter()
            .map(|profile| QuadrantTile {
                archetype: profile.id,
                name: profile.name.clone(),
                tagline: profile.tagline.clone(),
                is_result: profile.id == classification.archetype,
                is_viewed: profile.id == viewed,
            })
            .collect();

        Ok(Self {
            result: classification.archetype,
            result_profile: catalog.profile(classification.archetype).clone(),
            totals: classification.totals,
            threshold: classification.threshold,
            marker: QuadrantChart::for_threshold(classification.threshold)
                .marker(classification.totals),
            elapsed_secs: session.elapsed().map_or(0, |d| d.num_seconds()),
            viewed: catalog.profile(viewed).clone(),
            quadrants,
        })
    }

    /// Returns true when the user is reading someone else's quadrant.
    pub fn is_browsing(&self) -> bool {
        self.viewed.id != self.result
    }
}
