//! Transition table for the quiz flow.
//!
//! Every legal step change is listed once, together with the intent that
//! fires it and the guard that must hold. The session consults this
//! table instead of branching on steps.

use super::QuizStep;
use crate::domain::foundation::Part;

/// User intent that can move the session between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Advance,
    GoBack,
    SelectTieBreaker,
}

/// Precondition checked before a transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    PartComplete(Part),
}

/// A single row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: QuizStep,
    pub to: QuizStep,
    pub trigger: Trigger,
    pub guard: Guard,
}

const fn row(from: QuizStep, trigger: Trigger, to: QuizStep, guard: Guard) -> Transition {
    Transition {
        from,
        to,
        trigger,
        guard,
    }
}

/// All legal transitions.
pub const TRANSITIONS: [Transition; 6] = [
    row(QuizStep::Intro, Trigger::Advance, QuizStep::PartA, Guard::Always),
    row(
        QuizStep::PartA,
        Trigger::Advance,
        QuizStep::PartB,
        Guard::PartComplete(Part::Insight),
    ),
    row(QuizStep::PartB, Trigger::GoBack, QuizStep::PartA, Guard::Always),
    row(
        QuizStep::PartB,
        Trigger::Advance,
        QuizStep::TieBreaker,
        Guard::PartComplete(Part::Mechanics),
    ),
    row(QuizStep::TieBreaker, Trigger::GoBack, QuizStep::PartB, Guard::Always),
    row(
        QuizStep::TieBreaker,
        Trigger::SelectTieBreaker,
        QuizStep::Results,
        Guard::Always,
    ),
];

/// Finds the transition a trigger fires from a step.
pub fn lookup(from: QuizStep, trigger: Trigger) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.from == from && t.trigger == trigger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_step_has_at_most_one_row_per_trigger() {
        for t in &TRANSITIONS {
            let count = TRANSITIONS
                .iter()
                .filter(|o| o.from == t.from && o.trigger == t.trigger)
                .count();
            assert_eq!(count, 1, "{:?} has ambiguous {:?}", t.from, t.trigger);
        }
    }

    #[test]
    fn battery_exits_are_guarded_by_completion() {
        assert_eq!(
            lookup(QuizStep::PartA, Trigger::Advance).unwrap().guard,
            Guard::PartComplete(Part::Insight)
        );
        assert_eq!(
            lookup(QuizStep::PartB, Trigger::Advance).unwrap().guard,
            Guard::PartComplete(Part::Mechanics)
        );
    }

    #[test]
    fn results_has_no_outgoing_rows() {
        assert!(lookup(QuizStep::Results, Trigger::Advance).is_none());
        assert!(lookup(QuizStep::Results, Trigger::GoBack).is_none());
    }

    #[test]
    fn intro_has_no_back_step() {
        assert!(lookup(QuizStep::Intro, Trigger::GoBack).is_none());
        assert!(lookup(QuizStep::PartA, Trigger::GoBack).is_none());
    }

    #[test]
    fn only_tie_breaker_screen_accepts_selection() {
        let steps: Vec<QuizStep> = TRANSITIONS
            .iter()
            .filter(|t| t.trigger == Trigger::SelectTieBreaker)
            .map(|t| t.from)
            .collect();
        assert_eq!(steps, vec![QuizStep::TieBreaker]);
    }
}
