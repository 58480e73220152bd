//! Line command parsing for the terminal presenter.
//!
//! Which commands exist depends on the screen; anything else parses to
//! `None` and the presenter asks again.

use crate::application::Intent;
use crate::domain::foundation::{OptionId, Part, QuestionId};
use crate::domain::quiz::QuizStep;

/// Parses one input line on the given step.
pub fn parse(step: QuizStep, line: &str) -> Option<Intent> {
    let line = line.trim().to_ascii_lowercase();
    let words: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == '=' || c == ':')
        .filter(|w| !w.is_empty())
        .collect();

    match words.as_slice() {
        ["q"] | ["quit"] => return Some(Intent::Quit),
        ["r"] | ["restart"] => return Some(Intent::Restart),
        _ => {}
    }

    match step {
        QuizStep::Intro => match words.as_slice() {
            [] | ["b"] | ["begin"] => Some(Intent::Advance),
            _ => None,
        },
        QuizStep::PartA => battery(Part::Insight, &words),
        QuizStep::PartB => battery(Part::Mechanics, &words),
        QuizStep::TieBreaker => match words.as_slice() {
            ["p"] | ["back"] => Some(Intent::GoBack),
            [id] => id.parse::<u32>().ok().map(|id| Intent::SelectTieBreaker {
                option_id: OptionId::new(id),
            }),
            _ => None,
        },
        QuizStep::Results => match words.as_slice() {
            [id] => id
                .parse::<u8>()
                .ok()
                .map(|archetype_id| Intent::ViewQuadrant { archetype_id }),
            _ => None,
        },
    }
}

fn battery(part: Part, words: &[&str]) -> Option<Intent> {
    match words {
        ["n"] | ["next"] => Some(Intent::Advance),
        ["p"] | ["back"] => Some(Intent::GoBack),
        [question, value] => {
            let question_id = QuestionId::new(question.parse().ok()?);
            let value = value.parse().ok()?;
            Some(Intent::Answer {
                part,
                question_id,
                value,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod everywhere {
        use super::*;

        #[test]
        fn quit_and_restart_work_on_every_step() {
            for step in [
                QuizStep::Intro,
                QuizStep::PartA,
                QuizStep::PartB,
                QuizStep::TieBreaker,
                QuizStep::Results,
            ] {
                assert_eq!(parse(step, "q"), Some(Intent::Quit));
                assert_eq!(parse(step, " QUIT "), Some(Intent::Quit));
                assert_eq!(parse(step, "r"), Some(Intent::Restart));
            }
        }

        #[test]
        fn garbage_is_unrecognized() {
            assert_eq!(parse(QuizStep::PartA, "hello"), None);
            assert_eq!(parse(QuizStep::Results, "1 2"), None);
        }
    }

    mod intro {
        use super::*;

        #[test]
        fn enter_or_b_begins() {
            assert_eq!(parse(QuizStep::Intro, ""), Some(Intent::Advance));
            assert_eq!(parse(QuizStep::Intro, "b"), Some(Intent::Advance));
            assert_eq!(parse(QuizStep::Intro, "begin"), Some(Intent::Advance));
        }
    }

    mod battery {
        use super::*;

        #[test]
        fn answers_target_the_screen_part() {
            assert_eq!(
                parse(QuizStep::PartA, "3 4"),
                Some(Intent::Answer {
                    part: Part::Insight,
                    question_id: QuestionId::new(3),
                    value: 4,
                })
            );
            assert_eq!(
                parse(QuizStep::PartB, "2=5"),
                Some(Intent::Answer {
                    part: Part::Mechanics,
                    question_id: QuestionId::new(2),
                    value: 5,
                })
            );
        }

        #[test]
        fn out_of_range_values_still_parse() {
            assert_eq!(
                parse(QuizStep::PartA, "1 9"),
                Some(Intent::Answer {
                    part: Part::Insight,
                    question_id: QuestionId::new(1),
                    value: 9,
                })
            );
        }

        #[test]
        fn navigation() {
            assert_eq!(parse(QuizStep::PartA, "n"), Some(Intent::Advance));
            assert_eq!(parse(QuizStep::PartB, "p"), Some(Intent::GoBack));
        }

        #[test]
        fn malformed_answers_are_unrecognized() {
            assert_eq!(parse(QuizStep::PartA, "x 4"), None);
            assert_eq!(parse(QuizStep::PartA, "-1 4"), None);
            assert_eq!(parse(QuizStep::PartA, "4"), None);
        }
    }

    mod tie_breaker {
        use super::*;

        #[test]
        fn number_selects_option() {
            assert_eq!(
                parse(QuizStep::TieBreaker, "2"),
                Some(Intent::SelectTieBreaker {
                    option_id: OptionId::new(2)
                })
            );
            assert_eq!(parse(QuizStep::TieBreaker, "p"), Some(Intent::GoBack));
        }
    }

    mod results {
        use super::*;

        #[test]
        fn number_views_quadrant() {
            assert_eq!(
                parse(QuizStep::Results, "4"),
                Some(Intent::ViewQuadrant { archetype_id: 4 })
            );
            assert_eq!(parse(QuizStep::Results, "300"), None);
        }
    }
}
