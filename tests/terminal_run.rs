//! End-to-end runs of the terminal presenter over scripted input.

use std::io::Cursor;
use std::sync::Arc;

use lit_compass::adapters::{EmbeddedContentSource, TerminalPresenter};
use lit_compass::application::QuizRunner;
use lit_compass::domain::classification::Archetype;
use lit_compass::domain::quiz::{QuizSession, QuizStep};
use lit_compass::ports::ContentSource;

fn run_script(script: &str) -> (QuizSession, String, Option<Archetype>) {
    let catalog = Arc::new(EmbeddedContentSource::new().load().unwrap());
    let mut session = QuizSession::new(catalog);
    let presenter = TerminalPresenter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());

    let mut runner = QuizRunner::new(presenter);
    let summary = runner.run(&mut session).unwrap();
    let output = String::from_utf8(runner.into_presenter().into_output()).unwrap();
    (session, output, summary.classification.map(|c| c.archetype))
}

#[test]
fn completes_quiz_from_typed_commands() {
    let script = "b\n1 3\n2 3\n3 3\n4 3\n5 3\nn\n1 5\n2 5\n3 5\n4 5\n5 5\nn\n2\nq\n";
    let (session, output, archetype) = run_script(script);

    assert_eq!(archetype, Some(Archetype::Architect));
    assert_eq!(session.current_step(), QuizStep::Results);
    assert!(output.contains("Your result: Architect"));
    assert!(output.contains("Insight 14 / Mechanics 27 (threshold 18)"));
}

#[test]
fn next_is_ignored_until_part_is_complete() {
    let script = "b\n1 4\n2 4\n3 4\n4 4\nn\n";
    let (session, output, archetype) = run_script(script);

    assert_eq!(archetype, None);
    assert_eq!(session.current_step(), QuizStep::PartA);
    assert!(output.contains("(4/5 answered)"));
    assert!(!output.contains("Section 2 of 2"));
}

#[test]
fn bad_rating_is_reported_and_not_recorded() {
    let (session, output, _) = run_script("b\n1 7\nq\n");

    assert!(output.contains("! Invalid input: Field 'rating' must be between 1 and 5, got 7"));
    assert_eq!(session.raw_total(lit_compass::domain::foundation::Part::Insight), 0);
}

#[test]
fn restart_from_results_returns_to_intro() {
    let script = "b\n1 4\n2 4\n3 4\n4 4\n5 4\nn\n1 2\n2 2\n3 2\n4 2\n5 2\nn\n4\n3\nr\n";
    let (session, output, archetype) = run_script(script);

    assert_eq!(archetype, None);
    assert_eq!(session.current_step(), QuizStep::Intro);
    assert!(output.contains("Your result: Philosopher"));
    assert!(output.contains("Viewing The Explorer (not your result)"));
}

#[test]
fn end_of_input_quits_cleanly() {
    let (session, _, archetype) = run_script("b\n");
    assert_eq!(archetype, None);
    assert_eq!(session.current_step(), QuizStep::PartA);
}
