//! Application layer - orchestrates the quiz around the domain.
//!
//! - `Intent` - user actions emitted by presenters
//! - `IntentHandler` - applies intents to a session
//! - `StepView` - read-only screen models
//! - `QuizRunner` - the render/dispatch loop
//! - `load_catalog` - content bootstrap from configuration

mod catalog;
mod dispatch;
mod intent;
mod runner;
mod views;

pub use catalog::{content_source, load_catalog};
pub use dispatch::{IntentHandler, Outcome};
pub use intent::Intent;
pub use runner::{QuizRunner, RunError, RunSummary};
pub use views::{
    BatteryView, IntroView, OptionView, QuadrantTile, QuestionView, ResultsView, StepView,
    TieBreakerView,
};
