//! Scoring module - rating sheets, totals and the scoring engine.

mod engine;
mod errors;
mod sheet;
mod totals;

pub use engine::ScoringEngine;
pub use errors::InputError;
pub use sheet::RatingSheet;
pub use totals::ScoreTotals;
