//! Quiz module - the step flow and the session aggregate.
//!
//! # Flow
//!
//! ```text
//! intro -> partA <-> partB <-> tiebreaker -> results
//! ```
//!
//! Forward moves out of a battery require every question in it to be
//! answered. Results is entered only by choosing a tie-breaker, and left
//! only by restarting.

mod flow;
mod errors;
mod session;
mod snapshot;
mod step;

pub use errors::{QuizAction, QuizError, Rejection, ResultQuery};
pub use flow::{Guard, Transition, Trigger, TRANSITIONS};
pub use session::QuizSession;
pub use snapshot::QuizSnapshot;
pub use step::QuizStep;
