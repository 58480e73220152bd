//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the quiz core and the outside world. Adapters implement these ports.
//!
//! - `ContentSource` - Supplies the question/archetype catalog
//! - `Presenter` - Renders screens and returns user intents

mod content_source;
mod presenter;

pub use content_source::ContentSource;
pub use presenter::{Presenter, PresenterError};
