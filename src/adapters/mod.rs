//! Adapters - Implementations of port interfaces.
//!
//! - `content` - Built-in and file-backed catalog sources
//! - `terminal` - Line-oriented presenter for the binary

pub mod content;
pub mod terminal;

pub use content::{CatalogFormat, EmbeddedContentSource, FileContentSource};
pub use terminal::TerminalPresenter;
