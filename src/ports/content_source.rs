//! Content source port.
//!
//! Where the catalog comes from is a deployment decision; the quiz only
//! needs a validated [`Catalog`].

use crate::domain::content::{Catalog, ContentError};

/// Port for loading the read-only content store.
pub trait ContentSource: Send + Sync {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// - `Io` / `UnsupportedFormat` when the source cannot be read
    /// - `Yaml` / `Json` / `Invalid` when its content is malformed
    fn load(&self) -> Result<Catalog, ContentError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}
