//! Content module - the read-only question, option and archetype tables.
//!
//! Content is injected into the quiz as an `Arc<Catalog>`; nothing in the
//! scoring or flow logic mutates it.

mod catalog;
mod errors;
mod profile;
mod question;
mod tie_breaker;

pub use catalog::{Catalog, CatalogDocument, DEFAULT_THRESHOLD, TIE_BREAKER_COUNT};
pub use errors::ContentError;
pub use profile::ArchetypeProfile;
pub use question::Question;
pub use tie_breaker::TieBreakerOption;

/// YAML source of the catalog shipped with the binary.
pub const BUILTIN_CATALOG_YAML: &str = include_str!("builtin_catalog.yaml");

/// Parses the shipped catalog document.
pub fn builtin_document() -> Result<CatalogDocument, ContentError> {
    CatalogDocument::from_yaml(BUILTIN_CATALOG_YAML)
}
