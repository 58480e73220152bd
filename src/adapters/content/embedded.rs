//! Built-in catalog compiled into the binary.

use once_cell::sync::Lazy;

use crate::domain::content::{builtin_document, Catalog, ContentError};
use crate::ports::ContentSource;

/// Parsed once on first use; the error is kept as text because
/// [`ContentError`] is not `Clone`.
static BUILTIN: Lazy<Result<Catalog, String>> = Lazy::new(|| {
    builtin_document()
        .and_then(Catalog::try_from)
        .map_err(|e| e.to_string())
});

/// Content source backed by the embedded YAML catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedContentSource;

impl EmbeddedContentSource {
    pub fn new() -> Self {
        Self
    }
}

impl ContentSource for EmbeddedContentSource {
    fn load(&self) -> Result<Catalog, ContentError> {
        BUILTIN
            .as_ref()
            .map(Catalog::clone)
            .map_err(|e| ContentError::Builtin(e.clone()))
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}
