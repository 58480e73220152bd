//! Catalog bootstrap - picks a content source from configuration.

use tracing::{error, info, warn};

use crate::adapters::{EmbeddedContentSource, FileContentSource};
use crate::config::ContentConfig;
use crate::domain::content::{Catalog, ContentError};
use crate::ports::ContentSource;

/// Returns the content source the configuration asks for.
pub fn content_source(config: &ContentConfig) -> Box<dyn ContentSource> {
    match &config.path {
        Some(path) => Box::new(FileContentSource::new(path)),
        None => Box::new(EmbeddedContentSource::new()),
    }
}

/// Loads the configured catalog and applies any threshold override.
///
/// # Errors
///
/// Propagates the source's [`ContentError`]; there is no silent fallback
/// to the built-in catalog when a configured file is broken.
pub fn load_catalog(config: &ContentConfig) -> Result<Catalog, ContentError> {
    let source = content_source(config);
    let mut catalog = source.load().map_err(|err| {
        error!(
            source = %source.describe(),
            code = %err.code(),
            error = %err,
            "Catalog load failed"
        );
        err
    })?;

    if let Some(threshold) = config.threshold {
        if threshold != catalog.threshold() {
            warn!(
                from = catalog.threshold(),
                to = threshold,
                "Overriding catalog threshold"
            );
        }
        catalog = catalog.with_threshold(threshold);
    }

    info!(
        source = %source.describe(),
        threshold = catalog.threshold(),
        "Catalog loaded"
    );
    Ok(catalog)
}
