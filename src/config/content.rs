//! Content configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::CatalogFormat;

/// Where the question catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentConfig {
    /// Catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,

    /// Overrides the catalog's classification threshold
    pub threshold: Option<i32>,
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            if CatalogFormat::from_path(path).is_err() {
                return Err(ValidationError::UnsupportedContentFormat(path.clone()));
            }
        }
        Ok(())
    }
}
