//! Catalog read from a YAML or JSON file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::CatalogFormat;
use crate::domain::content::{Catalog, ContentError};
use crate::ports::ContentSource;

/// Content source that reads and validates a catalog file on every load.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for FileContentSource {
    fn load(&self) -> Result<Catalog, ContentError> {
        let format = CatalogFormat::from_path(&self.path)?;
        let source = fs::read_to_string(&self.path).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })?;

        let catalog = Catalog::try_from(format.parse(&source)?)?;
        debug!(path = %self.path.display(), format = ?format, "Catalog file parsed");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}
