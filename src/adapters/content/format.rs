//! Catalog file formats, chosen by extension.

use std::path::Path;

use crate::domain::content::{CatalogDocument, ContentError};

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Detects the format from the file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat` for anything but `.yaml`, `.yml` or `.json`
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(ContentError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn parse(&self, source: &str) -> Result<CatalogDocument, ContentError> {
        match self {
            CatalogFormat::Yaml => CatalogDocument::from_yaml(source),
            CatalogFormat::Json => CatalogDocument::from_json(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("c.yaml")).unwrap(),
            CatalogFormat::Yaml
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("c.YML")).unwrap(),
            CatalogFormat::Yaml
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("dir/c.json")).unwrap(),
            CatalogFormat::Json
        );
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(matches!(
            CatalogFormat::from_path(Path::new("catalog.toml")),
            Err(ContentError::UnsupportedFormat { .. })
        ));
        assert!(CatalogFormat::from_path(Path::new("catalog")).is_err());
    }
}
