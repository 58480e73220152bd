//! Content source adapters.

mod embedded;
mod file;
mod format;

pub use embedded::EmbeddedContentSource;
pub use file::FileContentSource;
pub use format::CatalogFormat;
