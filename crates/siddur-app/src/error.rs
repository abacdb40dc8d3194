use std::path::PathBuf;

use thiserror::Error;

/// Errors loading the document catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: siddur_service::ServiceError,
    },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
