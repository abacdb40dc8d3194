//! Loading documents from disk into a [`Library`].

use std::path::Path;

use siddur_core::config::{DocumentConfig, LibraryConfig};
use siddur_core::constants::DOCUMENT_EXTENSIONS;
use siddur_core::types::Location;
use siddur_service::Library;

use crate::error::{CatalogError, CatalogResult};

/// ## Summary
/// Builds the library described by `config`.
///
/// With an explicit document list, the documents are loaded in that order.
/// Otherwise every `.html`/`.xml` file directly under `config.root` is
/// loaded, identified by its file stem and sorted by it.
///
/// ## Errors
/// Returns an error if a file cannot be read or a document does not parse.
#[tracing::instrument(skip(config), fields(root = %config.root))]
pub fn load_library(config: &LibraryConfig, location: Location) -> CatalogResult<Library> {
    let root = Path::new(&config.root);
    let documents = if config.documents.is_empty() {
        scan_directory(root)?
    } else {
        config.documents.clone()
    };

    let mut library = Library::new(location);
    for doc in &documents {
        let path = root.join(&doc.path);
        let source = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        library
            .insert(doc.id.clone(), doc.display_title(), &source)
            .map_err(|source| CatalogError::Document { path, source })?;
    }

    tracing::info!(documents = library.len(), "Loaded document library");
    Ok(library)
}

/// Lists the documents directly under `root`.
fn scan_directory(root: &Path) -> CatalogResult<Vec<DocumentConfig>> {
    let io_error = |source| CatalogError::Io {
        path: root.to_path_buf(),
        source,
    };

    let mut documents = Vec::new();
    for entry in std::fs::read_dir(root).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        match document_id(&path) {
            Some(id) => documents.push(DocumentConfig {
                id: id.to_string(),
                title: None,
                path: relative_name(&path),
            }),
            None if path.is_file() => {
                tracing::warn!(path = %path.display(), "Skipping non-document file");
            }
            None => {}
        }
    }

    documents.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(documents)
}

/// File stem of a document file, if `path` names one.
fn document_id(path: &Path) -> Option<&str> {
    let extension = path.extension()?.to_str()?;
    if !path.is_file()
        || !DOCUMENT_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    {
        return None;
    }
    path.file_stem()?.to_str()
}

fn relative_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
