//! The document library.
//!
//! Documents are parsed once on insertion and resolved per request. The
//! library is immutable while serving, so it can be shared across threads.

use siddur_core::types::Location;
use siddur_luach::{CalendarDate, FlagSet, evaluate_with};
use siddur_markup::{Document, ResolvedText};

use crate::error::{ServiceError, ServiceResult};

/// A parsed document with its identity.
#[derive(Debug, Clone)]
pub struct LibraryEntry {
    id: String,
    title: String,
    document: Document,
}

impl LibraryEntry {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }
}

/// Documents in insertion order, plus the location flags are evaluated for.
#[derive(Debug, Clone, Default)]
pub struct Library {
    location: Location,
    entries: Vec<LibraryEntry>,
}

impl Library {
    #[must_use]
    pub const fn new(location: Location) -> Self {
        Self {
            location,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// ## Summary
    /// Parses `source` and adds it under `id`.
    ///
    /// ## Errors
    /// Returns `DuplicateDocument` if `id` is taken, or `Markup` if the source
    /// does not parse. The library is unchanged on error.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        source: &str,
    ) -> ServiceResult<()> {
        let id = id.into();
        if self.get(&id).is_some() {
            return Err(ServiceError::DuplicateDocument(id));
        }

        let document = Document::parse(source).inspect_err(|err| {
            tracing::warn!(document = %id, error = %err, "Document failed to parse");
        })?;
        tracing::debug!(
            document = %id,
            flags = document.referenced_flags().len(),
            "Added document"
        );

        self.entries.push(LibraryEntry {
            id,
            title: title.into(),
            document,
        });
        Ok(())
    }

    /// Document identifiers in insertion order.
    pub fn list_documents(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(LibraryEntry::id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &LibraryEntry> + '_ {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flags for `date` at the library's location.
    #[must_use]
    pub fn flags_for(&self, date: CalendarDate) -> FlagSet {
        evaluate_with(date, self.location)
    }

    /// ## Summary
    /// Resolves document `id` for `date`.
    ///
    /// ## Errors
    /// Returns `DocumentNotFound` for an unknown id.
    #[tracing::instrument(skip(self), fields(date = %date, location = %self.location))]
    pub fn render(&self, id: &str, date: CalendarDate) -> ServiceResult<ResolvedText> {
        let entry = self
            .get(id)
            .ok_or_else(|| ServiceError::DocumentNotFound(id.to_string()))?;
        let flags = self.flags_for(date);
        tracing::debug!(active = %flags, "Rendering document");
        Ok(entry.document.resolve(&flags))
    }
}
